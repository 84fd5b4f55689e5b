use crate::core::attributes::Attribute;
use crate::core::instance_header::InstanceHeader;

/// One labeled row of a dataset. Missing values are encoded as NaN.
pub trait Instance {
    fn value_at_index(&self, index: usize) -> Option<f64>;

    fn is_missing_at_index(&self, index: usize) -> bool;

    fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute>;

    fn number_of_attributes(&self) -> usize;

    fn class_index(&self) -> usize;

    fn class_value(&self) -> Option<f64>;

    fn header(&self) -> &InstanceHeader;
}
