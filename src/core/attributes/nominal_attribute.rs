use crate::core::attributes::Attribute;
use std::any::Any;

/// Nominal attribute with an ordered, finite value list.
///
/// Row values for a nominal attribute are stored pre-encoded as the ordinal
/// index of the value within `values`.
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
}

impl NominalAttribute {
    pub fn new(name: String, values: Vec<String>) -> NominalAttribute {
        NominalAttribute { name, values }
    }

    pub fn domain_size(&self) -> usize {
        self.values.len()
    }
}

impl Attribute for NominalAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
