use crate::core::attributes::Attribute;
use std::any::Any;

/// Numeric input or output attribute with declared `[min, max]` bounds.
///
/// `integer` distinguishes an ordinal integer attribute (valid as a class
/// attribute) from a real-valued one (not valid as a class attribute).
pub struct NumericAttribute {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub integer: bool,
}

impl NumericAttribute {
    pub fn real(name: String, min: f64, max: f64) -> NumericAttribute {
        NumericAttribute {
            name,
            min,
            max,
            integer: false,
        }
    }

    pub fn integer(name: String, min: f64, max: f64) -> NumericAttribute {
        NumericAttribute {
            name,
            min,
            max,
            integer: true,
        }
    }

    /// Declared range, `max - min`. Zero when the bounds collapse.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl Attribute for NumericAttribute {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
