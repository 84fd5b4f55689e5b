use crate::core::attributes::{Attribute, AttributeRef, NominalAttribute, NumericAttribute};

/// Shared schema for every instance of a dataset: relation name, the ordered
/// attribute list, and the index of the single output (class) attribute.
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<AttributeRef>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Input attributes are every attribute except the class attribute.
    pub fn number_of_input_attributes(&self) -> usize {
        self.attributes.len().saturating_sub(1)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        self.attributes.get(index).map(|a| &**a as &dyn Attribute)
    }

    pub fn class_attribute(&self) -> Option<&dyn Attribute> {
        self.attribute_at_index(self.class_index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }

    /// Indices of the input attributes, in schema order, skipping the class.
    pub fn input_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.attributes.len()).filter(move |&i| i != self.class_index)
    }

    /// Size of the class domain: the value count of a nominal class, or the
    /// declared integer span of an integer class. Zero for a real-valued
    /// class, which this framework rejects at normalization time.
    pub fn number_of_classes(&self) -> usize {
        let Some(attr) = self.class_attribute() else {
            return 0;
        };
        if let Some(nominal) = attr.as_any().downcast_ref::<NominalAttribute>() {
            return nominal.domain_size();
        }
        if let Some(numeric) = attr.as_any().downcast_ref::<NumericAttribute>() {
            if numeric.integer {
                return (numeric.max - numeric.min) as usize + 1;
            }
        }
        0
    }
}
