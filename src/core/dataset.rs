use crate::core::error::DataFormatError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use std::sync::Arc;

/// An ordered, schema-homogeneous collection of labeled instances.
///
/// Datasets are supplied whole by an external loader. The framework never
/// appends or removes instances; it only derives normalized copies and
/// row-subset views (`select`).
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    /// Builds a dataset, verifying every row matches the header width.
    pub fn new(
        header: Arc<InstanceHeader>,
        instances: Vec<DenseInstance>,
    ) -> Result<Dataset, DataFormatError> {
        let expected = header.number_of_attributes();
        for (row, instance) in instances.iter().enumerate() {
            if instance.values.len() != expected {
                return Err(DataFormatError::RowWidth {
                    row,
                    found: instance.values.len(),
                    expected,
                });
            }
        }
        Ok(Dataset { header, instances })
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn num_input_attributes(&self) -> usize {
        self.header.number_of_input_attributes()
    }

    pub fn num_classes(&self) -> usize {
        self.header.number_of_classes()
    }

    pub fn instances(&self) -> impl Iterator<Item = &DenseInstance> {
        self.instances.iter()
    }

    /// Ground-truth label of a row as a class index in `[0, num_classes)`.
    pub fn label(&self, row: usize) -> Result<usize, DataFormatError> {
        let instance = self
            .instances
            .get(row)
            .ok_or(DataFormatError::RowOutOfRange {
                row,
                len: self.instances.len(),
            })?;
        let raw = instance
            .class_value()
            .filter(|v| !v.is_nan())
            .ok_or(DataFormatError::MissingClassValue(row))?;
        let num_classes = self.num_classes();
        let value = raw.round() as i64;
        if value < 0 || (num_classes > 0 && value as usize >= num_classes) {
            return Err(DataFormatError::ClassOutOfRange {
                row,
                value,
                num_classes,
            });
        }
        Ok(value as usize)
    }

    pub fn labels(&self) -> Result<Vec<usize>, DataFormatError> {
        (0..self.num_instances()).map(|i| self.label(i)).collect()
    }

    /// Derives a dataset from a row-index selection. Indices may repeat
    /// (oversampling) and out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        let instances = indices
            .iter()
            .filter_map(|&i| self.instances.get(i).cloned())
            .collect();
        Dataset {
            header: Arc::clone(&self.header),
            instances,
        }
    }
}
