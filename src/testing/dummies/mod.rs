use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

/// Header with `num_inputs` real attributes declared on [0, 1] and a nominal
/// class attribute `c0..c{k-1}` in the last position.
pub fn ordinal_header(num_inputs: usize, num_classes: usize) -> Arc<InstanceHeader> {
    let mut attrs: Vec<AttributeRef> = (0..num_inputs)
        .map(|i| {
            Arc::new(NumericAttribute::real(format!("x{i}"), 0.0, 1.0)) as AttributeRef
        })
        .collect();
    let class_values = (0..num_classes).map(|c| format!("c{c}")).collect();
    attrs.push(Arc::new(NominalAttribute::new("class".into(), class_values)) as AttributeRef);
    Arc::new(InstanceHeader::new("ordinal".into(), attrs, num_inputs))
}

/// Dataset from `(inputs, label)` pairs; the label is appended as the class
/// value of each row.
pub fn ordinal_dataset(rows: &[(Vec<f64>, usize)], num_classes: usize) -> Dataset {
    let num_inputs = rows.first().map_or(0, |(inputs, _)| inputs.len());
    let header = ordinal_header(num_inputs, num_classes);
    let instances = rows
        .iter()
        .map(|(inputs, label)| {
            let mut values = inputs.clone();
            values.push(*label as f64);
            DenseInstance::new(Arc::clone(&header), values)
        })
        .collect();
    Dataset::new(header, instances).expect("fixture rows match the fixture header")
}
