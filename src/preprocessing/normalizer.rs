use crate::core::attributes::{NominalAttribute, NumericAttribute};
use crate::core::dataset::Dataset;
use crate::core::error::{DataFormatError, EvaluationError};
use crate::core::instances::Instance;

/// Per-attribute shift and scale derived from the training dataset's
/// declared bounds, one entry per input attribute in schema order.
///
/// Nominal attributes get `min = 0` and `range = domainSize - 1`, so ordinal
/// indices land in [0, 1] like numeric values do.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationParams {
    pub mins: Vec<f64>,
    pub ranges: Vec<f64>,
}

impl NormalizationParams {
    pub fn len(&self) -> usize {
        self.mins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mins.is_empty()
    }
}

/// Dense normalized feature matrix with its parallel label vector.
///
/// Built once per dataset and immutable thereafter; one evaluation run owns
/// its sets exclusively.
pub struct NormalizedSet {
    pub matrix: Vec<Vec<f64>>,
    pub labels: Vec<usize>,
    pub num_classes: usize,
}

impl NormalizedSet {
    pub fn num_instances(&self) -> usize {
        self.matrix.len()
    }

    pub fn num_features(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }
}

/// Scales every input attribute to [0, 1] and imputes missing values to 0.
///
/// The shift/scale table is fitted once from the TRAINING dataset's declared
/// attribute bounds and reused verbatim for test and reference datasets.
/// Recomputing it from a test dataset's own bounds would let train-time and
/// test-time feature scales diverge, so `transform` never refits.
pub struct Normalizer {
    params: NormalizationParams,
}

impl Normalizer {
    /// Derives normalization parameters from the training dataset.
    ///
    /// Fails fast with a [`DataFormatError`] when the dataset does not
    /// declare a usable output attribute or declares a real-valued one.
    pub fn fit(train: &Dataset) -> Result<Normalizer, DataFormatError> {
        check_output_attribute(train)?;
        let header = train.header();
        let mut mins = Vec::with_capacity(header.number_of_input_attributes());
        let mut ranges = Vec::with_capacity(header.number_of_input_attributes());
        for (index, attr) in header.attributes.iter().enumerate() {
            if index == header.class_index() {
                continue;
            }
            if let Some(nominal) = attr.as_any().downcast_ref::<NominalAttribute>() {
                mins.push(0.0);
                ranges.push(nominal.domain_size().saturating_sub(1) as f64);
            } else if let Some(numeric) = attr.as_any().downcast_ref::<NumericAttribute>() {
                mins.push(numeric.min);
                ranges.push(numeric.range());
            } else {
                mins.push(0.0);
                ranges.push(0.0);
            }
        }
        Ok(Normalizer {
            params: NormalizationParams { mins, ranges },
        })
    }

    /// Fits on the training dataset and normalizes it in one step.
    pub fn fit_transform(
        train: &Dataset,
    ) -> Result<(Normalizer, NormalizedSet), EvaluationError> {
        let normalizer = Normalizer::fit(train)?;
        let set = normalizer.transform(train)?;
        Ok((normalizer, set))
    }

    pub fn params(&self) -> &NormalizationParams {
        &self.params
    }

    /// Normalizes a dataset with the training-derived parameters.
    ///
    /// Missing values become 0.0 before any scaling, so a missing numeric
    /// value is 0.0, not `(0 - min) / range`. An attribute with a collapsed
    /// range (declared min == max, or a single-value nominal domain)
    /// normalizes to 0.0.
    pub fn transform(&self, dataset: &Dataset) -> Result<NormalizedSet, EvaluationError> {
        check_output_attribute(dataset)?;
        if dataset.num_input_attributes() != self.params.len() {
            return Err(EvaluationError::SchemaMismatch(format!(
                "dataset '{}' has {} input attributes, normalizer was fitted on {}",
                dataset.header().relation_name(),
                dataset.num_input_attributes(),
                self.params.len()
            )));
        }

        let header = dataset.header();
        let mut matrix = Vec::with_capacity(dataset.num_instances());
        for instance in dataset.instances() {
            let mut row = Vec::with_capacity(self.params.len());
            for (slot, index) in header.input_indices().enumerate() {
                if instance.is_missing_at_index(index) {
                    row.push(0.0);
                    continue;
                }
                let raw = instance.value_at_index(index).unwrap_or(0.0);
                let range = self.params.ranges[slot];
                if range > 0.0 {
                    row.push((raw - self.params.mins[slot]) / range);
                } else {
                    row.push(0.0);
                }
            }
            matrix.push(row);
        }

        let labels = dataset.labels()?;
        Ok(NormalizedSet {
            matrix,
            labels,
            num_classes: dataset.num_classes(),
        })
    }
}

fn check_output_attribute(dataset: &Dataset) -> Result<(), DataFormatError> {
    let header = dataset.header();
    let Some(class_attr) = header.class_attribute() else {
        return Err(DataFormatError::MissingOutputAttribute(
            header.relation_name().to_string(),
        ));
    };
    if let Some(numeric) = class_attr.as_any().downcast_ref::<NumericAttribute>() {
        if !numeric.integer {
            return Err(DataFormatError::RealValuedOutput(numeric.name.clone()));
        }
    }
    Ok(())
}
