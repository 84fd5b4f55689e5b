use crate::classifiers::{ModelDescription, MonotonicClassifier};
use crate::preprocessing::NormalizedSet;

/// Monotone stub: predicts the rounded feature sum, clamped to the class
/// range. Non-decreasing in every component, so it never violates
/// monotonicity.
pub struct ThresholdClassifier {
    pub num_classes: usize,
}

impl MonotonicClassifier for ThresholdClassifier {
    fn classify(&self, features: &[f64]) -> Option<usize> {
        if self.num_classes == 0 {
            return None;
        }
        let sum: f64 = features.iter().sum();
        Some((sum.round().max(0.0) as usize).min(self.num_classes - 1))
    }

    fn describe_model(&self) -> ModelDescription {
        ModelDescription {
            rule_count: self.num_classes,
            text: "if round(sum(x)) >= k then class k".into(),
        }
    }
}

/// Stub that refuses every instance.
pub struct RefusingClassifier;

impl MonotonicClassifier for RefusingClassifier {
    fn classify(&self, _features: &[f64]) -> Option<usize> {
        None
    }

    fn describe_model(&self) -> ModelDescription {
        ModelDescription {
            rule_count: 0,
            text: String::new(),
        }
    }
}

/// Oracle stub: answers from an exact-match row table, refusing unknown
/// vectors.
pub struct LookupClassifier {
    rows: Vec<(Vec<f64>, usize)>,
}

impl LookupClassifier {
    pub fn new(rows: Vec<(Vec<f64>, usize)>) -> LookupClassifier {
        LookupClassifier { rows }
    }

    pub fn from_set(set: &NormalizedSet) -> LookupClassifier {
        let rows = set
            .matrix
            .iter()
            .cloned()
            .zip(set.labels.iter().copied())
            .collect();
        LookupClassifier { rows }
    }
}

impl MonotonicClassifier for LookupClassifier {
    fn classify(&self, features: &[f64]) -> Option<usize> {
        self.rows
            .iter()
            .find(|(row, _)| row.as_slice() == features)
            .map(|&(_, label)| label)
    }

    fn describe_model(&self) -> ModelDescription {
        ModelDescription {
            rule_count: self.rows.len(),
            text: format!("{} memorized rows", self.rows.len()),
        }
    }
}
