use crate::core::error::EvaluationError;

/// Square count matrix indexed `[predicted][actual]`.
///
/// Only classified instances enter the matrix; instances the classifier
/// refused (`None`) are tallied in a separate `unclassified` counter.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix {
    counts: Vec<Vec<u64>>,
    num_classes: usize,
    unclassified: u64,
}

impl ConfusionMatrix {
    pub fn from_predictions(
        predicted: &[Option<usize>],
        actual: &[usize],
        num_classes: usize,
    ) -> Result<ConfusionMatrix, EvaluationError> {
        if predicted.len() != actual.len() {
            return Err(EvaluationError::InvalidParameter(format!(
                "predicted has {} entries, actual has {}",
                predicted.len(),
                actual.len()
            )));
        }
        let mut counts = vec![vec![0u64; num_classes]; num_classes];
        let mut unclassified = 0u64;
        for (row, (&pred, &real)) in predicted.iter().zip(actual.iter()).enumerate() {
            if real >= num_classes {
                return Err(EvaluationError::InvalidParameter(format!(
                    "instance {row}: actual class {real} outside [0, {num_classes})"
                )));
            }
            match pred {
                None => unclassified += 1,
                Some(p) if p >= num_classes => {
                    return Err(EvaluationError::InvalidParameter(format!(
                        "instance {row}: predicted class {p} outside [0, {num_classes})"
                    )));
                }
                Some(p) => counts[p][real] += 1,
            }
        }
        Ok(ConfusionMatrix {
            counts,
            num_classes,
            unclassified,
        })
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn count(&self, predicted: usize, actual: usize) -> u64 {
        self.counts[predicted][actual]
    }

    pub fn unclassified(&self) -> u64 {
        self.unclassified
    }

    /// Number of instances that entered the matrix.
    pub fn classified(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    pub fn diagonal_sum(&self) -> u64 {
        (0..self.num_classes).map(|c| self.counts[c][c]).sum()
    }

    /// Total of the row for one predicted class.
    pub fn predicted_total(&self, predicted: usize) -> u64 {
        self.counts[predicted].iter().sum()
    }

    /// Total of the column for one actual class.
    pub fn actual_total(&self, actual: usize) -> u64 {
        self.counts.iter().map(|row| row[actual]).sum()
    }
}
