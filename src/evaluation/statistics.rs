use crate::core::error::EvaluationError;
use crate::evaluation::confusion_matrix::ConfusionMatrix;
use serde::Serialize;

/// Aggregate statistics for one evaluated split.
///
/// All denominators follow the framework's convention: accuracy and MAE are
/// divided by the split size, not the classified count, so unclassified
/// instances silently count against both.
#[derive(Debug, Clone)]
pub struct SplitStatistics {
    pub confusion: ConfusionMatrix,
    pub accuracy: f64,
    pub kappa: f64,
    pub mean_absolute_error: f64,
    pub unclassified: u64,
    pub split_size: usize,
}

impl SplitStatistics {
    pub fn from_predictions(
        predicted: &[Option<usize>],
        actual: &[usize],
        num_classes: usize,
    ) -> Result<SplitStatistics, EvaluationError> {
        let confusion = ConfusionMatrix::from_predictions(predicted, actual, num_classes)?;
        let n = predicted.len();
        let accuracy = accuracy(&confusion, n);
        let kappa = kappa(&confusion, n);
        let mean_absolute_error = mean_absolute_error(predicted, actual, n);
        Ok(SplitStatistics {
            unclassified: confusion.unclassified(),
            confusion,
            accuracy,
            kappa,
            mean_absolute_error,
            split_size: n,
        })
    }
}

fn accuracy(confusion: &ConfusionMatrix, split_size: usize) -> f64 {
    if split_size == 0 {
        return f64::NAN;
    }
    confusion.diagonal_sum() as f64 / split_size as f64
}

/// Cohen's kappa with marginals normalized by the split size.
///
/// NaN when the split is empty or the expected agreement reaches 1, where
/// the statistic is undefined; never a silent 0.
fn kappa(confusion: &ConfusionMatrix, split_size: usize) -> f64 {
    if split_size == 0 {
        return f64::NAN;
    }
    let n = split_size as f64;
    let observed = confusion.diagonal_sum() as f64 / n;
    let mut expected = 0.0;
    for class in 0..confusion.num_classes() {
        let row = confusion.predicted_total(class) as f64 / n;
        let col = confusion.actual_total(class) as f64 / n;
        expected += row * col;
    }
    let denom = 1.0 - expected;
    if denom.abs() > f64::EPSILON {
        (observed - expected) / denom
    } else {
        f64::NAN
    }
}

/// Mean absolute difference between predicted and actual class indices,
/// summed over classified instances, divided by the split size. Meaningful
/// only when classes are ordered.
fn mean_absolute_error(predicted: &[Option<usize>], actual: &[usize], split_size: usize) -> f64 {
    if split_size == 0 {
        return f64::NAN;
    }
    let total: f64 = predicted
        .iter()
        .zip(actual.iter())
        .filter_map(|(&pred, &real)| pred.map(|p| (p as f64 - real as f64).abs()))
        .sum();
    total / split_size as f64
}

/// How much an upstream instance/feature-selection step shrank the
/// reference dataset. Purely descriptive: the selection algorithm itself is
/// outside this framework.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReductionRatios {
    pub instances: f64,
    pub features: f64,
    pub combined: f64,
}

pub fn reduction_ratios(
    retained_rows: usize,
    reference_rows: usize,
    retained_features: usize,
    reference_features: usize,
) -> ReductionRatios {
    let row_retention = ratio(retained_rows, reference_rows);
    let feature_retention = ratio(retained_features, reference_features);
    ReductionRatios {
        instances: 1.0 - row_retention,
        features: 1.0 - feature_retention,
        combined: 1.0 - row_retention * feature_retention,
    }
}

fn ratio(retained: usize, reference: usize) -> f64 {
    if reference == 0 {
        return f64::NAN;
    }
    retained as f64 / reference as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_counts_unclassified_against_the_split() {
        let predicted = vec![Some(0), Some(1), None, None];
        let actual = vec![0, 1, 0, 1];
        let stats = SplitStatistics::from_predictions(&predicted, &actual, 2).unwrap();
        assert_eq!(stats.accuracy, 0.5);
        assert_eq!(stats.unclassified, 2);
        assert_eq!(stats.split_size, 4);
    }

    #[test]
    fn kappa_is_one_for_perfect_balanced_agreement() {
        let predicted = vec![Some(0), Some(1), Some(0), Some(1)];
        let actual = vec![0, 1, 0, 1];
        let stats = SplitStatistics::from_predictions(&predicted, &actual, 2).unwrap();
        assert!((stats.kappa - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kappa_is_zero_at_chance_level() {
        // Always predicting class 1 on a half-and-half split: observed
        // agreement equals expected agreement.
        let predicted = vec![Some(1), Some(1), Some(1), Some(1)];
        let actual = vec![0, 0, 1, 1];
        let stats = SplitStatistics::from_predictions(&predicted, &actual, 2).unwrap();
        assert!(stats.kappa.abs() < 1e-12);
    }

    #[test]
    fn kappa_can_be_negative() {
        let predicted = vec![Some(1), Some(0)];
        let actual = vec![0, 1];
        let stats = SplitStatistics::from_predictions(&predicted, &actual, 2).unwrap();
        assert!(stats.kappa < 0.0);
        assert!(stats.kappa <= 1.0);
    }

    #[test]
    fn kappa_is_nan_when_expected_agreement_is_one() {
        // One class only: expected agreement is exactly 1.
        let predicted = vec![Some(0), Some(0)];
        let actual = vec![0, 0];
        let stats = SplitStatistics::from_predictions(&predicted, &actual, 1).unwrap();
        assert!(stats.kappa.is_nan());
    }

    #[test]
    fn empty_split_statistics_are_nan() {
        let stats = SplitStatistics::from_predictions(&[], &[], 3).unwrap();
        assert!(stats.accuracy.is_nan());
        assert!(stats.kappa.is_nan());
        assert!(stats.mean_absolute_error.is_nan());
        assert_eq!(stats.split_size, 0);
    }

    #[test]
    fn mae_uses_split_size_and_skips_unclassified() {
        let predicted = vec![Some(2), Some(0), None, Some(1)];
        let actual = vec![0, 0, 2, 1];
        let stats = SplitStatistics::from_predictions(&predicted, &actual, 3).unwrap();
        // |2-0| + |0-0| + |1-1| over a split of 4.
        assert_eq!(stats.mean_absolute_error, 0.5);
        assert!(stats.mean_absolute_error >= 0.0);
    }

    #[test]
    fn accuracy_stays_in_unit_interval() {
        let predicted = vec![Some(0), Some(0), Some(1)];
        let actual = vec![1, 0, 1];
        let stats = SplitStatistics::from_predictions(&predicted, &actual, 2).unwrap();
        assert!((0.0..=1.0).contains(&stats.accuracy));
    }

    #[test]
    fn reduction_ratios_report_shrinkage() {
        let r = reduction_ratios(25, 100, 4, 8);
        assert!((r.instances - 0.75).abs() < 1e-12);
        assert!((r.features - 0.5).abs() < 1e-12);
        assert!((r.combined - 0.875).abs() < 1e-12);
    }

    #[test]
    fn reduction_against_empty_reference_is_nan() {
        let r = reduction_ratios(1, 0, 1, 2);
        assert!(r.instances.is_nan());
        assert!(r.combined.is_nan());
    }
}
