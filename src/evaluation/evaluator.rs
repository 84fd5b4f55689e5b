use crate::classifiers::{ModelDescription, MonotonicClassifier};
use crate::core::error::EvaluationError;
use crate::evaluation::measurement::Measurement;
use crate::evaluation::monotonicity::violation_index;
use crate::evaluation::statistics::SplitStatistics;
use crate::preprocessing::NormalizedSet;
use std::time::{Duration, Instant};

/// Everything derived from one evaluated split: the prediction/actual pairs,
/// the aggregate statistics, the monotonicity-violation index, and the time
/// spent inside the classifier.
pub struct SplitResult {
    pub predictions: Vec<Option<usize>>,
    pub actual: Vec<usize>,
    pub statistics: SplitStatistics,
    pub monotonicity_index: f64,
    pub prediction_time: Duration,
}

/// Immutable outcome of a full evaluation run.
pub struct RunResult {
    pub model: ModelDescription,
    pub model_time: Duration,
    pub train: SplitResult,
    pub test: SplitResult,
}

impl RunResult {
    /// Flat record of every scalar statistic, for the report sink.
    pub fn measurements(&self) -> Vec<Measurement> {
        let mut out = Vec::new();
        for (prefix, split) in [("train", &self.train), ("test", &self.test)] {
            out.push(Measurement::new(
                format!("{prefix}_accuracy"),
                split.statistics.accuracy,
            ));
            out.push(Measurement::new(
                format!("{prefix}_kappa"),
                split.statistics.kappa,
            ));
            out.push(Measurement::new(
                format!("{prefix}_mae"),
                split.statistics.mean_absolute_error,
            ));
            out.push(Measurement::new(
                format!("{prefix}_unclassified"),
                split.statistics.unclassified as f64,
            ));
            out.push(Measurement::new(
                format!("{prefix}_mono_index"),
                split.monotonicity_index,
            ));
        }
        out.push(Measurement::new("rule_count", self.model.rule_count as f64));
        out
    }
}

/// Drives end-to-end prediction for one train/test run.
///
/// The concrete algorithm is injected as a [`MonotonicClassifier`]; the
/// evaluator never learns anything about it beyond that capability. A fresh
/// evaluator is required per run: the elapsed time between construction and
/// `evaluate` is reported as the model-building time, mirroring how the
/// caller is expected to construct the evaluator right before training.
pub struct MonotonicEvaluator<'a> {
    classifier: &'a dyn MonotonicClassifier,
    created: Instant,
}

impl<'a> MonotonicEvaluator<'a> {
    pub fn new(classifier: &'a dyn MonotonicClassifier) -> MonotonicEvaluator<'a> {
        MonotonicEvaluator {
            classifier,
            created: Instant::now(),
        }
    }

    /// Predicts every row of both splits and derives all statistics.
    ///
    /// Training rows are predicted first, then the training monotonicity
    /// index is computed, then the same for the test split. Statistics are
    /// only assembled once both splits have been predicted. Classifier
    /// panics are not caught: a classifier must not fail on a well-formed
    /// normalized vector.
    pub fn evaluate(
        &self,
        train: &NormalizedSet,
        test: &NormalizedSet,
    ) -> Result<RunResult, EvaluationError> {
        if train.num_classes != test.num_classes {
            return Err(EvaluationError::SchemaMismatch(format!(
                "train declares {} classes, test declares {}",
                train.num_classes, test.num_classes
            )));
        }
        if !train.matrix.is_empty()
            && !test.matrix.is_empty()
            && train.num_features() != test.num_features()
        {
            return Err(EvaluationError::SchemaMismatch(format!(
                "train rows have {} features, test rows have {}",
                train.num_features(),
                test.num_features()
            )));
        }

        let model_time = self.created.elapsed();
        let train_result = self.evaluate_split(train)?;
        let test_result = self.evaluate_split(test)?;

        Ok(RunResult {
            model: self.classifier.describe_model(),
            model_time,
            train: train_result,
            test: test_result,
        })
    }

    fn evaluate_split(&self, set: &NormalizedSet) -> Result<SplitResult, EvaluationError> {
        let start = Instant::now();
        let predictions: Vec<Option<usize>> = set
            .matrix
            .iter()
            .map(|row| self.classifier.classify(row))
            .collect();
        let prediction_time = start.elapsed();

        let monotonicity_index = violation_index(&set.matrix, &predictions);
        let statistics =
            SplitStatistics::from_predictions(&predictions, &set.labels, set.num_classes)?;

        Ok(SplitResult {
            predictions,
            actual: set.labels.clone(),
            statistics,
            monotonicity_index,
            prediction_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::Normalizer;
    use crate::testing::dummies::ordinal_dataset;
    use crate::testing::stubs::{LookupClassifier, RefusingClassifier, ThresholdClassifier};

    fn chain_set(rows: usize) -> NormalizedSet {
        let data: Vec<(Vec<f64>, usize)> = (0..rows)
            .map(|i| {
                let v = i as f64 / (rows - 1) as f64;
                (vec![v, v], usize::from(v >= 0.5))
            })
            .collect();
        let ds = ordinal_dataset(&data, 2);
        Normalizer::fit_transform(&ds).unwrap().1
    }

    #[test]
    fn perfect_lookup_classifier_scores_perfectly() {
        let set = chain_set(6);
        let oracle = LookupClassifier::from_set(&set);
        let evaluator = MonotonicEvaluator::new(&oracle);
        let result = evaluator.evaluate(&set, &set).unwrap();

        assert!((result.train.statistics.accuracy - 1.0).abs() < 1e-12);
        assert!((result.test.statistics.accuracy - 1.0).abs() < 1e-12);
        assert_eq!(result.train.statistics.unclassified, 0);
        assert_eq!(result.train.monotonicity_index, 0.0);
        assert_eq!(result.train.predictions, result.test.predictions);
    }

    #[test]
    fn refusing_classifier_leaves_everything_unclassified() {
        let set = chain_set(4);
        let refuser = RefusingClassifier;
        let evaluator = MonotonicEvaluator::new(&refuser);
        let result = evaluator.evaluate(&set, &set).unwrap();

        assert_eq!(result.test.statistics.unclassified, 4);
        assert_eq!(result.test.statistics.accuracy, 0.0);
        assert_eq!(result.test.monotonicity_index, 0.0);
        assert!(result.test.predictions.iter().all(Option::is_none));
    }

    #[test]
    fn threshold_classifier_is_monotone() {
        let set = chain_set(8);
        let classifier = ThresholdClassifier { num_classes: 2 };
        let evaluator = MonotonicEvaluator::new(&classifier);
        let result = evaluator.evaluate(&set, &set).unwrap();

        assert_eq!(result.train.monotonicity_index, 0.0);
        assert_eq!(result.test.monotonicity_index, 0.0);
    }

    #[test]
    fn class_count_mismatch_is_rejected() {
        let train = chain_set(4);
        let test_ds = ordinal_dataset(&[(vec![0.0, 0.0], 0)], 3);
        let test = Normalizer::fit_transform(&test_ds).unwrap().1;
        let refuser = RefusingClassifier;
        let evaluator = MonotonicEvaluator::new(&refuser);
        let err = evaluator.evaluate(&train, &test).err().unwrap();
        assert!(matches!(err, EvaluationError::SchemaMismatch(_)));
    }

    #[test]
    fn feature_width_mismatch_is_rejected() {
        let train = chain_set(4);
        let test_ds = ordinal_dataset(&[(vec![0.0, 0.0, 0.0], 0)], 2);
        let test = Normalizer::fit_transform(&test_ds).unwrap().1;
        let refuser = RefusingClassifier;
        let evaluator = MonotonicEvaluator::new(&refuser);
        let err = evaluator.evaluate(&train, &test).err().unwrap();
        assert!(matches!(err, EvaluationError::SchemaMismatch(_)));
    }

    #[test]
    fn measurements_cover_both_splits() {
        let set = chain_set(4);
        let classifier = ThresholdClassifier { num_classes: 2 };
        let evaluator = MonotonicEvaluator::new(&classifier);
        let result = evaluator.evaluate(&set, &set).unwrap();

        let measurements = result.measurements();
        for name in [
            "train_accuracy",
            "train_kappa",
            "train_mae",
            "train_unclassified",
            "train_mono_index",
            "test_accuracy",
            "test_kappa",
            "test_mae",
            "test_unclassified",
            "test_mono_index",
            "rule_count",
        ] {
            assert!(
                measurements.iter().any(|m| m.name == name),
                "missing {name}"
            );
        }
    }
}
