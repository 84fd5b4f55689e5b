use crate::core::error::EvaluationError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// How the per-class target count is chosen when rebalancing a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum BalancingStrategy {
    /// Every class is cut down to the size of the smallest class.
    UndersampleToMinority,
    /// Every class is grown to the size of the largest class.
    OversampleToMajority,
    /// Every class is resampled to `round(total / numClasses)`.
    ResampleToMean,
}

/// Selects row indices so that every class contributes exactly the target
/// count for the strategy.
///
/// Classes larger than the target are sampled without replacement; classes
/// smaller than the target keep every original row and draw the remainder
/// with replacement. Replacement is never used when shrinking. The same seed
/// always yields the same selection.
pub fn balanced_indices(
    labels: &[usize],
    num_classes: usize,
    strategy: BalancingStrategy,
    seed: u64,
) -> Result<Vec<usize>, EvaluationError> {
    if num_classes == 0 {
        return Err(EvaluationError::InvalidParameter(
            "num_classes must be > 0".into(),
        ));
    }

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); num_classes];
    for (row, &label) in labels.iter().enumerate() {
        if label >= num_classes {
            return Err(EvaluationError::InvalidParameter(format!(
                "row {row} has class {label}, outside [0, {num_classes})"
            )));
        }
        members[label].push(row);
    }
    if let Some(empty) = members.iter().position(Vec::is_empty) {
        return Err(EvaluationError::InvalidParameter(format!(
            "class {empty} has no instances to resample"
        )));
    }

    let target = match strategy {
        BalancingStrategy::UndersampleToMinority => {
            members.iter().map(Vec::len).min().unwrap_or(0)
        }
        BalancingStrategy::OversampleToMajority => {
            members.iter().map(Vec::len).max().unwrap_or(0)
        }
        BalancingStrategy::ResampleToMean => {
            (labels.len() as f64 / num_classes as f64).round() as usize
        }
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut selected = Vec::with_capacity(target * num_classes);
    for class_members in &members {
        if class_members.len() >= target {
            // Partial Fisher-Yates draw, without replacement.
            let mut pool = class_members.clone();
            for _ in 0..target {
                let pick = rng.random_range(0..pool.len());
                selected.push(pool.swap_remove(pick));
            }
        } else {
            selected.extend_from_slice(class_members);
            for _ in class_members.len()..target {
                let pick = rng.random_range(0..class_members.len());
                selected.push(class_members[pick]);
            }
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn two_class_labels() -> Vec<usize> {
        // 3 rows of class 0, 7 rows of class 1.
        vec![0, 1, 1, 0, 1, 1, 1, 0, 1, 1]
    }

    #[test]
    fn undersampling_cuts_to_minority() {
        let selected =
            balanced_indices(&two_class_labels(), 2, BalancingStrategy::UndersampleToMinority, 7)
                .unwrap();
        assert_eq!(selected.len(), 6);

        let labels = two_class_labels();
        let class0 = selected.iter().filter(|&&i| labels[i] == 0).count();
        assert_eq!(class0, 3);

        // Shrinking never duplicates a row.
        let unique: HashSet<usize> = selected.iter().copied().collect();
        assert_eq!(unique.len(), selected.len());
    }

    #[test]
    fn oversampling_grows_to_majority() {
        let labels = two_class_labels();
        let selected =
            balanced_indices(&labels, 2, BalancingStrategy::OversampleToMajority, 7).unwrap();
        assert_eq!(selected.len(), 14);

        let class0 = selected.iter().filter(|&&i| labels[i] == 0).count();
        let class1 = selected.iter().filter(|&&i| labels[i] == 1).count();
        assert_eq!(class0, 7);
        assert_eq!(class1, 7);

        // Every original class-0 row survives at least once.
        for original in [0usize, 3, 7] {
            assert!(selected.contains(&original));
        }
    }

    #[test]
    fn resample_to_mean_rounds_the_mean_class_size() {
        // Counts {3, 5, 8}: mean 16/3 rounds to 5, so 15 rows come back.
        let mut labels = Vec::new();
        labels.extend(std::iter::repeat_n(0usize, 3));
        labels.extend(std::iter::repeat_n(1usize, 5));
        labels.extend(std::iter::repeat_n(2usize, 8));

        let selected =
            balanced_indices(&labels, 3, BalancingStrategy::ResampleToMean, 3).unwrap();
        assert_eq!(selected.len(), 15);
        for class in 0..3 {
            let count = selected.iter().filter(|&&i| labels[i] == class).count();
            assert_eq!(count, 5);
        }
    }

    #[test]
    fn same_seed_same_selection() {
        let labels = two_class_labels();
        let a = balanced_indices(&labels, 2, BalancingStrategy::UndersampleToMinority, 42).unwrap();
        let b = balanced_indices(&labels, 2, BalancingStrategy::UndersampleToMinority, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_class_is_rejected() {
        let err = balanced_indices(&[0, 0, 0], 2, BalancingStrategy::OversampleToMajority, 1)
            .err()
            .unwrap();
        assert!(matches!(err, EvaluationError::InvalidParameter(_)));
    }

    #[test]
    fn out_of_range_label_is_rejected() {
        let err = balanced_indices(&[0, 5], 2, BalancingStrategy::UndersampleToMinority, 1)
            .err()
            .unwrap();
        assert!(matches!(err, EvaluationError::InvalidParameter(_)));
    }

    #[test]
    fn selection_derives_a_balanced_dataset() {
        use crate::testing::dummies::ordinal_dataset;

        let labels = two_class_labels();
        let rows: Vec<(Vec<f64>, usize)> = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (vec![i as f64 / 10.0], label))
            .collect();
        let ds = ordinal_dataset(&rows, 2);

        let selected =
            balanced_indices(&labels, 2, BalancingStrategy::UndersampleToMinority, 11).unwrap();
        let balanced = ds.select(&selected);

        assert_eq!(balanced.num_instances(), 6);
        let balanced_labels = balanced.labels().unwrap();
        assert_eq!(balanced_labels.iter().filter(|&&l| l == 0).count(), 3);
        assert_eq!(balanced_labels.iter().filter(|&&l| l == 1).count(), 3);
    }

    #[test]
    fn strategy_names_round_trip() {
        assert_eq!(
            BalancingStrategy::UndersampleToMinority.to_string(),
            "undersample-to-minority"
        );
        assert_eq!(
            BalancingStrategy::from_str("resample-to-mean").unwrap(),
            BalancingStrategy::ResampleToMean
        );
    }
}
