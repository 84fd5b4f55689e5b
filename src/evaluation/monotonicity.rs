use crate::evaluation::dominance::Dominance;

/// Fraction of ordered row pairs whose dominance relation disagrees with the
/// ordering of their predicted labels.
///
/// Every unordered pair `(i, j)` with `i < j` is classified once by the
/// dominance comparator. Equal and incomparable pairs never count as
/// violations, and neither does a pair with an unclassified endpoint. The
/// result is `2 * violations / (m^2 - m)`: violations over the number of
/// ordered pairs, in `[0, 1]`, 0 meaning perfectly monotonic. Splits with
/// fewer than two rows report 0.
///
/// This scan is O(m^2 * n) and is the dominant cost of the framework for
/// large datasets. No sampling or approximation is applied.
pub fn violation_index(matrix: &[Vec<f64>], predictions: &[Option<usize>]) -> f64 {
    debug_assert_eq!(matrix.len(), predictions.len());
    let m = matrix.len();
    if m < 2 {
        return 0.0;
    }
    let mut violations = 0u64;
    for i in 0..m {
        let Some(pred_i) = predictions[i] else {
            continue;
        };
        for j in (i + 1)..m {
            let Some(pred_j) = predictions[j] else {
                continue;
            };
            let violated = match Dominance::between(&matrix[i], &matrix[j]) {
                Dominance::Dominates => pred_i < pred_j,
                Dominance::Dominated => pred_i > pred_j,
                Dominance::Equal | Dominance::Incomparable => false,
            };
            if violated {
                violations += 1;
            }
        }
    }
    2.0 * violations as f64 / (m * m - m) as f64
}
