mod confusion_matrix;
mod dominance;
mod evaluator;
mod measurement;
mod monotonicity;
mod statistics;

pub use confusion_matrix::ConfusionMatrix;
pub use dominance::Dominance;
pub use evaluator::{MonotonicEvaluator, RunResult, SplitResult};
pub use measurement::Measurement;
pub use monotonicity::violation_index;
pub use statistics::{ReductionRatios, SplitStatistics, reduction_ratios};
