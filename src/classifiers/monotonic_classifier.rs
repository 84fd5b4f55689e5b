/// Rule summary emitted by a trained classifier for the report sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescription {
    pub rule_count: usize,
    pub text: String,
}

/// Capability implemented by concrete monotonic classification algorithms.
///
/// The evaluator drives this interface; it never inspects the model beyond
/// these two methods. `classify` must behave as a pure function of the
/// normalized feature vector: same input, same answer, no evaluator state
/// touched. Returning `None` means the classifier refuses to assign a class;
/// such instances are tallied as unclassified and count against accuracy.
pub trait MonotonicClassifier {
    fn classify(&self, features: &[f64]) -> Option<usize>;

    fn describe_model(&self) -> ModelDescription;
}
