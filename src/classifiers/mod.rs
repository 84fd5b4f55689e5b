mod monotonic_classifier;

pub use monotonic_classifier::ModelDescription;
pub use monotonic_classifier::MonotonicClassifier;
