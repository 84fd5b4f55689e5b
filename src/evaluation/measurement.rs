use serde::Serialize;

/// Summarized scalar metric emitted for the report sink.
///
/// Typical examples: `"test_accuracy"`, `"train_kappa"`, `"test_mono_index"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
