pub mod classifiers;
pub mod core;
pub mod evaluation;
pub mod preprocessing;
pub mod report;
pub mod sampling;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
