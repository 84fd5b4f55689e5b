pub mod dummies;
pub mod stubs;

pub use stubs::LookupClassifier;
pub use stubs::RefusingClassifier;
pub use stubs::ThresholdClassifier;
