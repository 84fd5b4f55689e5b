mod normalizer;

pub use normalizer::NormalizationParams;
pub use normalizer::NormalizedSet;
pub use normalizer::Normalizer;
