use thiserror::Error;

/// Schema violations detected while preparing a dataset for evaluation.
///
/// These are fatal: the run aborts immediately, nothing is retried and no
/// partial result is produced.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("dataset '{0}' declares no output attribute")]
    MissingOutputAttribute(String),

    #[error("output attribute '{0}' is real-valued; expected an integer or nominal class")]
    RealValuedOutput(String),

    #[error("instance {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("row {row} out of range for a dataset of {len} instances")]
    RowOutOfRange { row: usize, len: usize },

    #[error("instance {0} has a missing class value")]
    MissingClassValue(usize),

    #[error("instance {row} has class {value}, outside [0, {num_classes})")]
    ClassOutOfRange {
        row: usize,
        value: i64,
        num_classes: usize,
    },
}

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    DataFormat(#[from] DataFormatError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("train and test schemas disagree: {0}")]
    SchemaMismatch(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
