use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown curve type: {0}")]
    UnknownCurveType(String),

    #[error("Control point index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CurveError>;
