use thiserror::Error;

/// Errors raised by the generate → filter → present pipeline.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// A caller supplied a parameter outside its domain (negative dataset
    /// size, inverted band-gap range, unusable generator weights).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("building record batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
