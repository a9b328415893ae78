// File: crates/sparkline-core/src/error.rs
// Summary: Error taxonomy for validation, host lifecycle, and surface output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SparklineError {
    /// A sample value is NaN or infinite. Raised before any domain is computed.
    #[error("invalid numeric value {value} at index {index}")]
    InvalidNumericValue { index: usize, value: f64 },

    #[error("render host is not mounted")]
    NotMounted,

    #[error("render host is already mounted")]
    AlreadyMounted,

    #[error("surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SparklineError>;
