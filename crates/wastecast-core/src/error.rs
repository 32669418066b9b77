//! Error types for wastecast-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading data or deriving predictions.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown waste level: {0}")]
    UnknownLevel(String),

    #[error("dataset row {row}: {reason}")]
    Dataset { row: usize, reason: String },

    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
