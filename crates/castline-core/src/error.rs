//! Error types for Castline.

use thiserror::Error;

/// Main error type for Castline operations.
#[derive(Error, Debug)]
pub enum CastlineError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timeline error: {0}")]
    Timeline(String),
}

/// Result type alias for Castline operations.
pub type Result<T> = std::result::Result<T, CastlineError>;
