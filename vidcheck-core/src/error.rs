use thiserror::Error;

/// Custom error types for vidcheck
#[derive(Error, Debug)]
pub enum VidcheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Truncated frame data: {0}")]
    TruncatedData(String),

    #[error("Trailing data: {0}")]
    TrailingData(String),

    #[error("Unknown operation '{0}', cannot verify")]
    UnknownOperation(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for vidcheck operations
pub type Result<T> = std::result::Result<T, VidcheckError>;
