//! Error types for kanjivec-io

use thiserror::Error;

/// Errors that can occur while reading or writing glyph images
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] kanjivec_core::Error),

    /// File format could not be recognized or is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Image data could not be decoded
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Image data could not be encoded
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Malformed data before decoding proper begins
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
