//! Error types for kanjivec-classify

use thiserror::Error;

/// Errors that can occur during matching and database handling
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Classification against a database with no classes
    #[error("training database has no classes")]
    EmptyDatabase,

    /// Vector lengths do not line up
    #[error("feature vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Database stream ended before the expected token
    #[error("unexpected end of database stream, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// Token in the database stream could not be parsed
    #[error("invalid database token: expected {expected}, got {token:?}")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    /// Class declared with no exemplars
    #[error("class {label:?} declares no exemplars")]
    EmptyClass { label: String },

    /// I/O error while reading or writing a database stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
