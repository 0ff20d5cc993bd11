//! Error types for kanjivec-extract

use thiserror::Error;

/// Errors that can occur during feature extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Glyph is not the canonical recognition size
    #[error("glyph must be 64x64, got {width}x{height}")]
    WrongGlyphSize { width: u32, height: u32 },
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
