//! Error types for kanjivec-core
//!
//! Provides a unified error type for the core data structures. Each
//! variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// kanjivec-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates out of bounds
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
