//! Image format detection
//!
//! Detects glyph image formats by examining magic numbers in the file
//! header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// PBM ASCII
    pub const PBM_ASCII: &[u8] = b"P1";

    /// PBM binary
    pub const PBM_BINARY: &[u8] = b"P4";
}

/// Glyph image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphFormat {
    /// PNG format
    Png,
    /// PBM (portable bitmap), ASCII or binary
    Pnm,
}

impl GlyphFormat {
    /// Get the conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pnm => "pbm",
        }
    }
}

/// Detect the image format of a file.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<GlyphFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect the image format from leading bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<GlyphFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::PNG) {
        return Ok(GlyphFormat::Png);
    }

    if data.starts_with(magic::PBM_ASCII) || data.starts_with(magic::PBM_BINARY) {
        return Ok(GlyphFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(format!(
        "unrecognized magic bytes: {:02X?}",
        &data[..data.len().min(8)]
    )))
}
