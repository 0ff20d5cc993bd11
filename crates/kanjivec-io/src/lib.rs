//! kanjivec-io - Glyph image file I/O
//!
//! Reads and writes the binary glyph rasters the recognizer consumes.
//! Supported formats:
//!
//! - PBM P1/P4 (always available)
//! - PNG (feature `png-format`, enabled by default)
//!
//! Decoders own the translation from color data to the 1-bpp ink mask:
//! a pixel is background only when every color sample is at full
//! brightness. The core crates never see color.

pub mod error;
pub mod format;
pub mod pnm;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{GlyphFormat, detect_format, detect_format_from_bytes};

use kanjivec_core::Bitmap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a glyph image, detecting the format from its magic bytes.
pub fn read_glyph<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);

    match format {
        GlyphFormat::Pnm => pnm::read_pnm(reader),
        #[cfg(feature = "png-format")]
        GlyphFormat::Png => png::read_png(reader),
        #[cfg(not(feature = "png-format"))]
        GlyphFormat::Png => Err(IoError::UnsupportedFormat(
            "PNG support not compiled in (enable the png-format feature)".to_string(),
        )),
    }
}

/// Write a glyph image in the given format.
pub fn write_glyph<P: AsRef<Path>>(
    bitmap: &Bitmap,
    path: P,
    format: GlyphFormat,
) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);

    match format {
        GlyphFormat::Pnm => pnm::write_pnm(bitmap, writer),
        #[cfg(feature = "png-format")]
        GlyphFormat::Png => png::write_png(bitmap, writer),
        #[cfg(not(feature = "png-format"))]
        GlyphFormat::Png => Err(IoError::UnsupportedFormat(
            "PNG support not compiled in (enable the png-format feature)".to_string(),
        )),
    }
}
