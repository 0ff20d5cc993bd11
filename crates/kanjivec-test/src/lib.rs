//! kanjivec-test - Shared test support
//!
//! Fixture helpers and a small regression-test framework used by the
//! `tests/*_reg.rs` files across the workspace.
//!
//! # Usage
//!
//! ```
//! use kanjivec_test::{RegParams, glyph_from_rows};
//!
//! let glyph = glyph_from_rows(&[
//!     ".#.",
//!     ".#.",
//!     ".#.",
//! ]);
//! let mut rp = RegParams::new("example");
//! rp.compare_values(3.0, glyph.count_ink() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use kanjivec_core::Bitmap;

/// Build a bitmap from ASCII-art rows: '#' is ink, anything else is
/// background. All rows must have the same length.
///
/// # Panics
///
/// Panics on empty or ragged input. Test fixtures are expected to be
/// literal and correct.
pub fn glyph_from_rows(rows: &[&str]) -> Bitmap {
    let height = rows.len() as u32;
    let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
    let mut bitmap = Bitmap::new(width, height).expect("fixture dimensions");

    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as u32, width, "ragged fixture row {}", y);
        for (x, byte) in row.bytes().enumerate() {
            if byte == b'#' {
                bitmap.set_unchecked(x as u32, y as u32, true);
            }
        }
    }

    bitmap
}

/// Render a bitmap back to ASCII-art rows ('#' / '.'), the inverse of
/// [`glyph_from_rows`]. Handy for assertion messages.
pub fn rows_from_glyph(bitmap: &Bitmap) -> Vec<String> {
    (0..bitmap.height())
        .map(|y| {
            (0..bitmap.width())
                .map(|x| if bitmap.get_unchecked(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Embed ASCII-art rows at (x0, y0) of an otherwise blank canonical
/// 64x64 glyph.
pub fn glyph_on_canvas_at(rows: &[&str], x0: u32, y0: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(kanjivec_core::GLYPH_SIZE, kanjivec_core::GLYPH_SIZE)
        .expect("canonical glyph size");

    for (y, row) in rows.iter().enumerate() {
        for (x, byte) in row.bytes().enumerate() {
            if byte == b'#' {
                bitmap
                    .set(x0 + x as u32, y0 + y as u32, true)
                    .expect("fixture fits on canvas");
            }
        }
    }

    bitmap
}
