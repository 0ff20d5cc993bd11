//! Contour extraction
//!
//! Reduces a solid glyph to its thinned outline in two passes over the
//! raster. Pass 1 erases interior pixels (those not touching any
//! background), reading only the input. Pass 2 erases corner pixels in
//! place: each erasure is visible to the pixels scanned after it, so the
//! row-major order is part of the algorithm, not an implementation
//! detail. Reimplementations must not parallelize pass 2.

use kanjivec_core::Bitmap;

/// Extract the thinned outline of a glyph.
///
/// Returns a new raster of the same dimensions; the input is never
/// modified. The output contains only background pixels and surviving
/// foreground pixels.
pub fn extract_contour(glyph: &Bitmap) -> Bitmap {
    let w = glyph.width();
    let h = glyph.height();

    let mut contour = glyph.clone();

    // Pass 1: a pixel survives only if some in-bounds 4-neighbor of the
    // input is background. Out-of-bounds neighbors never count.
    for y in 0..h {
        for x in 0..w {
            if !touches_background(glyph, x, y) {
                contour.set_unchecked(x, y, false);
            }
        }
    }

    // Pass 2: erase corners. A black pixel with a black neighbor on the
    // horizontal axis and another on the vertical axis is erased
    // immediately; later pixels in the same pass see the erasure.
    for y in 0..h {
        for x in 0..w {
            if !contour.get_unchecked(x, y) {
                continue;
            }

            let horiz = ink_at(&contour, x as i64 - 1, y as i64)
                || ink_at(&contour, x as i64 + 1, y as i64);
            let vert = ink_at(&contour, x as i64, y as i64 - 1)
                || ink_at(&contour, x as i64, y as i64 + 1);

            if horiz && vert {
                contour.set_unchecked(x, y, false);
            }
        }
    }

    contour
}

/// True if any in-bounds 4-neighbor of (x, y) is background.
fn touches_background(glyph: &Bitmap, x: u32, y: u32) -> bool {
    let (x, y) = (x as i64, y as i64);
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
        .into_iter()
        .any(|(nx, ny)| background_at(glyph, nx, ny))
}

/// True if (x, y) is in bounds and background.
fn background_at(glyph: &Bitmap, x: i64, y: i64) -> bool {
    in_bounds(glyph, x, y) && !glyph.get_unchecked(x as u32, y as u32)
}

/// True if (x, y) is in bounds and ink.
fn ink_at(glyph: &Bitmap, x: i64, y: i64) -> bool {
    in_bounds(glyph, x, y) && glyph.get_unchecked(x as u32, y as u32)
}

fn in_bounds(glyph: &Bitmap, x: i64, y: i64) -> bool {
    x >= 0 && x < glyph.width() as i64 && y >= 0 && y < glyph.height() as i64
}
