//! Windowed feature-vector aggregation
//!
//! Slides a 16x16 window across the 64x64 direction map in 8-pixel
//! steps (7x7 = 49 window positions) and, per window, accumulates
//! bucket counts in four nested zones weighted from the center out.
//! The window order (rows outer, columns inner) and the per-window
//! bucket order fix the layout of the resulting 196-entry vector, which
//! must stay stable across releases for training databases to remain
//! usable.

use crate::direction::{Bucket, DirectionMap};
use crate::error::{ExtractError, ExtractResult};
use crate::{direction_map, extract_contour};
use kanjivec_core::{Bitmap, FEATURE_DIM, FeatureVector, GLYPH_SIZE};

/// Window edge length in pixels.
const WINDOW: u32 = 16;
/// Horizontal/vertical distance between window origins.
const STEP: u32 = 8;
/// Window positions per axis.
const GRID: u32 = (GLYPH_SIZE - WINDOW) / STEP + 1;

/// Nested sub-regions of a feature window, innermost first.
///
/// Zone membership is decided by the first matching range test, so each
/// local pixel belongs to exactly one zone. Counts are kept in an array
/// indexed by this enum; the zones never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
enum Zone {
    /// Innermost 4x4 square, weight 4
    Core = 0,
    /// 8x8 square around the core, weight 3
    Inner = 1,
    /// 12x12 square around that, weight 2
    Outer = 2,
    /// Remaining border of the window, weight 1
    Ring = 3,
}

impl Zone {
    const COUNT: usize = 4;

    /// Classify a local window coordinate, innermost zone first.
    fn for_local(xp: u32, yp: u32) -> Zone {
        let within = |lo, hi| xp >= lo && xp <= hi && yp >= lo && yp <= hi;
        if within(6, 9) {
            Zone::Core
        } else if within(4, 11) {
            Zone::Inner
        } else if within(2, 13) {
            Zone::Outer
        } else {
            Zone::Ring
        }
    }

    /// Aggregation weight of this zone.
    fn weight(self) -> u32 {
        match self {
            Zone::Core => 4,
            Zone::Inner => 3,
            Zone::Outer => 2,
            Zone::Ring => 1,
        }
    }
}

/// Aggregate a 64x64 direction map into a 196-entry feature vector.
///
/// # Errors
///
/// Returns [`ExtractError::WrongGlyphSize`] if the map is not 64x64.
pub fn features_from_directions(map: &DirectionMap) -> ExtractResult<FeatureVector> {
    if map.width() != GLYPH_SIZE || map.height() != GLYPH_SIZE {
        return Err(ExtractError::WrongGlyphSize {
            width: map.width(),
            height: map.height(),
        });
    }

    let mut features = Vec::with_capacity(FEATURE_DIM);

    for wy in (0..GRID).map(|i| i * STEP) {
        for wx in (0..GRID).map(|i| i * STEP) {
            let mut counts = [[0u32; Bucket::COUNT]; Zone::COUNT];

            for yp in 0..WINDOW {
                for xp in 0..WINDOW {
                    let Some(dir) = map.get(wx + xp, wy + yp) else {
                        continue;
                    };
                    let zone = Zone::for_local(xp, yp);
                    for &bucket in dir.buckets() {
                        counts[zone as usize][bucket as usize] += 1;
                    }
                }
            }

            for bucket in 0..Bucket::COUNT {
                let weighted = [Zone::Core, Zone::Inner, Zone::Outer, Zone::Ring]
                    .into_iter()
                    .map(|zone| zone.weight() * counts[zone as usize][bucket])
                    .sum();
                features.push(weighted);
            }
        }
    }

    debug_assert_eq!(features.len(), FEATURE_DIM);
    Ok(FeatureVector::new(features))
}

/// Compute the feature vector of a 64x64 glyph.
///
/// This is the full pipeline used for both training and recognition:
/// contour extraction, per-pixel direction classification, windowed
/// aggregation.
///
/// # Errors
///
/// Returns [`ExtractError::WrongGlyphSize`] if the glyph is not 64x64.
pub fn feature_vector(glyph: &Bitmap) -> ExtractResult<FeatureVector> {
    if glyph.width() != GLYPH_SIZE || glyph.height() != GLYPH_SIZE {
        return Err(ExtractError::WrongGlyphSize {
            width: glyph.width(),
            height: glyph.height(),
        });
    }

    let contour = extract_contour(glyph);
    let map = direction_map(&contour);
    features_from_directions(&map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_constants() {
        assert_eq!(GRID, 7);
        assert_eq!((GRID * GRID) as usize * Bucket::COUNT, FEATURE_DIM);
    }

    #[test]
    fn test_zone_precedence() {
        assert_eq!(Zone::for_local(7, 8), Zone::Core);
        assert_eq!(Zone::for_local(6, 9), Zone::Core);
        assert_eq!(Zone::for_local(5, 7), Zone::Inner);
        assert_eq!(Zone::for_local(4, 11), Zone::Inner);
        assert_eq!(Zone::for_local(2, 2), Zone::Outer);
        assert_eq!(Zone::for_local(13, 6), Zone::Outer);
        assert_eq!(Zone::for_local(0, 0), Zone::Ring);
        assert_eq!(Zone::for_local(15, 7), Zone::Ring);
        assert_eq!(Zone::for_local(1, 14), Zone::Ring);
    }

    #[test]
    fn test_blank_glyph_zero_vector() {
        let blank = Bitmap::new(GLYPH_SIZE, GLYPH_SIZE).unwrap();
        let v = feature_vector(&blank).unwrap();
        assert_eq!(v.len(), FEATURE_DIM);
        assert!(v.values().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_wrong_size_rejected() {
        let small = Bitmap::new(32, 64).unwrap();
        assert!(matches!(
            feature_vector(&small),
            Err(ExtractError::WrongGlyphSize {
                width: 32,
                height: 64
            })
        ));
    }

    #[test]
    fn test_single_stroke_counts() {
        // 1px horizontal stroke at y = 32, x in 8..=23. The contour is
        // the stroke itself; its interior pixels (x in 9..=22) classify
        // as Horizontal, the two endpoints stay unclassified.
        let mut glyph = Bitmap::new(GLYPH_SIZE, GLYPH_SIZE).unwrap();
        for x in 8..24 {
            glyph.set(x, 32, true).unwrap();
        }
        let v = feature_vector(&glyph).unwrap();
        assert_eq!(v.len(), FEATURE_DIM);

        // Window at (wx=8, wy=24): the stroke crosses at yp=8, xp in
        // 1..=14. Zones along that row: xp 1,14 -> Ring, xp 2,3,12,13 ->
        // Outer, xp 4,5,10,11 -> Inner, xp 6..=9 -> Core. Weighted
        // horizontal count: 4*4 + 3*4 + 2*4 + 1*2 = 38.
        let window_index = (3 * GRID + 1) as usize;
        let entry = window_index * Bucket::COUNT;
        assert_eq!(v.values()[entry], 38);
        // No vertical or diagonal contributions in that window
        assert_eq!(&v.values()[entry + 1..entry + 4], &[0, 0, 0]);
    }

    #[test]
    fn test_vector_layout_row_major() {
        // A short vertical stroke near the bottom-right corner shows up
        // only in late windows, pinning the wy-outer/wx-inner order.
        let mut glyph = Bitmap::new(GLYPH_SIZE, GLYPH_SIZE).unwrap();
        for y in 52..60 {
            glyph.set(56, y, true).unwrap();
        }
        let v = feature_vector(&glyph).unwrap();

        let first_nonzero = v.values().iter().position(|&c| c != 0).unwrap();
        // Stroke pixels sit at x=56, y in 53..=58 (endpoints excluded).
        // The earliest window containing any of them starts at
        // (wx=48, wy=40): window index 5*7 + 6 = 41.
        assert_eq!(first_nonzero / Bucket::COUNT, 41);
        // All contributions are vertical
        assert_eq!(first_nonzero % Bucket::COUNT, Bucket::Vertical as usize);
    }
}
