//! kanjivec - Directional-feature kanji glyph recognizer
//!
//! kanjivec classifies a 64x64 black-and-white kanji glyph by reducing
//! it to a 196-entry directional feature vector and matching that
//! vector against a labeled training database by mean Euclidean
//! distance.
//!
//! # Pipeline
//!
//! 1. Thin the glyph to its contour ([`extract::extract_contour`])
//! 2. Classify each contour pixel's stroke direction
//!    ([`extract::direction_map`])
//! 3. Aggregate windowed, zone-weighted bucket counts into the feature
//!    vector ([`extract::feature_vector`])
//! 4. Match against the database ([`classify::classify`])
//!
//! # Example
//!
//! ```
//! use kanjivec::{Bitmap, GLYPH_SIZE};
//! use kanjivec::classify::{TrainingDatabase, classify};
//! use kanjivec::extract::feature_vector;
//!
//! let mut glyph = Bitmap::new(GLYPH_SIZE, GLYPH_SIZE).unwrap();
//! for x in 10..54 {
//!     glyph.set(x, 32, true).unwrap();
//! }
//!
//! let mut db = TrainingDatabase::new();
//! db.add_example("一", feature_vector(&glyph).unwrap()).unwrap();
//!
//! let m = classify(&feature_vector(&glyph).unwrap(), &db).unwrap();
//! assert_eq!(m.label, "一");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use kanjivec_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use kanjivec_classify as classify;
pub use kanjivec_extract as extract;
pub use kanjivec_io as io;
