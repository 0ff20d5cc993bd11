//! kanjivec-extract - Glyph feature extraction
//!
//! This crate turns a 64x64 binary glyph into its 196-entry directional
//! feature vector:
//!
//! 1. [`extract_contour`] thins the glyph to its outline
//! 2. [`direction_map`] classifies every contour pixel's stroke direction
//! 3. [`features_from_directions`] aggregates windowed, zone-weighted
//!    bucket counts
//!
//! [`feature_vector`] runs the whole pipeline in one call.
//!
//! All operations are pure: they take shared references and return new
//! values, so independent glyphs may be processed concurrently without
//! synchronization.

mod contour;
mod direction;
mod error;
mod vector;

pub use contour::extract_contour;
pub use direction::{Bucket, Direction, DirectionMap, classify_pixel, direction_map};
pub use error::{ExtractError, ExtractResult};
pub use vector::{feature_vector, features_from_directions};
