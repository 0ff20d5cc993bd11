//! kanjivec-classify - Nearest-centroid glyph classification
//!
//! Holds the labeled training data and answers the question "which
//! class is this feature vector closest to?":
//!
//! - [`TrainingDatabase`] - label → exemplar vectors, ordered by label
//! - [`classify`] - mean-Euclidean-distance matching with a
//!   deterministic tie-break
//! - [`read_database`] / [`write_database`] - the whitespace token
//!   stream format used on disk

mod classify;
mod database;
mod error;
mod serial;

pub use classify::{Match, classify, euclidean_distance};
pub use database::TrainingDatabase;
pub use error::{ClassifyError, ClassifyResult};
pub use serial::{read_database, write_database};
