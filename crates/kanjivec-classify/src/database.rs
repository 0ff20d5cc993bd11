//! Training database
//!
//! Maps class labels to their exemplar feature vectors. The map is
//! ordered (BTreeMap) on purpose: matching iterates classes in
//! ascending label order, which makes tie-breaking deterministic and
//! database serialization reproducible.
//!
//! Lifecycle: built once during training, then read-only during
//! recognition. Concurrent readers are fine; to retrain, build a new
//! database and swap it in rather than mutating a shared one.

use std::collections::BTreeMap;

use kanjivec_core::{FEATURE_DIM, FeatureVector};

use crate::error::{ClassifyError, ClassifyResult};

/// Label-to-exemplars training database
#[derive(Debug, Clone, Default)]
pub struct TrainingDatabase {
    classes: BTreeMap<String, Vec<FeatureVector>>,
}

impl TrainingDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one exemplar for a label. A repeated label accumulates
    /// exemplars.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::DimensionMismatch`] unless the vector
    /// has the canonical recognition length.
    pub fn add_example(&mut self, label: &str, vector: FeatureVector) -> ClassifyResult<()> {
        if vector.len() != FEATURE_DIM {
            return Err(ClassifyError::DimensionMismatch {
                expected: FEATURE_DIM,
                actual: vector.len(),
            });
        }

        self.classes.entry(label.to_string()).or_default().push(vector);
        Ok(())
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of exemplars across all classes.
    pub fn example_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    /// True if the database has no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Exemplars stored for a label, if the label exists.
    pub fn examples(&self, label: &str) -> Option<&[FeatureVector]> {
        self.classes.get(label).map(Vec::as_slice)
    }

    /// Iterate classes in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FeatureVector])> {
        self.classes
            .iter()
            .map(|(label, vecs)| (label.as_str(), vecs.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeros() -> FeatureVector {
        FeatureVector::new(vec![0; FEATURE_DIM])
    }

    #[test]
    fn test_add_and_lookup() {
        let mut db = TrainingDatabase::new();
        assert!(db.is_empty());

        db.add_example("水", zeros()).unwrap();
        db.add_example("水", zeros()).unwrap();
        db.add_example("火", zeros()).unwrap();

        assert_eq!(db.class_count(), 2);
        assert_eq!(db.example_count(), 3);
        assert_eq!(db.examples("水").unwrap().len(), 2);
        assert!(db.examples("木").is_none());
    }

    #[test]
    fn test_rejects_wrong_dimension() {
        let mut db = TrainingDatabase::new();
        let short = FeatureVector::new(vec![0; FEATURE_DIM - 1]);
        assert!(matches!(
            db.add_example("水", short),
            Err(ClassifyError::DimensionMismatch { expected, actual })
                if expected == FEATURE_DIM && actual == FEATURE_DIM - 1
        ));
        assert!(db.is_empty());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut db = TrainingDatabase::new();
        db.add_example("b", zeros()).unwrap();
        db.add_example("a", zeros()).unwrap();
        db.add_example("c", zeros()).unwrap();

        let labels: Vec<&str> = db.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }
}
