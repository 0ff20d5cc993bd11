//! Nearest-centroid matching
//!
//! A query vector is matched against every class by the arithmetic mean
//! of its Euclidean distance to each of the class's exemplars; the class
//! with the smallest mean wins.

use kanjivec_core::{FEATURE_DIM, FeatureVector};

use crate::database::TrainingDatabase;
use crate::error::{ClassifyError, ClassifyResult};

/// Result of matching a query vector against a database
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Winning class label
    pub label: String,
    /// Mean Euclidean distance between the query and that class
    pub mean_distance: f64,
}

/// Euclidean distance between two equal-length vectors.
///
/// # Errors
///
/// Returns [`ClassifyError::DimensionMismatch`] if the lengths differ.
pub fn euclidean_distance(a: &FeatureVector, b: &FeatureVector) -> ClassifyResult<f64> {
    if a.len() != b.len() {
        return Err(ClassifyError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let sum: f64 = a
        .values()
        .iter()
        .zip(b.values())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum();

    Ok(sum.sqrt())
}

/// Find the class whose exemplars are closest to the query on average.
///
/// Classes are visited in ascending label order and replaced only on a
/// strictly smaller mean distance, so an exact tie resolves to the
/// lexicographically smallest label.
///
/// # Errors
///
/// - [`ClassifyError::EmptyDatabase`] if the database has no classes
/// - [`ClassifyError::DimensionMismatch`] if the query is not
///   [`FEATURE_DIM`] long, or any stored vector's length differs from
///   the query's
pub fn classify(query: &FeatureVector, db: &TrainingDatabase) -> ClassifyResult<Match> {
    if db.is_empty() {
        return Err(ClassifyError::EmptyDatabase);
    }
    if query.len() != FEATURE_DIM {
        return Err(ClassifyError::DimensionMismatch {
            expected: FEATURE_DIM,
            actual: query.len(),
        });
    }

    let mut best: Option<Match> = None;

    for (label, exemplars) in db.iter() {
        let mut total = 0.0;
        for exemplar in exemplars {
            total += euclidean_distance(query, exemplar)?;
        }
        let mean = total / exemplars.len() as f64;

        if best.as_ref().is_none_or(|b| mean < b.mean_distance) {
            best = Some(Match {
                label: label.to_string(),
                mean_distance: mean,
            });
        }
    }

    // A non-empty database always yields a winner
    best.ok_or(ClassifyError::EmptyDatabase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: u32) -> FeatureVector {
        FeatureVector::new(vec![value; FEATURE_DIM])
    }

    #[test]
    fn test_distance_zero_to_self() {
        let v = constant(7);
        assert_eq!(euclidean_distance(&v, &v).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let v = FeatureVector::new((0..FEATURE_DIM as u32).collect());
        let w = constant(3);
        let d1 = euclidean_distance(&v, &w).unwrap();
        let d2 = euclidean_distance(&w, &v).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_distance_known_value() {
        let a = FeatureVector::new(vec![0, 3]);
        let b = FeatureVector::new(vec![4, 0]);
        assert_eq!(euclidean_distance(&a, &b).unwrap(), 5.0);
    }

    #[test]
    fn test_distance_length_mismatch() {
        let a = constant(0);
        let b = FeatureVector::new(vec![0; FEATURE_DIM - 1]);
        assert!(matches!(
            euclidean_distance(&a, &b),
            Err(ClassifyError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_classify_two_classes() {
        let mut db = TrainingDatabase::new();
        db.add_example("A", constant(0)).unwrap();
        db.add_example("B", constant(100)).unwrap();

        let near_a = classify(&constant(0), &db).unwrap();
        assert_eq!(near_a.label, "A");
        assert_eq!(near_a.mean_distance, 0.0);

        let near_b = classify(&constant(100), &db).unwrap();
        assert_eq!(near_b.label, "B");
    }

    #[test]
    fn test_classify_averages_exemplars() {
        let mut db = TrainingDatabase::new();
        // Mean distance for "near": (0 + d(0,2)) / 2; for "far": d(0,10)
        db.add_example("near", constant(0)).unwrap();
        db.add_example("near", constant(2)).unwrap();
        db.add_example("far", constant(10)).unwrap();

        let m = classify(&constant(0), &db).unwrap();
        assert_eq!(m.label, "near");
        let expected = (FEATURE_DIM as f64).sqrt() * 2.0 / 2.0;
        assert!((m.mean_distance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_classify_empty_database() {
        let db = TrainingDatabase::new();
        assert!(matches!(
            classify(&constant(0), &db),
            Err(ClassifyError::EmptyDatabase)
        ));
    }

    #[test]
    fn test_classify_short_query() {
        let mut db = TrainingDatabase::new();
        db.add_example("A", constant(0)).unwrap();
        let short = FeatureVector::new(vec![0; FEATURE_DIM - 1]);
        assert!(matches!(
            classify(&short, &db),
            Err(ClassifyError::DimensionMismatch { expected, actual })
                if expected == FEATURE_DIM && actual == FEATURE_DIM - 1
        ));
    }

    #[test]
    fn test_tie_breaks_to_smallest_label() {
        let mut db = TrainingDatabase::new();
        // Both classes sit at the same distance from the query
        db.add_example("zeta", constant(4)).unwrap();
        db.add_example("alpha", constant(4)).unwrap();

        let m = classify(&constant(0), &db).unwrap();
        assert_eq!(m.label, "alpha");
    }
}
