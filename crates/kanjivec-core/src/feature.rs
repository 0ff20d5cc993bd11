//! FeatureVector - numeric glyph fingerprint
//!
//! A `FeatureVector` is an ordered sequence of non-negative integer
//! counts. The recognition pipeline always produces vectors of length
//! [`FEATURE_DIM`]; the container itself is a general numeric array, and
//! length validation happens where vectors cross a boundary (matching,
//! database parsing).

/// Length of a recognition feature vector: 49 windows x 4 buckets.
pub const FEATURE_DIM: usize = 196;

/// Ordered sequence of non-negative feature counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    values: Vec<u32>,
}

impl FeatureVector {
    /// Wrap a vector of counts.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The entries as a slice.
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl From<Vec<u32>> for FeatureVector {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_dim() {
        // 7x7 window grid, 4 buckets per window
        assert_eq!(FEATURE_DIM, 49 * 4);
    }

    #[test]
    fn test_new_and_access() {
        let v = FeatureVector::new(vec![1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_vec() {
        let v: FeatureVector = vec![0u32; FEATURE_DIM].into();
        assert_eq!(v.len(), FEATURE_DIM);
    }
}
