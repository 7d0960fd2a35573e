//! Metric operations over sparse vectors.
//!
//! Euclidean length, distance, dot product, cosine similarity, and
//! normalization. Degenerate inputs (zero-length vectors, and the zero
//! scalars they induce) propagate IEEE-754 `NaN`/`Infinity` instead of
//! raising errors.

use crate::sparse_vector::SparseVector;

impl SparseVector {
    /// Euclidean norm: square root of the sum of squares of stored values.
    pub fn length(&self) -> f64 {
        self.iter().map(|(_, value)| value * value).sum::<f64>().sqrt()
    }

    /// Euclidean distance to `other`: the norm of the component-wise
    /// difference. Neither operand is modified.
    pub fn distance(&self, other: &Self) -> f64 {
        self.subtract(other).length()
    }

    /// Sum of products over components stored in both vectors; a component
    /// present in only one operand contributes nothing.
    pub fn dot(&self, other: &Self) -> f64 {
        self.iter()
            .filter_map(|(name, value)| other.get(name).map(|o| value * o))
            .sum()
    }

    ///
    /// Cosine of the angle between two vectors: dot product over the product
    /// of norms. Returns NaN when either vector has zero length.
    ///
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        self.dot(other) / (self.length() * other.length())
    }

    /// A new vector scaled by `1 / length`. Normalizing a vector of zero
    /// length yields NaN components.
    pub fn normalize(&self) -> Self {
        self.divide(self.length())
    }
}
