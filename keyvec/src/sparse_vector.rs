use std::fmt::{self, Display};
use std::ops::{Add, Div, Mul, Sub};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::SparseVectorError;

///
/// SparseVector struct, a vector keyed by component name.
///
/// Only stored components exist in the backing map; a component absent from
/// the map reads as zero in arithmetic, but [`get`](SparseVector::get)
/// reports it as `None` so a stored `0.0` stays distinguishable from an
/// absent key. Component names keep insertion order.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector {
    components: IndexMap<String, f64>,
}

impl SparseVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored components. A stored zero counts.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the vector has no stored components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component names in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Stored `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.components.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// The stored value for `name`, or `None` if the component is absent.
    ///
    /// Never defaults to zero: callers that want the arithmetic reading of a
    /// missing component apply `unwrap_or(0.0)` themselves.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.components.get(name).copied()
    }

    /// Store `value` under `name`, creating the component if absent.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.components.insert(name.into(), value);
    }

    /// A fresh copy of the backing map, never the live reference.
    ///
    /// This is the interchange shape: a plain ordered mapping of component
    /// names to values, with no other fields.
    pub fn to_components(&self) -> IndexMap<String, f64> {
        self.components.clone()
    }

    ///
    /// Component-wise sum over the union of both key sets; a key missing
    /// from one operand reads as zero. Returns a new vector, neither operand
    /// is modified.
    ///
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (name, value) in &other.components {
            *out.components.entry(name.clone()).or_insert(0.0) += value;
        }
        out
    }

    ///
    /// Component-wise difference over the union of both key sets. Keys
    /// present only in `other` appear negated in the result.
    ///
    pub fn subtract(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (name, value) in &other.components {
            *out.components.entry(name.clone()).or_insert(0.0) -= value;
        }
        out
    }

    /// Scale every stored component by `scalar`; absent keys stay absent.
    pub fn multiply(&self, scalar: f64) -> Self {
        Self {
            components: self
                .components
                .iter()
                .map(|(name, value)| (name.clone(), value * scalar))
                .collect(),
        }
    }

    /// Scale every stored component by `1/scalar`.
    ///
    /// A zero `scalar` yields infinite components (NaN for stored zeros) per
    /// IEEE-754; it is not trapped.
    pub fn divide(&self, scalar: f64) -> Self {
        Self {
            components: self
                .components
                .iter()
                .map(|(name, value)| (name.clone(), value / scalar))
                .collect(),
        }
    }

    ///
    /// Parse a vector from a flat JSON object of numbers, e.g.
    /// `{"a": 1, "b": 2.5}`. Key order is preserved.
    ///
    pub fn from_json(json: &str) -> Result<Self, SparseVectorError> {
        Ok(serde_json::from_str(json)?)
    }

    ///
    /// Serialize to a flat JSON object, keys in insertion order.
    ///
    pub fn to_json(&self) -> Result<String, SparseVectorError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<IndexMap<String, f64>> for SparseVector {
    fn from(components: IndexMap<String, f64>) -> Self {
        Self { components }
    }
}

impl From<&IndexMap<String, f64>> for SparseVector {
    /// Copies the mapping; the vector never aliases caller-owned storage.
    fn from(components: &IndexMap<String, f64>) -> Self {
        Self {
            components: components.clone(),
        }
    }
}

impl FromIterator<(String, f64)> for SparseVector {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for SparseVector {
    fn from_iter<T: IntoIterator<Item = (&'a str, f64)>>(iter: T) -> Self {
        Self {
            components: iter
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

impl Add for &SparseVector {
    type Output = SparseVector;

    fn add(self, other: &SparseVector) -> SparseVector {
        SparseVector::add(self, other)
    }
}

impl Sub for &SparseVector {
    type Output = SparseVector;

    fn sub(self, other: &SparseVector) -> SparseVector {
        self.subtract(other)
    }
}

impl Mul<f64> for &SparseVector {
    type Output = SparseVector;

    fn mul(self, scalar: f64) -> SparseVector {
        self.multiply(scalar)
    }
}

impl Div<f64> for &SparseVector {
    type Output = SparseVector;

    fn div(self, scalar: f64) -> SparseVector {
        self.divide(scalar)
    }
}

impl Display for SparseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
