//! Sparse, string-keyed numeric vectors.
//!
//! A [`SparseVector`] maps component names to `f64` values. Only explicitly
//! stored components exist; absent components read as zero in arithmetic but
//! stay distinguishable from stored zeros on direct lookup. All binary and
//! scalar operators return a new vector and leave their operands untouched,
//! so expressions compose without defensive cloning at the call site.
//!
//! # Example
//!
//! ```
//! use keyvec::SparseVector;
//!
//! let pantry: SparseVector = [("flour", 2.0), ("sugar", 1.0)].into_iter().collect();
//! let recipe: SparseVector = [("sugar", 0.5), ("butter", 0.25)].into_iter().collect();
//!
//! let remaining = pantry.subtract(&recipe);
//! assert_eq!(remaining.get("sugar"), Some(0.5));
//! assert_eq!(remaining.get("butter"), Some(-0.25));
//! assert_eq!(pantry.get("butter"), None);
//!
//! let similarity = pantry.cosine_similarity(&recipe);
//! assert!(similarity > 0.0 && similarity < 1.0);
//! ```

pub mod errors;
pub mod metrics;
pub mod sparse_vector;

// re-exports
pub use errors::SparseVectorError;
pub use sparse_vector::SparseVector;
