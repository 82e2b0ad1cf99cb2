//! Error types for the Merkle primitive.

use thiserror::Error;

/// Error raised by [`crate::MerkleTree`] operations.
///
/// These errors describe malformed or insufficient evidence. They are real
/// failures at this layer; the certification layer deliberately converts
/// them to sentinel values during best-effort root reconstruction.
#[derive(Error, Debug)]
pub enum MerkleError {
    /// A node required for recomputation is missing from the evidence.
    #[error("evidence is missing node at index {index}")]
    MissingNode { index: usize },

    /// A revealed value required for disclosure is missing.
    #[error("evidence is missing revealed value at index {index}")]
    MissingValue { index: usize },

    /// The evidence contains no chain node to anchor recomputation.
    #[error("evidence has no anchor node; cannot recompute root")]
    NoAnchor,

    /// Leaf serialization failed.
    #[error(transparent)]
    Canonical(#[from] imprint_core::CanonicalError),
}
