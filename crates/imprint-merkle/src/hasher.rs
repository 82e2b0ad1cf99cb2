//! # Hasher Seam
//!
//! The tree hashes three kinds of input, all as strings: serialized leaf
//! values, the concatenation of two lowercase-hex hashes, and the empty
//! string (terminal node). One `Hasher` implementation covers all three,
//! so an engine-level override swaps the whole tree's hash function at once.

use sha2::{Digest, Sha256};

/// String-to-hex hash function used for every node in the tree.
pub trait Hasher: Send + Sync {
    /// Hash `input` and render the digest as lowercase hex.
    fn hash(&self, input: &str) -> String;
}

/// The default hasher: SHA-256 over the UTF-8 bytes of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash(&self, input: &str) -> String {
        let digest = Sha256::digest(input.as_bytes());
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl<F> Hasher for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn hash(&self, input: &str) -> String {
        self(input)
    }
}
