//! # imprint-merkle — Evidence-Based Merkle Primitive
//!
//! Provides the hashing primitive the certification layer composes:
//!
//! - **`notarize`** — build the full evidence (every revealed value and
//!   every tree node) for an ordered list of leaf values.
//! - **`disclose`** — reduce full evidence to the minimum needed to verify
//!   a chosen set of value indices.
//! - **`imprint`** — recompute the root hash from (possibly partial)
//!   evidence alone, without the original values.
//!
//! ## Tree Shape
//!
//! The tree is a right-leaning hash chain rather than a balanced binary
//! tree. For `n` values there are `2n + 1` node slots:
//!
//! ```text
//! index 2i     chain node  N_i = H(L_i || N_{i+1})
//! index 2i+1   leaf hash   L_i = H(serialize(v_i))
//! index 2n     terminal    N_n = H("")
//! ```
//!
//! The root is the chain node at index `0`. Disclosing indices `S` requires
//! the values at `S`, the leaf hashes below `max(S)` not in `S`, and one
//! anchor chain node just past `max(S)` — everything else is recomputable.
//!
//! ## Crate Policy
//!
//! - Depends only on `imprint-core` internally.
//! - No mocking of hash functions in tests — all tests run real SHA-256
//!   over real canonical serializations.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod evidence;
pub mod hasher;
pub mod tree;

pub use error::MerkleError;
pub use evidence::{Evidence, EvidenceNode, RevealedValue};
pub use hasher::{Hasher, Sha256Hasher};
pub use tree::MerkleTree;
