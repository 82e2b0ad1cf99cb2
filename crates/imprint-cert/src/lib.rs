//! # imprint-cert — Schema-Mirrored Merkle Certification
//!
//! Certifies structured data (nested objects and arrays of scalar leaves)
//! against a declared [`Schema`] by building a Merkle tree whose shape
//! mirrors the schema. A holder of the full certification can later reveal
//! any subset of properties while a verifier recomputes the original root
//! hash from the disclosed leaves plus sibling hashes alone.
//!
//! ## Pipeline
//!
//! ```text
//! data ──walker──▶ leaf props ──compound──▶ all props ──proofs──▶ PropProof list
//!                                                                    │
//!                          calculate ◀──reconstruct (root hash)──────┘
//! ```
//!
//! - [`walker`] decomposes data against the schema into an ordered flat
//!   list of leaf properties with canonical paths.
//! - [`compound`] synthesizes one hash-bearing property per object/array
//!   node, bottom-up, so every schema level has a representative value.
//! - [`proofs`] groups properties by parent path, merkleizes each group,
//!   and optionally reduces each group's evidence to a requested path set.
//! - [`engine::Certifier`] orchestrates: `notarize`, `disclose`,
//!   `imprint`, and `calculate`.
//! - [`reconstruct`] recomputes the overall root purely from a (possibly
//!   partial) proof list, without the source data.
//!
//! ## Crate Policy
//!
//! - Verification failure is `Option::None`, never `Err` — it is an
//!   expected, frequent outcome that every caller must distinguish from
//!   "verified, hash is X".
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod compound;
pub mod engine;
pub mod error;
pub mod prop;
pub mod proofs;
pub mod reconstruct;
pub mod walker;

pub use engine::{Certifier, CertifierConfig};
pub use error::CertError;
pub use prop::{PropProof, SchemaProp};

// Re-export the vocabulary types callers need alongside the engine.
pub use imprint_core::{PathSegment, PropPath, Schema};
pub use imprint_merkle::{EvidenceNode, RevealedValue};
