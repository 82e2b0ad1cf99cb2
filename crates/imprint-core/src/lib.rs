//! # imprint-core — Foundational Types for the Imprint Stack
//!
//! This crate is the bedrock of the Imprint certification stack. It defines
//! the type-system primitives every other crate builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed property paths.** A path into schema-shaped data is a sequence
//!    of `PathSegment::Key` / `PathSegment::Index` values — never a bare
//!    string with ad-hoc splitting. Dot-joined renderings are derived, not
//!    authoritative.
//!
//! 2. **One canonical serialization path.** All leaf values are converted to
//!    their hashing form through `canonical::canonical_scalar()`. No raw
//!    `to_string()` calls for digest input anywhere else in the workspace.
//!
//! 3. **Schema as a tagged variant.** `Schema::Array` / `Schema::Object` /
//!    `Schema::Leaf` with exhaustive `match` dispatch. Object properties live
//!    in a `BTreeMap`, so lexicographic traversal order is a structural
//!    guarantee rather than a sorting convention.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `imprint-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod path;
pub mod schema;

// Re-export primary types for ergonomic imports.
pub use canonical::canonical_scalar;
pub use error::{CanonicalError, SchemaError};
pub use path::{PathSegment, PropPath};
pub use schema::Schema;
