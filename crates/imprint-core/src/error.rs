//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across the Imprint stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Schema construction errors name the offending path and the unexpected
//!   shape, so a misdeclared schema fails loudly at engine construction.
//! - Verification failure is deliberately *not* an error anywhere in the
//!   stack: it is an expected outcome and surfaces as `Option::None` at the
//!   certification layer.

use thiserror::Error;

/// Error raised while building a [`crate::Schema`] from its JSON form.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The `type` field is missing or not a string.
    #[error("schema node at '{path}' has no usable 'type' field")]
    MissingType { path: String },

    /// An array schema node without an `items` sub-schema.
    #[error("array schema at '{path}' is missing 'items'")]
    MissingItems { path: String },

    /// An object schema node whose `properties` is absent or not an object.
    #[error("object schema at '{path}' is missing 'properties'")]
    MissingProperties { path: String },
}

/// Error during canonical scalar serialization.
#[derive(Error, Debug)]
pub enum CanonicalError {
    /// Canonical JSON (RFC 8785) serialization of a structured value failed.
    #[error("canonical serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
