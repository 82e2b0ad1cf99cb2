//! # Canonical Scalar Serialization
//!
//! This module defines the sole conversion from a leaf value to the string
//! form that is hashed. Equal logical values always serialize identically:
//! no locale-dependent formatting, no map-iteration-order dependence.
//!
//! ## Rules
//!
//! - `null` — the empty string. Absent data is modeled as JSON `null`
//!   throughout the stack, and an absent leaf hashes like an empty slot.
//! - `bool` — `"true"` / `"false"`.
//! - number — the `serde_json` display form. `1` and `1.0` are distinct
//!   numbers and serialize distinctly; callers that need them equal must
//!   normalize before certification.
//! - string — the string content itself, unquoted.
//! - array / object — RFC 8785 canonical JSON via `serde_jcs` (sorted keys,
//!   compact separators). A well-formed schema walk never yields structured
//!   leaves, but undeclared structure passed through a custom hasher must
//!   still serialize deterministically.

use serde_json::Value;

use crate::error::CanonicalError;

/// Convert a leaf value to its canonical string form for hashing.
pub fn canonical_scalar(value: &Value) -> Result<String, CanonicalError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Array(_) | Value::Object(_) => Ok(serde_jcs::to_string(value)?),
    }
}
