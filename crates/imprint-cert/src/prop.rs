//! # Property and Proof Types
//!
//! `SchemaProp` is the internal currency of the pipeline: one entry per
//! data leaf (from the walker) and one per compound node (from the
//! compound builder). `PropProof` is the external, serde-serializable
//! certification unit: the evidence for exactly one group.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use imprint_core::PropPath;
use imprint_merkle::{Evidence, EvidenceNode, RevealedValue};

/// One property in schema-shaped data: a leaf value or a compound hash.
///
/// `key` and `group` are the dot-joined renderings of the path and its
/// parent; they are derived once at construction and used as grouping keys
/// throughout the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaProp {
    /// Location of this property.
    pub path: PropPath,
    /// Leaf value, or the Merkle root of the children for compound nodes.
    /// Absent data is `Value::Null`.
    pub value: Value,
    /// Dot-joined path (`"b.c"`).
    pub key: String,
    /// Dot-joined parent path (`"b"`; `""` for root-level properties).
    pub group: String,
}

impl SchemaProp {
    /// Build a property, deriving `key` and `group` from `path`.
    pub fn new(path: PropPath, value: Value) -> Self {
        let key = path.dotted();
        let group = path.parent().dotted();
        Self {
            path,
            value,
            key,
            group,
        }
    }
}

/// The proof for exactly one group: sibling/ancestor hashes plus disclosed
/// values, at positions within the group's canonically sorted child list.
///
/// A full certification is an ordered sequence of `PropProof`, one per
/// group, ascending by group key. Consumers must locate the root proof by
/// its empty path, never by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropProof {
    /// Path of the group's parent node (`[]` for the root group).
    pub path: PropPath,
    /// Sibling/ancestor hashes within the group's local Merkle tree.
    pub nodes: Vec<EvidenceNode>,
    /// Disclosed child values.
    pub values: Vec<RevealedValue>,
}

impl PropProof {
    /// The dot-joined group key of this proof.
    pub fn key(&self) -> String {
        self.path.dotted()
    }

    /// View this proof as primitive-layer evidence.
    pub fn evidence(&self) -> Evidence {
        Evidence {
            nodes: self.nodes.clone(),
            values: self.values.clone(),
        }
    }
}
