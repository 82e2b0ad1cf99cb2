//! # Evidence — Nodes and Revealed Values
//!
//! Evidence is the unit the primitive produces and consumes: an ordered
//! list of tree nodes (hashes at indexed slots) plus an ordered list of
//! revealed values (disclosed leaves at value indices).
//!
//! ## Duplicate Resolution
//!
//! Both lists tolerate duplicate indices. Lookup always takes the **first
//! occurrence in list order**. Callers that recompute a hash prepend the
//! fresh entry, so the newest entry shadows any stale one at the same
//! index. This first-match rule is the definitive tie-break for the whole
//! stack; it is relied on by proof-root reconstruction and covered by tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tree node: a hash at a position within the local Merkle tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceNode {
    /// Node slot index (see the crate docs for the slot layout).
    pub index: usize,
    /// Lowercase hex hash at this slot.
    pub hash: String,
}

/// A disclosed leaf value at a position within the value list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedValue {
    /// Zero-based position in the canonically ordered value list.
    pub index: usize,
    /// The disclosed value.
    pub value: Value,
}

/// Evidence for one Merkle tree: nodes plus revealed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Tree nodes, newest-first on any slot collision.
    pub nodes: Vec<EvidenceNode>,
    /// Revealed values, newest-first on any index collision.
    pub values: Vec<RevealedValue>,
}

impl Evidence {
    /// First node at `index` in list order.
    pub fn node(&self, index: usize) -> Option<&EvidenceNode> {
        self.nodes.iter().find(|n| n.index == index)
    }

    /// First revealed value at `index` in list order.
    pub fn value(&self, index: usize) -> Option<&RevealedValue> {
        self.values.iter().find(|v| v.index == index)
    }

    /// The root hash slot, when present.
    pub fn root(&self) -> Option<&str> {
        self.node(0).map(|n| n.hash.as_str())
    }
}
