//! # Merkle Tree Operations
//!
//! `notarize`, `disclose`, and `imprint` over the right-leaning hash chain
//! described in the crate docs. All three are pure functions of their
//! inputs and the configured hasher.

use std::sync::Arc;

use serde_json::Value;

use imprint_core::canonical_scalar;

use crate::error::MerkleError;
use crate::evidence::{Evidence, EvidenceNode, RevealedValue};
use crate::hasher::{Hasher, Sha256Hasher};

/// The Merkle primitive, parameterized by a hash function.
#[derive(Clone)]
pub struct MerkleTree {
    hasher: Arc<dyn Hasher>,
}

impl Default for MerkleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MerkleTree {
    /// Create a tree with the default SHA-256 hasher.
    pub fn new() -> Self {
        Self {
            hasher: Arc::new(Sha256Hasher),
        }
    }

    /// Create a tree with a custom hasher.
    pub fn with_hasher(hasher: Arc<dyn Hasher>) -> Self {
        Self { hasher }
    }

    /// Hash one leaf value through canonical serialization.
    fn leaf_hash(&self, value: &Value) -> Result<String, MerkleError> {
        Ok(self.hasher.hash(&canonical_scalar(value)?))
    }

    /// Build full evidence for an ordered list of leaf values.
    ///
    /// The returned evidence reveals every value and carries every node;
    /// its root is the node at index `0`. An empty list yields the single
    /// terminal node `H("")` — the empty imprint.
    pub fn notarize(&self, values: &[Value]) -> Result<Evidence, MerkleError> {
        let n = values.len();

        let leaf_hashes = values
            .iter()
            .map(|v| self.leaf_hash(v))
            .collect::<Result<Vec<_>, _>>()?;

        let mut chain = vec![String::new(); n + 1];
        chain[n] = self.hasher.hash("");
        for i in (0..n).rev() {
            chain[i] = self.hasher.hash(&format!("{}{}", leaf_hashes[i], chain[i + 1]));
        }

        let mut nodes = Vec::with_capacity(2 * n + 1);
        for i in 0..n {
            nodes.push(EvidenceNode {
                index: 2 * i,
                hash: chain[i].clone(),
            });
            nodes.push(EvidenceNode {
                index: 2 * i + 1,
                hash: leaf_hashes[i].clone(),
            });
        }
        nodes.push(EvidenceNode {
            index: 2 * n,
            hash: chain[n].clone(),
        });

        Ok(Evidence {
            nodes,
            values: values
                .iter()
                .enumerate()
                .map(|(index, value)| RevealedValue {
                    index,
                    value: value.clone(),
                })
                .collect(),
        })
    }

    /// Reduce evidence to the minimum needed to verify the values at
    /// `expose`: the exposed values, the leaf-hash node for every covered
    /// unexposed index, and one anchor chain node just past the highest
    /// exposed index. An empty `expose` keeps only the root node.
    pub fn disclose(&self, evidence: &Evidence, expose: &[usize]) -> Result<Evidence, MerkleError> {
        let size = expose.iter().map(|i| i + 1).max().unwrap_or(0);

        let mut nodes = Vec::new();
        let mut values = Vec::new();
        for i in 0..size {
            if expose.contains(&i) {
                values.push(
                    evidence
                        .value(i)
                        .cloned()
                        .ok_or(MerkleError::MissingValue { index: i })?,
                );
            } else {
                let index = 2 * i + 1;
                nodes.push(
                    evidence
                        .node(index)
                        .cloned()
                        .ok_or(MerkleError::MissingNode { index })?,
                );
            }
        }

        let anchor = 2 * size;
        nodes.push(
            evidence
                .node(anchor)
                .cloned()
                .ok_or(MerkleError::MissingNode { index: anchor })?,
        );

        Ok(Evidence { nodes, values })
    }

    /// Recompute the root hash from (possibly partial) evidence alone.
    ///
    /// Leaf hashes derived from revealed values take precedence over
    /// provided nodes at the same slot, and within each list the first
    /// occurrence wins, so freshly prepended entries shadow stale ones.
    pub fn imprint(&self, evidence: &Evidence) -> Result<String, MerkleError> {
        let mut slots = Vec::with_capacity(evidence.values.len() + evidence.nodes.len());
        for v in &evidence.values {
            slots.push(EvidenceNode {
                index: 2 * v.index + 1,
                hash: self.leaf_hash(&v.value)?,
            });
        }
        slots.extend(evidence.nodes.iter().cloned());

        let lookup = |index: usize| {
            slots
                .iter()
                .find(|n| n.index == index)
                .map(|n| n.hash.clone())
        };

        // Anchor at the highest chain-node slot present, then fold the
        // chain back down to the root.
        let anchor = slots
            .iter()
            .map(|n| n.index)
            .filter(|i| i % 2 == 0)
            .max()
            .ok_or(MerkleError::NoAnchor)?;
        let mut hash = lookup(anchor).ok_or(MerkleError::MissingNode { index: anchor })?;

        for i in (0..anchor / 2).rev() {
            let index = 2 * i + 1;
            let leaf = lookup(index).ok_or(MerkleError::MissingNode { index })?;
            hash = self.hasher.hash(&format!("{leaf}{hash}"));
        }

        Ok(hash)
    }
}

impl std::fmt::Debug for MerkleTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerkleTree").finish_non_exhaustive()
    }
}
