//! # Proof Builder
//!
//! Partitions the expanded property list by parent path, merkleizes each
//! group's children, and — when a request is present — reduces each group's
//! evidence to the minimal disclosure for the requested paths.
//!
//! ## Request Expansion
//!
//! A requested path implies two families of keys:
//!
//! - every prefix step, including the root, so that the ancestor chain up
//!   to the overall root stays verifiable;
//! - everything underneath it, so a caller can disclose an entire subtree
//!   by naming only its root.
//!
//! A group whose own key is neither requested nor implied is dropped from
//! the output entirely.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use imprint_core::PropPath;
use imprint_merkle::{MerkleError, MerkleTree};

use crate::prop::{PropProof, SchemaProp};

/// The expanded form of a disclosure request.
#[derive(Debug, Clone)]
pub struct RequestKeys {
    /// Requested paths plus all their prefix steps, dot-joined.
    exact: BTreeSet<String>,
    /// Requested paths themselves; anything underneath is implied.
    subtrees: BTreeSet<String>,
}

impl RequestKeys {
    /// Expand `paths` into the implied key set.
    pub fn new(paths: &[PropPath]) -> Self {
        let mut exact = BTreeSet::new();
        let mut subtrees = BTreeSet::new();
        for path in paths {
            for step in path.steps() {
                exact.insert(step.dotted());
            }
            subtrees.insert(path.dotted());
        }
        Self { exact, subtrees }
    }

    /// Whether `key` is requested or implied.
    pub fn contains(&self, key: &str) -> bool {
        self.exact.contains(key)
            || self.subtrees.iter().any(|root| {
                root.is_empty()
                    || (key.len() > root.len()
                        && key.starts_with(root.as_str())
                        && key.as_bytes()[root.len()] == b'.')
            })
    }
}

/// Build one proof per group from the expanded property list.
///
/// With `request = None` every group is retained with full evidence; with a
/// request, each group's evidence is reduced to the requested children and
/// unrequested groups are dropped. Output is ordered ascending by group key.
pub fn build(
    merkle: &MerkleTree,
    props: &[SchemaProp],
    request: Option<&RequestKeys>,
) -> Result<Vec<PropProof>, MerkleError> {
    // Partition by group key; the parent path is shared by construction.
    let mut groups: BTreeMap<String, PropPath> = BTreeMap::new();
    for prop in props {
        groups
            .entry(prop.group.clone())
            .or_insert_with(|| prop.path.parent());
    }

    let mut proofs = Vec::new();
    for (group_key, group_path) in &groups {
        if let Some(request) = request {
            if !request.contains(group_key) {
                continue;
            }
        }

        let mut children: Vec<&SchemaProp> =
            props.iter().filter(|p| &p.group == group_key).collect();
        children.sort_by(|a, b| a.key.cmp(&b.key));
        let values: Vec<Value> = children.iter().map(|p| p.value.clone()).collect();

        let mut evidence = merkle.notarize(&values)?;
        if let Some(request) = request {
            let expose: Vec<usize> = children
                .iter()
                .enumerate()
                .filter(|(_, p)| request.contains(&p.key))
                .map(|(i, _)| i)
                .collect();
            evidence = merkle.disclose(&evidence, &expose)?;
        }

        proofs.push(PropProof {
            path: group_path.clone(),
            nodes: evidence.nodes,
            values: evidence.values,
        });
    }

    Ok(proofs)
}
