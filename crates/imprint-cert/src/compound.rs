//! # Compound Property Builder
//!
//! Upgrades the walker's leaf list with one synthesized property per
//! object/array node, bottom-up: each compound's value is the Merkle root
//! of its children's values in canonical order, so every schema level ends
//! up with a representative value its parent can hash.
//!
//! Groups are processed in descending key order — with dot-joined keys a
//! deeper group always sorts after its ancestors, so children are final
//! before their parent is computed. The root group is excluded here; the
//! proof builder covers it once all root-level compounds exist.

use std::collections::BTreeMap;

use serde_json::Value;

use imprint_core::PropPath;
use imprint_merkle::{MerkleError, MerkleTree};

use crate::prop::SchemaProp;

/// Expand `leaves` with compound properties for every ancestor group.
///
/// Returns leaves plus compounds, sorted ascending by key. A group with no
/// children would receive the Merkle root of an empty sequence; with the
/// ancestor closure derived from leaf paths this arises only for the empty
/// root group, which is handled by the proof builder.
pub fn expand(merkle: &MerkleTree, leaves: Vec<SchemaProp>) -> Result<Vec<SchemaProp>, MerkleError> {
    let mut props = leaves;

    // Every proper prefix of every leaf path, keyed by its dotted form.
    let mut groups: BTreeMap<String, PropPath> = BTreeMap::new();
    for prop in &props {
        for step in prop.path.steps() {
            if step.len() < prop.path.len() {
                groups.entry(step.dotted()).or_insert(step);
            }
        }
    }

    // Descending key order; the root group ("") is skipped.
    for (key, path) in groups.iter().rev() {
        if key.is_empty() {
            continue;
        }

        let mut children: Vec<&SchemaProp> = props.iter().filter(|p| &p.group == key).collect();
        children.sort_by(|a, b| a.key.cmp(&b.key));
        let values: Vec<Value> = children.iter().map(|p| p.value.clone()).collect();

        let evidence = merkle.notarize(&values)?;
        let hash = evidence.root().unwrap_or_default().to_string();
        props.push(SchemaProp::new(path.clone(), Value::String(hash)));
    }

    props.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(props)
}
