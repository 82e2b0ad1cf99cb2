//! # Proof-Root Reconstruction
//!
//! Recomputes the overall root hash from a (possibly partial) proof list
//! alone — never from the source data. This is the crux of disclosure
//! verification: a verifier holding a few revealed leaves plus sibling
//! hashes reconstructs the exact root a full notarization would produce.
//!
//! ## Fold Order and Shadowing
//!
//! Proofs are processed deepest-first. Each group's local root is
//! recomputed from its own evidence, then prepended both to the group's
//! own node list (slot 0) and to the parent's value list at the group's
//! canonical index. Prepending rather than replacing deliberately leaves
//! any stale entry in place: the primitive's first-match lookup makes the
//! fresh entry shadow it.
//!
//! ## Degradation Policy
//!
//! A group whose evidence fails to imprint contributes the empty-string
//! sentinel instead of aborting, so unaffected branches still reconstruct.
//! Callers needing strict failure detection must pair this with the data
//! inclusion check; `Certifier::calculate` does exactly that.

use std::cmp::Reverse;

use serde_json::Value;

use imprint_core::Schema;
use imprint_merkle::{EvidenceNode, MerkleTree, RevealedValue};

use crate::prop::PropProof;

/// The empty imprint: the root of a zero-length canonical sequence.
pub fn empty_imprint(merkle: &MerkleTree) -> String {
    merkle
        .notarize(&[])
        .ok()
        .and_then(|evidence| evidence.root().map(str::to_string))
        .unwrap_or_default()
}

/// Recompute the overall root hash from `proofs` alone.
///
/// Returns the empty imprint when `proofs` is empty or contains no root
/// group.
pub fn imprint_proofs(schema: &Schema, merkle: &MerkleTree, proofs: &[PropProof]) -> String {
    if proofs.is_empty() {
        return empty_imprint(merkle);
    }

    // Work on an annotated clone, deepest groups first. Sorting is stable,
    // and equal-depth groups are never parent and child of one another.
    let mut proofs: Vec<PropProof> = proofs.to_vec();
    proofs.sort_by_key(|p| Reverse(p.path.len()));

    for i in 0..proofs.len() {
        let local_root = merkle.imprint(&proofs[i].evidence()).unwrap_or_default();
        proofs[i].nodes.insert(
            0,
            EvidenceNode {
                index: 0,
                hash: local_root.clone(),
            },
        );

        if proofs[i].path.is_empty() {
            continue;
        }
        let parent_key = proofs[i].path.parent().dotted();
        let Some(group_index) = schema.group_index(&proofs[i].path) else {
            continue;
        };
        if let Some(parent) = proofs.iter().position(|p| p.key() == parent_key) {
            proofs[parent].values.insert(
                0,
                RevealedValue {
                    index: group_index,
                    value: Value::String(local_root),
                },
            );
        }
    }

    match proofs.iter().find(|p| p.path.is_empty()) {
        Some(root) => root
            .nodes
            .iter()
            .find(|n| n.index == 0)
            .map(|n| n.hash.clone())
            .unwrap_or_default(),
        None => empty_imprint(merkle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use imprint_core::PropPath;

    use crate::{compound, proofs, walker};

    fn schema() -> Schema {
        Schema::from_value(&json!({
            "type": "object",
            "properties": {
                "a": { "type": "string" },
                "b": {
                    "type": "object",
                    "properties": {
                        "c": { "type": "string" },
                        "d": { "type": "string" }
                    }
                }
            }
        }))
        .unwrap()
    }

    fn full_proofs(data: &Value) -> Vec<PropProof> {
        let merkle = MerkleTree::new();
        let leaves = walker::extract(data, &schema(), &PropPath::root());
        let props = compound::expand(&merkle, leaves).unwrap();
        proofs::build(&merkle, &props, None).unwrap()
    }

    #[test]
    fn empty_input_is_the_empty_imprint() {
        let merkle = MerkleTree::new();
        assert_eq!(
            imprint_proofs(&schema(), &merkle, &[]),
            empty_imprint(&merkle)
        );
        assert_eq!(
            empty_imprint(&merkle),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn full_proofs_reconstruct_the_notarized_root() {
        let merkle = MerkleTree::new();
        let data = json!({"a": "x", "b": {"c": "y", "d": "z"}});
        let all = full_proofs(&data);

        let root = all
            .iter()
            .find(|p| p.path.is_empty())
            .and_then(|p| p.nodes.iter().find(|n| n.index == 0))
            .map(|n| n.hash.clone())
            .unwrap();

        assert_eq!(imprint_proofs(&schema(), &merkle, &all), root);
    }

    #[test]
    fn missing_root_group_degrades_to_empty_imprint() {
        let merkle = MerkleTree::new();
        let data = json!({"a": "x", "b": {"c": "y", "d": "z"}});
        let subtree_only: Vec<PropProof> = full_proofs(&data)
            .into_iter()
            .filter(|p| !p.path.is_empty())
            .collect();

        assert_eq!(
            imprint_proofs(&schema(), &merkle, &subtree_only),
            empty_imprint(&merkle)
        );
    }

    #[test]
    fn broken_branch_degrades_without_aborting() {
        let merkle = MerkleTree::new();
        let data = json!({"a": "x", "b": {"c": "y", "d": "z"}});
        let mut all = full_proofs(&data);
        let baseline = imprint_proofs(&schema(), &merkle, &all);

        // Strip the b group's evidence entirely: its imprint fails and the
        // sentinel flows upward, changing (not crashing) the result.
        let b = all.iter_mut().find(|p| p.key() == "b").unwrap();
        b.nodes.clear();
        b.values.clear();

        let degraded = imprint_proofs(&schema(), &merkle, &all);
        assert_ne!(degraded, baseline);
        assert!(!degraded.is_empty());
    }

    #[test]
    fn stale_parent_values_are_shadowed() {
        let merkle = MerkleTree::new();
        let data = json!({"a": "x", "b": {"c": "y", "d": "z"}});
        let mut all = full_proofs(&data);
        let baseline = imprint_proofs(&schema(), &merkle, &all);

        // Corrupt the stored compound value at b's index in the root group.
        // Reconstruction prepends the freshly recomputed hash, which must
        // shadow the stale entry under first-match lookup.
        let root = all.iter_mut().find(|p| p.path.is_empty()).unwrap();
        for value in root.values.iter_mut() {
            if value.index == 1 {
                value.value = json!("stale-compound-hash");
            }
        }

        assert_eq!(imprint_proofs(&schema(), &merkle, &all), baseline);
    }
}
