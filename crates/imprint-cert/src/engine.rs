//! # Certification Engine
//!
//! `Certifier` orchestrates the pipeline: walker → compound builder →
//! proof builder, plus verification. It holds only the immutable schema
//! and the Merkle primitive; every operation is an independent,
//! side-effect-free call over its inputs.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use imprint_core::{PropPath, Schema};
use imprint_merkle::{Hasher, MerkleTree};

use crate::error::CertError;
use crate::prop::PropProof;
use crate::proofs::RequestKeys;
use crate::{compound, proofs, reconstruct, walker};

/// Construction parameters for a [`Certifier`].
pub struct CertifierConfig {
    /// The declared data shape; immutable for the engine's lifetime.
    pub schema: Schema,
    /// Optional override for the tree's hash function.
    pub hasher: Option<Arc<dyn Hasher>>,
}

/// The certification engine.
pub struct Certifier {
    schema: Schema,
    merkle: MerkleTree,
}

impl Certifier {
    /// Build an engine from a config.
    pub fn new(config: CertifierConfig) -> Self {
        let merkle = match config.hasher {
            Some(hasher) => MerkleTree::with_hasher(hasher),
            None => MerkleTree::new(),
        };
        Self {
            schema: config.schema,
            merkle,
        }
    }

    /// Build an engine over `schema` with the default SHA-256 hasher.
    pub fn from_schema(schema: Schema) -> Self {
        Self::new(CertifierConfig {
            schema,
            hasher: None,
        })
    }

    /// Build an engine from the JSON form of a schema.
    pub fn from_schema_value(value: &Value) -> Result<Self, CertError> {
        Ok(Self::from_schema(Schema::from_value(value)?))
    }

    /// The declared schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Produce the complete certification for `data`: one proof per group,
    /// full evidence, ordered ascending by group key.
    pub fn notarize(&self, data: &Value) -> Result<Vec<PropProof>, CertError> {
        let proofs = self.build(data, None)?;
        debug!(groups = proofs.len(), "notarized data object");
        Ok(proofs)
    }

    /// Produce the minimal certification disclosing only `paths` (each
    /// path implies its ancestors and its whole subtree).
    pub fn disclose(&self, data: &Value, paths: &[PropPath]) -> Result<Vec<PropProof>, CertError> {
        let request = RequestKeys::new(paths);
        let proofs = self.build(data, Some(&request))?;
        debug!(
            requested = paths.len(),
            groups = proofs.len(),
            "disclosed data subset"
        );
        Ok(proofs)
    }

    /// The root hash committing to the entire data object.
    pub fn imprint(&self, data: &Value) -> Result<String, CertError> {
        let proofs = self.notarize(data)?;
        Ok(root_hash(&proofs).unwrap_or_else(|| self.empty_imprint()))
    }

    /// Verify that `proofs` accounts for every schema-declared, defined
    /// leaf of `data`, then recompute the root hash from `proofs` alone.
    ///
    /// Returns `None` when verification fails — an expected outcome, not
    /// an error. The returned hash never derives from `data` itself.
    pub fn calculate(&self, data: &Value, proofs: &[PropProof]) -> Option<String> {
        if !self.check_data_inclusion(data, proofs) {
            debug!("data inclusion check failed");
            return None;
        }
        Some(self.imprint_proofs(proofs))
    }

    /// The root hash of a zero-length canonical sequence.
    pub fn empty_imprint(&self) -> String {
        reconstruct::empty_imprint(&self.merkle)
    }

    /// Recompute the overall root from a (possibly partial) proof list;
    /// best-effort, degrading broken branches to an empty-hash sentinel.
    pub fn imprint_proofs(&self, proofs: &[PropProof]) -> String {
        reconstruct::imprint_proofs(&self.schema, &self.merkle, proofs)
    }

    fn build(
        &self,
        data: &Value,
        request: Option<&RequestKeys>,
    ) -> Result<Vec<PropProof>, CertError> {
        let leaves = walker::extract(data, &self.schema, &PropPath::root());
        let props = compound::expand(&self.merkle, leaves)?;
        Ok(proofs::build(&self.merkle, &props, request)?)
    }

    /// Check that every defined leaf of `data` is revealed, at its
    /// canonical index, with an identical value, in the proof group
    /// matching its parent path. Leaves with `null` (absent) values are
    /// skipped; data properties outside the schema are never examined.
    fn check_data_inclusion(&self, data: &Value, proofs: &[PropProof]) -> bool {
        let leaves = walker::extract(data, &self.schema, &PropPath::root());

        for leaf in &leaves {
            if leaf.value.is_null() {
                continue;
            }

            let Some(proof) = proofs.iter().find(|p| p.key() == leaf.group) else {
                return false;
            };
            let Some(index) = self.schema.group_index(&leaf.path) else {
                return false;
            };
            match proof.values.iter().find(|v| v.index == index) {
                Some(revealed) if revealed.value == leaf.value => {}
                _ => return false,
            }
        }

        true
    }
}

/// The root group's root-slot hash, when a root proof is present.
fn root_hash(proofs: &[PropProof]) -> Option<String> {
    proofs
        .iter()
        .find(|p| p.path.is_empty())?
        .nodes
        .iter()
        .find(|n| n.index == 0)
        .map(|n| n.hash.clone())
}
