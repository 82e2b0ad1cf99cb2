//! # Schema Walker
//!
//! Recursively decomposes a data object against the schema into an ordered
//! flat list of leaf properties: depth-first, object keys in lexicographic
//! order, array elements in index order.
//!
//! Shape mismatches are tolerated, not fatal: non-array data under an array
//! schema contributes no elements, and non-object data under an object
//! schema yields `null` for every declared property. Properties present in
//! the data but absent from the schema are never visited.

use serde_json::Value;

use imprint_core::{PropPath, Schema};

use crate::prop::SchemaProp;

/// Extract the ordered leaf properties of `data` under `schema`.
///
/// Every schema-declared leaf reachable through the data appears exactly
/// once; leaves missing from the data carry `Value::Null`.
pub fn extract(data: &Value, schema: &Schema, prefix: &PropPath) -> Vec<SchemaProp> {
    match schema {
        Schema::Array { items } => match data.as_array() {
            Some(elements) => elements
                .iter()
                .enumerate()
                .flat_map(|(i, element)| extract(element, items, &prefix.child(i)))
                .collect(),
            None => Vec::new(),
        },
        Schema::Object { properties } => properties
            .iter()
            .flat_map(|(name, sub)| {
                let child = data.get(name).unwrap_or(&Value::Null);
                extract(child, sub, &prefix.child(name.as_str()))
            })
            .collect(),
        Schema::Leaf => vec![SchemaProp::new(prefix.clone(), data.clone())],
    }
}
