//! # Schema Model
//!
//! A `Schema` describes the expected shape of certified data: a recursive
//! tagged variant of arrays, objects, and scalar leaves. It is supplied once
//! at engine construction and drives the canonical traversal order — object
//! keys lexicographically, array elements by index.
//!
//! ## Canonical Indexing
//!
//! [`Schema::path_indexes`] maps every segment of a property path to the
//! position of that property among its siblings at that schema level. Both
//! proof construction and verification align revealed values with schema
//! positions through this single function; the two sides must agree exactly
//! or proofs become unverifiable.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::SchemaError;
use crate::path::{PathSegment, PropPath};

/// Recursive description of the expected data shape.
///
/// Object properties are held in a `BTreeMap`, so iterating them yields the
/// lexicographic order the certification layer depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// An ordered collection; every element shares one item schema.
    Array {
        /// Schema of each element.
        items: Box<Schema>,
    },
    /// A keyed collection with a fixed set of declared properties.
    Object {
        /// Declared properties, lexicographically ordered.
        properties: BTreeMap<String, Schema>,
    },
    /// Any scalar value.
    Leaf,
}

impl Schema {
    /// Build a schema from its JSON-schema-like form.
    ///
    /// `{"type": "array", "items": {...}}` and
    /// `{"type": "object", "properties": {...}}` map to the compound
    /// variants; any other `type` string maps to [`Schema::Leaf`]. Keywords
    /// outside `type`/`items`/`properties` are ignored.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Self::from_value_at(value, &PropPath::root())
    }

    fn from_value_at(value: &Value, path: &PropPath) -> Result<Self, SchemaError> {
        let ty = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::MissingType {
                path: path.dotted(),
            })?;

        match ty {
            "array" => {
                let items = value.get("items").ok_or_else(|| SchemaError::MissingItems {
                    path: path.dotted(),
                })?;
                Ok(Schema::Array {
                    items: Box::new(Self::from_value_at(items, &path.child("items"))?),
                })
            }
            "object" => {
                let props = value
                    .get("properties")
                    .and_then(Value::as_object)
                    .ok_or_else(|| SchemaError::MissingProperties {
                        path: path.dotted(),
                    })?;
                let mut properties = BTreeMap::new();
                for (name, sub) in props {
                    properties.insert(
                        name.clone(),
                        Self::from_value_at(sub, &path.child(name.as_str()))?,
                    );
                }
                Ok(Schema::Object { properties })
            }
            _ => Ok(Schema::Leaf),
        }
    }

    /// Convenience constructor for an object schema.
    pub fn object<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (String, Schema)>,
    {
        Schema::Object {
            properties: properties.into_iter().collect(),
        }
    }

    /// Convenience constructor for an array schema.
    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
        }
    }

    /// Returns the sub-schema at `path`, if the path is declared.
    pub fn node_at(&self, path: &PropPath) -> Option<&Schema> {
        let mut node = self;
        for segment in path.segments() {
            node = match (node, segment) {
                (Schema::Array { items }, PathSegment::Index(_)) => items,
                (Schema::Object { properties }, PathSegment::Key(k)) => properties.get(k)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Map each path segment to the canonical index of that property among
    /// its siblings: the literal index at array levels, the position within
    /// the lexicographically sorted property names at object levels.
    ///
    /// Segments that walk past a leaf, name an undeclared property, or
    /// mismatch the schema variant yield `None` at that position.
    pub fn path_indexes(&self, path: &PropPath) -> Vec<Option<usize>> {
        let mut indexes = Vec::with_capacity(path.len());
        let mut node = Some(self);

        for segment in path.segments() {
            match (node, segment) {
                (Some(Schema::Array { items }), PathSegment::Index(i)) => {
                    indexes.push(Some(*i));
                    node = Some(items);
                }
                (Some(Schema::Object { properties }), PathSegment::Key(k)) => {
                    // BTreeMap iteration is lexicographic, so the position
                    // within the iterator is the canonical index.
                    indexes.push(properties.keys().position(|name| name == k));
                    node = properties.get(k);
                }
                _ => {
                    indexes.push(None);
                    node = None;
                }
            }
        }

        indexes
    }

    /// The canonical index of the property addressed by `path` within its
    /// parent, when the path is declared and non-root.
    pub fn group_index(&self, path: &PropPath) -> Option<usize> {
        self.path_indexes(path).pop().flatten()
    }
}
