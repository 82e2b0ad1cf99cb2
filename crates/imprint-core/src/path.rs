//! # Property Paths
//!
//! A `PropPath` identifies one location in schema-shaped data: an ordered
//! sequence of segments, each either an object key or an array index. Two
//! paths are equal iff their segment sequences are equal.
//!
//! ## Design
//!
//! The dot-joined rendering (`"a.b.0"`) is the wire/grouping key used by the
//! certification layer, but it is always *derived* from the typed segments.
//! Keys containing literal dots would collide in the rendering; schemas are
//! expected not to use dotted property names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step in a property path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// An array index.
    Index(usize),
    /// An object property name.
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        PathSegment::Key(s.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

/// An ordered sequence of path segments locating a property.
///
/// Serializes as a JSON array of strings and integers
/// (`["b", "c"]`, `["docs", 0]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropPath(Vec<PathSegment>);

impl PropPath {
    /// The empty path, addressing the root of the data object.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Parse a dotted rendering. Segments consisting solely of ASCII digits
    /// become array indices; everything else becomes an object key.
    /// The empty string parses to the root path.
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self(
            dotted
                .split('.')
                .map(|s| match s.parse::<usize>() {
                    Ok(i) if s.chars().all(|c| c.is_ascii_digit()) => PathSegment::Index(i),
                    _ => PathSegment::Key(s.to_string()),
                })
                .collect(),
        )
    }

    /// Returns the segments of this path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy of this path with `segment` appended.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Returns the parent path (all segments but the last). The root path
    /// is its own parent.
    pub fn parent(&self) -> Self {
        match self.0.split_last() {
            Some((_, rest)) => Self(rest.to_vec()),
            None => Self::root(),
        }
    }

    /// The dot-joined rendering used as a grouping key (`""` for the root).
    pub fn dotted(&self) -> String {
        self.0
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Every prefix of this path, shortest first, starting with the root
    /// path and ending with the path itself.
    pub fn steps(&self) -> Vec<PropPath> {
        let mut out = Vec::with_capacity(self.0.len() + 1);
        for end in 0..=self.0.len() {
            out.push(Self(self.0[..end].to_vec()));
        }
        out
    }
}

impl fmt::Display for PropPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for PropPath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
