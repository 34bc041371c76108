//! In-memory representation of configuration documents.
//!
//! A [`ConfigNode`] is an insertion-ordered mapping from string keys to
//! [`Value`]s. Order matters: it drives the enumeration order of expanded
//! variants and is preserved when a node is written back to disk.
//!
//! Navigation never creates structure. Reading an absent key through
//! [`ConfigNode::value`], [`ConfigNode::child`] or [`ConfigNode::at`] fails
//! with [`Error::MissingKey`].
//!
//! # Examples
//!
//! ```
//! use config_io::{ConfigNode, Error, Value};
//!
//! let mut model = ConfigNode::new();
//! model.insert("depth", 12);
//!
//! let mut root = ConfigNode::new();
//! root.insert("model", model);
//!
//! assert_eq!(root.at("model.depth").unwrap().as_i64(), Some(12));
//! assert!(matches!(root.at("model.width"), Err(Error::MissingKey { .. })));
//! ```

mod serde_impl;
mod value;

pub use value::{Scalar, Value};

use std::path::Path;

use crate::error::{Error, Result};

/// An ordered mapping from string keys to values.
///
/// Equality ignores key order, like a mapping; iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConfigNode {
    entries: Vec<(String, Value)>,
}

impl ConfigNode {
    /// Creates an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty node with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Builds a node from entries whose keys are already known to be unique.
    pub(crate) fn from_unique_entries(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the node has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Borrows the value at `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Mutably borrows the value at `key`, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key keeps its position and the previous value is returned;
    /// a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrows the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `key` is absent.
    pub fn value(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::MissingKey {
            key: key.to_string(),
        })
    }

    /// Borrows the nested node at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `key` is absent, or
    /// [`Error::NotANode`] if its value is not a mapping.
    pub fn child(&self, key: &str) -> Result<&ConfigNode> {
        self.value(key)?.as_node().ok_or_else(|| Error::NotANode {
            key: key.to_string(),
        })
    }

    /// Mutably borrows the nested node at `key`.
    ///
    /// Assigning through a missing intermediate fails instead of creating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `key` is absent, or
    /// [`Error::NotANode`] if its value is not a mapping.
    pub fn child_mut(&mut self, key: &str) -> Result<&mut ConfigNode> {
        let value = self.get_mut(key).ok_or_else(|| Error::MissingKey {
            key: key.to_string(),
        })?;
        value.as_node_mut().ok_or_else(|| Error::NotANode {
            key: key.to_string(),
        })
    }

    /// Follows a dotted path such as `model.layers.0.width`.
    ///
    /// Segments index into nested nodes by key and into sequences by
    /// position. Error keys name the path up to the failing segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] when a segment is absent (or out of
    /// range), and [`Error::NotANode`] when a segment would descend into a
    /// scalar.
    pub fn at(&self, path: &str) -> Result<&Value> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut current = self.value(first)?;
        let mut walked = first.to_string();

        for segment in segments {
            let next = match current {
                Value::Node(node) => node.get(segment),
                Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                Value::Scalar(_) => {
                    return Err(Error::NotANode { key: walked });
                }
            };
            walked.push('.');
            walked.push_str(segment);
            current = next.ok_or_else(|| Error::MissingKey {
                key: walked.clone(),
            })?;
        }

        Ok(current)
    }

    /// Clones this node into a [`Value::Node`].
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Node(self.clone())
    }

    /// Expands this node with the given marker suffix.
    ///
    /// Equivalent to [`crate::expand::Expander::expand`]; usable on any
    /// sub-node obtained by navigation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpansionType`] if a marked key does not hold a sequence.
    pub fn expand(&self, suffix: &str) -> Result<Vec<ConfigNode>> {
        crate::expand::Expander::new(suffix).expand(self)
    }

    /// Writes this node to `path`, choosing the format from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for unknown extensions, or an
    /// I/O or serialization error.
    pub fn dump_to_file(&self, path: &Path) -> Result<()> {
        crate::format::dump(path, self)
    }
}

impl PartialEq for ConfigNode {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl FromIterator<(String, Value)> for ConfigNode {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut node = Self::new();
        node.extend(iter);
        node
    }
}

impl Extend<(String, Value)> for ConfigNode {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for ConfigNode {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
