//! Variant expansion of configuration documents.
//!
//! A key `k` is expanded when its sibling marker `k + suffix` is truthy.
//! The value of `k` must then be a sequence; every element is expanded in
//! turn and the results are flattened into the candidate list for `k`.
//! Unmarked values are expanded recursively as they are, so markers in
//! nested mappings and sequences also multiply the output. The final
//! variants are the cartesian product of the candidate lists.
//!
//! Marker keys are left in every variant unchanged. There is no cap on the
//! number of variants; use [`Expander::count`] to check the size first.
//!
//! # Examples
//!
//! ```
//! use config_io::{ConfigNode, Expander, Value};
//!
//! let mut nested = ConfigNode::new();
//! nested.insert("c", vec![Value::from(3), Value::from(4)]);
//! nested.insert("c_expand", true);
//!
//! let mut node = ConfigNode::new();
//! node.insert("a", vec![Value::from(1), Value::from(2)]);
//! node.insert("a_expand", true);
//! node.insert("b", nested);
//!
//! let expander = Expander::default();
//! assert_eq!(expander.count(&Value::Node(node.clone())).unwrap(), 4);
//!
//! let variants = expander.expand(&node).unwrap();
//! assert_eq!(variants.len(), 4);
//! assert_eq!(variants[1].at("b.c").unwrap(), &Value::from(4));
//! assert_eq!(variants[1].get("a_expand"), Some(&Value::from(true)));
//! ```

mod product;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use crate::config::DEFAULT_EXPAND_SUFFIX;
use crate::error::{Error, Result};
use crate::node::{ConfigNode, Value};

use product::{cartesian_product, product_len};

/// Expands documents using a marker suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expander {
    suffix: String,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(DEFAULT_EXPAND_SUFFIX)
    }
}

impl Expander {
    /// Creates an expander for the given marker suffix.
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// The marker suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns true if `key` is flagged for expansion in `node`.
    #[must_use]
    pub fn is_marked(&self, node: &ConfigNode, key: &str) -> bool {
        node.get(&format!("{key}{}", self.suffix))
            .is_some_and(Value::is_truthy)
    }

    /// Expands `node` into its variants.
    ///
    /// A node without truthy markers yields exactly one variant equal to itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpansionType`] if a marked key does not hold a sequence.
    pub fn expand(&self, node: &ConfigNode) -> Result<Vec<ConfigNode>> {
        let variants = self.expand_node(node)?;
        log::debug!("expanded {} key(s) into {} variant(s)", node.len(), variants.len());
        Ok(variants)
    }

    /// Expands any value into its variants.
    ///
    /// Scalars yield themselves; sequences yield one sequence per
    /// combination of their elements' variants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpansionType`] if a marked key does not hold a sequence.
    pub fn expand_value(&self, value: &Value) -> Result<Vec<Value>> {
        match value {
            Value::Scalar(_) => Ok(vec![value.clone()]),
            Value::Node(node) => Ok(self
                .expand_node(node)?
                .into_iter()
                .map(Value::Node)
                .collect()),
            Value::Sequence(items) => {
                let candidates = items
                    .iter()
                    .map(|item| self.expand_value(item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(cartesian_product(&candidates)
                    .into_iter()
                    .map(Value::Sequence)
                    .collect())
            }
        }
    }

    fn expand_node(&self, node: &ConfigNode) -> Result<Vec<ConfigNode>> {
        let mut keys = Vec::with_capacity(node.len());
        let mut candidates = Vec::with_capacity(node.len());

        for (key, value) in node.iter() {
            let list = if self.is_marked(node, key) {
                self.expand_marked(key, value)?
            } else {
                self.expand_value(value)?
            };
            log::trace!("key '{key}' has {} candidate(s)", list.len());
            keys.push(key);
            candidates.push(list);
        }

        Ok(cartesian_product(&candidates)
            .into_iter()
            .map(|combo| {
                ConfigNode::from_unique_entries(
                    keys.iter().map(|k| (*k).to_string()).zip(combo).collect(),
                )
            })
            .collect())
    }

    fn expand_marked(&self, key: &str, value: &Value) -> Result<Vec<Value>> {
        let items = value.as_sequence().ok_or_else(|| Error::ExpansionType {
            key: key.to_string(),
        })?;
        let mut flattened = Vec::new();
        for item in items {
            flattened.extend(self.expand_value(item)?);
        }
        Ok(flattened)
    }

    /// Counts the variants [`Expander::expand_value`] would produce without
    /// building them. Saturates at `usize::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpansionType`] if a marked key does not hold a sequence.
    pub fn count(&self, value: &Value) -> Result<usize> {
        match value {
            Value::Scalar(_) => Ok(1),
            Value::Sequence(items) => {
                let lens = items
                    .iter()
                    .map(|item| self.count(item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(product_len(lens))
            }
            Value::Node(node) => {
                let mut lens = Vec::with_capacity(node.len());
                for (key, value) in node.iter() {
                    let len = if self.is_marked(node, key) {
                        let items = value.as_sequence().ok_or_else(|| Error::ExpansionType {
                            key: key.to_string(),
                        })?;
                        items.iter().try_fold(0usize, |acc, item| {
                            self.count(item).map(|n| acc.saturating_add(n))
                        })?
                    } else {
                        self.count(value)?
                    };
                    lens.push(len);
                }
                Ok(product_len(lens))
            }
        }
    }
}
