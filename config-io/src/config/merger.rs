//! Shallow merging of a document onto its resolved parent.
//!
//! Only the top level is merged. A key present in the overlay replaces the
//! base value wholesale, even when both values are mappings.

use crate::node::ConfigNode;

/// Shallow merge of a child document onto its parent.
///
/// # Examples
///
/// ```
/// use config_io::{ConfigMerger, ConfigNode, Value};
///
/// let mut parent_b = ConfigNode::new();
/// parent_b.insert("x", 1);
/// parent_b.insert("y", 2);
/// let mut parent = ConfigNode::new();
/// parent.insert("a", 1);
/// parent.insert("b", parent_b);
///
/// let mut child_b = ConfigNode::new();
/// child_b.insert("x", 9);
/// let mut child = ConfigNode::new();
/// child.insert("b", child_b.clone());
/// child.insert("c", 3);
///
/// let merged = ConfigMerger::merge(parent, child);
/// assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// assert_eq!(merged.get("b"), Some(&Value::Node(child_b)));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Applies `overlay` on top of `base` and returns the result.
    ///
    /// Keys shared by both keep the base's position; overlay-only keys are
    /// appended in overlay order.
    #[must_use]
    pub fn merge(mut base: ConfigNode, overlay: ConfigNode) -> ConfigNode {
        base.extend(overlay);
        base
    }
}
