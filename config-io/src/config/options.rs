//! Load options and the reserved directives that override them.
//!
//! A document may carry four reserved top-level keys. Each one that is
//! present replaces the matching caller-supplied option for that document;
//! absent keys leave the option untouched.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::node::{ConfigNode, Value};

/// Names the parent document.
pub const DEFAULT_KEY: &str = "default";
/// Directories searched, in order, for the parent document.
pub const DEFAULT_SEARCH_PATHS_KEY: &str = "default_search_paths";
/// Requests expansion of the resolved document.
pub const EXPAND_KEY: &str = "expand";
/// Overrides the expansion marker suffix.
pub const EXPAND_SUFFIX_KEY: &str = "expand_suffix";
/// Marker suffix used when none is configured.
pub const DEFAULT_EXPAND_SUFFIX: &str = "_expand";

/// Options controlling how a document is resolved.
///
/// # Examples
///
/// ```
/// use config_io::config::LoadOptions;
///
/// let options = LoadOptions::default();
/// assert_eq!(options.default, None);
/// assert!(!options.expand);
/// assert_eq!(options.expand_suffix, "_expand");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Parent document filename, joined onto each search path in turn.
    pub default: Option<String>,
    /// Directories searched for the parent document. Relative entries are
    /// relative to the process working directory.
    pub search_paths: Vec<PathBuf>,
    /// Whether the resolved document is expanded into variants.
    pub expand: bool,
    /// Suffix appended to a key to form its expansion marker.
    pub expand_suffix: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            default: None,
            search_paths: Vec::new(),
            expand: false,
            expand_suffix: DEFAULT_EXPAND_SUFFIX.to_string(),
        }
    }
}

impl LoadOptions {
    /// Overrides options with the reserved keys present in `document`.
    ///
    /// - `default`: a string, or `null` for "no parent"
    /// - `default_search_paths`: a sequence of strings, or `null` for none
    /// - `expand`: any value, interpreted by truthiness
    /// - `expand_suffix`: a non-empty string
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDirective`] if a reserved key has another shape.
    pub fn apply_directives(&mut self, document: &ConfigNode) -> Result<()> {
        if let Some(value) = document.get(DEFAULT_KEY) {
            self.default = match value {
                Value::Scalar(crate::node::Scalar::Null) => None,
                other => Some(
                    other
                        .as_str()
                        .ok_or_else(|| invalid(DEFAULT_KEY, "expected a filename string", other))?
                        .to_string(),
                ),
            };
        }

        if let Some(value) = document.get(DEFAULT_SEARCH_PATHS_KEY) {
            self.search_paths = parse_search_paths(value)?;
        }

        if let Some(value) = document.get(EXPAND_KEY) {
            self.expand = value.is_truthy();
        }

        if let Some(value) = document.get(EXPAND_SUFFIX_KEY) {
            match value.as_str() {
                Some(suffix) if !suffix.is_empty() => self.expand_suffix = suffix.to_string(),
                _ => return Err(invalid(EXPAND_SUFFIX_KEY, "expected a non-empty string", value)),
            }
        }

        Ok(())
    }
}

fn parse_search_paths(value: &Value) -> Result<Vec<PathBuf>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    let items = value.as_sequence().ok_or_else(|| {
        invalid(
            DEFAULT_SEARCH_PATHS_KEY,
            "expected a sequence of directory strings",
            value,
        )
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(PathBuf::from).ok_or_else(|| {
                invalid(
                    DEFAULT_SEARCH_PATHS_KEY,
                    "every entry must be a directory string",
                    item,
                )
            })
        })
        .collect()
}

fn invalid(key: &str, expected: &str, found: &Value) -> Error {
    Error::InvalidDirective {
        key: key.to_string(),
        reason: format!("{expected}, found a {}", found.kind()),
    }
}
