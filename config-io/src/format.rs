//! Reading and writing configuration documents as JSON or YAML.
//!
//! The format is chosen from the lower-cased file extension: `.json` for
//! JSON, `.yaml`/`.yml` for YAML. Anything else is rejected with
//! [`Error::UnsupportedFormat`] before the file is touched.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::node::{ConfigNode, Scalar, Value};

/// Supported document formats.
///
/// # Examples
///
/// ```
/// use config_io::Format;
/// use std::path::Path;
///
/// assert_eq!(Format::from_path(Path::new("run.YML")).unwrap(), Format::Yaml);
/// assert!(Format::from_path(Path::new("run.toml")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON, written with 4-space indentation.
    Json,
    /// YAML, written in serde_yaml's default block style.
    Yaml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl Format {
    /// Chooses the format for `path` from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the extension is not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        match extension.as_str() {
            ".json" => Ok(Self::Json),
            ".yaml" | ".yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    /// File extension (without the dot) used when writing this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Parses a value from text in this format.
    ///
    /// # Errors
    ///
    /// Returns a JSON or YAML parse error.
    pub fn parse(self, text: &str) -> Result<Value> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }

    /// Renders a document in this format.
    ///
    /// JSON output uses 4-space indentation and ends without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteFloat`] if JSON output would contain an
    /// infinite or NaN float, or a JSON or YAML serialization error.
    pub fn render<T: Document + ?Sized>(self, value: &T) -> Result<String> {
        match self {
            Self::Json => {
                if let Some(key) = value.non_finite_path() {
                    return Err(Error::NonFiniteFloat { key });
                }
                let mut buf = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                value.serialize(&mut ser)?;
                // serde_json only ever emits UTF-8
                Ok(String::from_utf8_lossy(&buf).into_owned())
            }
            Self::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Anything [`Format::render`] can write.
pub trait Document: Serialize {
    /// Dotted path of the first infinite or NaN float, if any.
    fn non_finite_path(&self) -> Option<String>;
}

impl Document for Value {
    fn non_finite_path(&self) -> Option<String> {
        match self {
            Value::Scalar(Scalar::Float(f)) if !f.is_finite() => Some(String::new()),
            Value::Scalar(_) => None,
            Value::Node(node) => node.non_finite_path(),
            Value::Sequence(items) => items.non_finite_path(),
        }
    }
}

impl Document for ConfigNode {
    fn non_finite_path(&self) -> Option<String> {
        self.iter()
            .find_map(|(key, value)| value.non_finite_path().map(|rest| join_path(key, &rest)))
    }
}

impl<T: Document> Document for [T] {
    fn non_finite_path(&self) -> Option<String> {
        self.iter().enumerate().find_map(|(i, item)| {
            item.non_finite_path()
                .map(|rest| join_path(&i.to_string(), &rest))
        })
    }
}

impl<T: Document> Document for Vec<T> {
    fn non_finite_path(&self) -> Option<String> {
        self.as_slice().non_finite_path()
    }
}

fn join_path(head: &str, rest: &str) -> String {
    if rest.is_empty() {
        head.to_string()
    } else {
        format!("{head}.{rest}")
    }
}

/// Loads the document at `path` as a [`ConfigNode`].
///
/// An empty YAML document loads as the empty node.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for an unknown extension,
/// [`Error::Io`] if the file cannot be read, a parse error for malformed
/// content, or [`Error::InvalidDocument`] if the top level is not a mapping.
pub fn load(path: &Path) -> Result<ConfigNode> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::trace!("parsing {} as {format}", path.display());

    match format.parse(&text)? {
        Value::Node(node) => Ok(node),
        Value::Scalar(Scalar::Null) => Ok(ConfigNode::new()),
        other => Err(Error::InvalidDocument {
            path: path.to_path_buf(),
            reason: format!("expected a mapping at the top level, found a {}", other.kind()),
        }),
    }
}

/// Writes `node` to `path`, choosing the format from the extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for an unknown extension (nothing is
/// written), a serialization error, or [`Error::Io`] if the write fails.
pub fn dump(path: &Path, node: &ConfigNode) -> Result<()> {
    let format = Format::from_path(path)?;
    let text = format.render(node)?;
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} as {format}", path.display());
    Ok(())
}
