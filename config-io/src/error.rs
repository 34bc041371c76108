//! Error types for the config-io library.
//!
//! Every failure aborts the whole load or expansion and is surfaced to the
//! caller with the path, key or search-path list needed to diagnose it.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a config-io error.
///
/// # Examples
///
/// ```
/// use config_io::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the config-io library.
#[derive(Debug, Error)]
pub enum Error {
    /// The file extension is not one of `.json`, `.yaml` or `.yml`.
    #[error("unsupported extension '{extension}' for {}", path.display())]
    UnsupportedFormat {
        /// The path that was being loaded or dumped.
        path: PathBuf,
        /// The lower-cased extension, including the leading dot (may be empty).
        extension: String,
    },

    /// A declared `default` file was not found in any search path.
    #[error("file {name} not found in {}", display_paths(.search_paths))]
    DefaultNotFound {
        /// The `default` filename as declared.
        name: String,
        /// The search paths that were tried, in order.
        search_paths: Vec<PathBuf>,
    },

    /// A key flagged for expansion does not hold a sequence.
    #[error("the value of '{key}' should be a sequence in order to be expanded")]
    ExpansionType {
        /// The offending key.
        key: String,
    },

    /// Navigation into a node by a key that is not present.
    #[error("missing key '{key}'")]
    MissingKey {
        /// The absent key (or dotted path up to and including it).
        key: String,
    },

    /// Navigation through a key whose value is not a mapping.
    #[error("value at '{key}' is not a mapping")]
    NotANode {
        /// The key whose value is not a mapping.
        key: String,
    },

    /// A `default` chain refers back to a document already being resolved.
    #[error("cyclic default chain: {}", display_paths(.chain))]
    CyclicDefault {
        /// The chain of documents, ending with the repeated one.
        chain: Vec<PathBuf>,
    },

    /// A reserved top-level key has an unusable value.
    #[error("invalid '{key}' directive: {reason}")]
    InvalidDirective {
        /// The reserved key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A file parsed successfully but its top level is not a mapping.
    #[error("invalid document {}: {reason}", path.display())]
    InvalidDocument {
        /// The offending file.
        path: PathBuf,
        /// What was found instead.
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A float that JSON cannot represent (infinite or NaN) was about to be written.
    #[error("value at '{key}' is not a finite number and cannot be written as JSON")]
    NonFiniteFloat {
        /// Dotted path of the offending value.
        key: String,
    },

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    let joined = paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

impl Error {
    /// Check if error indicates a missing key or a missing default file.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_io::Error;
    ///
    /// let err = Error::MissingKey { key: "model".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MissingKey { .. } | Self::DefaultNotFound { .. })
    }

    /// Check if error is caused by an unsupported file extension.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
