//! Default-chain resolution.
//!
//! Loading a document reads its reserved directives, locates its parent
//! (`default`) along the search paths, resolves that parent with the same
//! procedure, and shallow-merges the document on top. The directory holding
//! the document is always searched first.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::ConfigMerger;
use crate::config::options::LoadOptions;
use crate::error::{Error, Result};
use crate::expand::Expander;
use crate::format;
use crate::node::ConfigNode;

/// The outcome of loading a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    /// Expansion was not requested; the merged document.
    Single(ConfigNode),
    /// Expansion was requested; every variant, in product order.
    Expanded(Vec<ConfigNode>),
}

impl Loaded {
    /// Returns true if the document was expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded(_))
    }

    /// Returns the merged document if expansion was not requested.
    #[must_use]
    pub fn single(self) -> Option<ConfigNode> {
        match self {
            Self::Single(node) => Some(node),
            Self::Expanded(_) => None,
        }
    }

    /// Returns all resulting documents; a single document becomes a one-element list.
    #[must_use]
    pub fn into_variants(self) -> Vec<ConfigNode> {
        match self {
            Self::Single(node) => vec![node],
            Self::Expanded(variants) => variants,
        }
    }
}

/// A fully merged document together with the options that were in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The merged document.
    pub node: ConfigNode,
    /// Options after the top document's directives were applied. The search
    /// paths include the document's own directory in first position.
    pub options: LoadOptions,
    /// Documents visited, starting with the requested one and ending with
    /// the root of the default chain.
    pub chain: Vec<PathBuf>,
}

impl Resolution {
    /// Expands the node if the effective options ask for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpansionType`] if a marked key does not hold a sequence.
    pub fn finish(self) -> Result<Loaded> {
        if self.options.expand {
            let variants = Expander::new(&self.options.expand_suffix).expand(&self.node)?;
            Ok(Loaded::Expanded(variants))
        } else {
            Ok(Loaded::Single(self.node))
        }
    }
}

/// Loads configuration documents, following their default chains.
///
/// The builder values are fallbacks: any reserved key present in the
/// document overrides the matching builder value.
///
/// # Examples
///
/// ```no_run
/// use config_io::ConfigLoader;
/// use std::path::Path;
///
/// let variants = ConfigLoader::new()
///     .add_search_path("configs/shared")
///     .with_expand(true)
///     .load(Path::new("configs/sweep.yaml"))
///     .unwrap()
///     .into_variants();
/// println!("{} runs", variants.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    options: LoadOptions,
}

impl ConfigLoader {
    /// Creates a loader with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader from explicit options.
    #[must_use]
    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Sets the parent document used when the document declares none.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.options.default = Some(default.into());
        self
    }

    /// Replaces the search paths used when the document declares none.
    #[must_use]
    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.options.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one search path.
    #[must_use]
    pub fn add_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.search_paths.push(path.into());
        self
    }

    /// Sets whether to expand when the document does not say.
    #[must_use]
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.options.expand = expand;
        self
    }

    /// Sets the marker suffix used when the document does not say.
    #[must_use]
    pub fn with_expand_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.options.expand_suffix = suffix.into();
        self
    }

    /// Returns the configured fallback options.
    #[must_use]
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Loads `path`, merges its default chain, and expands if requested.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ConfigLoader::resolve`] or
    /// [`Error::ExpansionType`] from expansion.
    pub fn load(&self, path: &Path) -> Result<Loaded> {
        self.resolve(path)?.finish()
    }

    /// Loads `path` and merges its default chain without expanding.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] if any document in the chain has an unknown extension
    /// - [`Error::DefaultNotFound`] if a `default` is not found on any search path
    /// - [`Error::CyclicDefault`] if the chain revisits a document
    /// - [`Error::InvalidDirective`] if a reserved key is malformed
    /// - I/O and parse errors from reading the documents
    pub fn resolve(&self, path: &Path) -> Result<Resolution> {
        let mut chain = Vec::new();
        let (node, options) = resolve_document(path, self.options.clone(), &mut chain)?;
        log::debug!(
            "resolved {} through {} document(s)",
            path.display(),
            chain.len()
        );
        Ok(Resolution {
            node,
            options,
            chain,
        })
    }
}

fn resolve_document(
    path: &Path,
    mut options: LoadOptions,
    chain: &mut Vec<PathBuf>,
) -> Result<(ConfigNode, LoadOptions)> {
    let identity = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let repeated = chain.contains(&identity);
    chain.push(identity);
    if repeated {
        return Err(Error::CyclicDefault {
            chain: chain.clone(),
        });
    }

    let document = format::load(path)?;
    options.apply_directives(&document)?;

    let own_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    options.search_paths.insert(0, own_dir);

    let base = match options.default.as_deref() {
        None => ConfigNode::new(),
        Some(name) => {
            let parent = find_default(name, &options.search_paths)?;
            log::debug!("{} inherits from {}", path.display(), parent.display());
            // The parent sees none of the caller's options; it is never expanded.
            resolve_document(&parent, LoadOptions::default(), chain)?.0
        }
    };

    Ok((ConfigMerger::merge(base, document), options))
}

/// Returns the first `search_path/name` that exists.
///
/// # Errors
///
/// Returns [`Error::DefaultNotFound`] listing every path tried.
pub fn find_default(name: &str, search_paths: &[PathBuf]) -> Result<PathBuf> {
    for dir in search_paths {
        let candidate = dir.join(name);
        log::trace!("looking for {name} at {}", candidate.display());
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(Error::DefaultNotFound {
        name: name.to_string(),
        search_paths: search_paths.to_vec(),
    })
}
