//! Default-inheritance resolution for configuration documents.
//!
//! A document may name a parent with the reserved `default` key. The parent
//! is looked up along a list of search paths (the document's own directory
//! always comes first), resolved recursively, and the document's top-level
//! keys are shallow-merged on top of it.
//!
//! # Reserved keys
//!
//! | key                    | meaning                                       |
//! |------------------------|-----------------------------------------------|
//! | `default`              | parent filename, joined onto each search path |
//! | `default_search_paths` | directories searched for the parent           |
//! | `expand`               | expand the merged document into variants      |
//! | `expand_suffix`        | marker suffix, `_expand` unless overridden    |
//!
//! A reserved key present in the document overrides the matching option
//! given to [`ConfigLoader`]. Reserved keys stay in the merged document.
//!
//! # Examples
//!
//! ```no_run
//! use config_io::config::{ConfigLoader, Loaded};
//! use std::path::Path;
//!
//! match ConfigLoader::new().load(Path::new("experiment.yaml")).unwrap() {
//!     Loaded::Single(node) => println!("{} keys", node.len()),
//!     Loaded::Expanded(variants) => println!("{} variants", variants.len()),
//! }
//! ```

pub mod loader;
pub mod merger;
pub mod options;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use loader::{find_default, ConfigLoader, Loaded, Resolution};
pub use merger::ConfigMerger;
pub use options::{
    LoadOptions, DEFAULT_EXPAND_SUFFIX, DEFAULT_KEY, DEFAULT_SEARCH_PATHS_KEY, EXPAND_KEY,
    EXPAND_SUFFIX_KEY,
};
