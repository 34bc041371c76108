//! CLI command implementations.
//!
//! - `resolve`: Merge a document with its default chain
//! - `expand`: Merge, then expand into every variant
//! - `convert`: Rewrite a single document in another format
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod convert;
pub mod expand;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use convert::ConvertCommand;
pub use expand::ExpandCommand;
pub use resolve::ResolveCommand;
