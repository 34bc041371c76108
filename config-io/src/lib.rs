#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # config-io
//!
//! Hierarchical loading of YAML and JSON configuration documents.
//!
//! A document can inherit from a parent document (`default: base.yaml`) and
//! can ask for any of its fields to be expanded into several concrete
//! variants (`lr: [0.1, 0.01]` plus `lr_expand: true`). This crate resolves
//! the inheritance chain and computes the cartesian product of the
//! requested expansions.
//!
//! ## Core Types
//!
//! - [`ConfigNode`] and [`Value`]: ordered configuration documents
//! - [`ConfigLoader`]: default-chain resolution with override options
//! - [`Expander`]: recursive variant expansion
//! - [`Format`], [`load`] and [`dump`]: JSON/YAML reading and writing
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: user-facing stderr logging
//!
//! ## Examples
//!
//! ```
//! use config_io::{ConfigNode, Value};
//!
//! let mut node = ConfigNode::new();
//! node.insert("seed", vec![Value::from(1), Value::from(2), Value::from(3)]);
//! node.insert("seed_expand", true);
//!
//! let variants = node.expand("_expand").unwrap();
//! assert_eq!(variants.len(), 3);
//! assert_eq!(variants[2].get("seed"), Some(&Value::from(3)));
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod format;
pub mod logging;
pub mod node;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, ConfigMerger, LoadOptions, Loaded, Resolution};
pub use error::{Error, Result};
pub use expand::Expander;
pub use format::{dump, load, Document, Format};
pub use logging::{init_logger, LogLevel, Logger};
pub use node::{ConfigNode, Scalar, Value};
