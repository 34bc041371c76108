//! Common test utilities for integration tests.
//!
//! This module provides a temporary workspace for writing configuration
//! documents in either format and helpers for building expected nodes.

use std::fs;
use std::path::{Path, PathBuf};

use config_io::{ConfigNode, Value};
use tempfile::TempDir;

/// Formats every scenario is run against.
pub const FORMATS: [&str; 2] = ["json", "yaml"];

/// Temporary directory that documents are written into.
pub struct TestWorkspace {
    #[allow(dead_code)]
    temp_dir: TempDir,
    root: PathBuf,
    counter: std::cell::Cell<usize>,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            root,
            counter: std::cell::Cell::new(0),
        }
    }

    /// Root directory of the workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `document` under `sub_folder` with a fresh name and the given
    /// extension, serialized the way a user would write it by hand.
    pub fn write(&self, document: &serde_json::Value, format: &str, sub_folder: &str) -> PathBuf {
        let dir = self.root.join(sub_folder);
        fs::create_dir_all(&dir).expect("Failed to create test directory");
        let n = self.counter.get();
        self.counter.set(n + 1);
        let path = dir.join(format!("{n}.{format}"));
        let text = match format {
            "json" => serde_json::to_string(document).unwrap(),
            "yaml" => serde_yaml::to_string(document).unwrap(),
            other => panic!("Unknown format {other}"),
        };
        fs::write(&path, text).expect("Failed to write document");
        path
    }

    /// Writes raw text to `name` relative to the workspace root.
    pub fn write_raw(&self, name: &str, text: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create test directory");
        }
        fs::write(&path, text).expect("Failed to write document");
        path
    }
}

/// Converts a `json!` literal into a node.
#[allow(dead_code)]
pub fn node(document: serde_json::Value) -> ConfigNode {
    Value::from(document)
        .into_node()
        .expect("document is not a mapping")
}

/// Asserts that two variant lists hold the same nodes, ignoring order.
#[allow(dead_code)]
pub fn assert_same_variants(actual: &[ConfigNode], expected: &[ConfigNode]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "variant count differs: {actual:?}"
    );
    for e in expected {
        assert!(actual.contains(e), "missing variant {e:?} in {actual:?}");
    }
}
