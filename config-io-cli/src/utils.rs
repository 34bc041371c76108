//! Utility functions for CLI operations.
//!
//! Shared argument groups, loader construction from flags, and output
//! writing used across commands.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use config_io::{ConfigLoader, Document, Format};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Loader fallbacks accepted by `resolve` and `expand`.
///
/// Reserved keys in the document take precedence over these flags.
#[derive(Args, Debug, Clone, Default)]
pub struct LoaderArgs {
    /// Parent document used when the document declares no `default`
    #[arg(long, value_name = "FILE")]
    pub default: Option<String>,

    /// Directory to search for the parent document (repeatable)
    #[arg(
        long = "search-path",
        value_name = "DIR",
        env = "CONFIG_IO_SEARCH_PATH",
        value_delimiter = ':'
    )]
    pub search_paths: Vec<PathBuf>,
}

impl LoaderArgs {
    /// Builds a loader carrying these fallbacks.
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new().with_search_paths(self.search_paths.clone());
        if let Some(default) = &self.default {
            loader = loader.with_default(default.clone());
        }
        loader
    }
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON with 4-space indentation
    Json,
    /// YAML block style
    Yaml,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
        }
    }
}

/// Picks the output format.
///
/// An explicit `--format` wins; otherwise the output file's extension
/// decides; printing to stdout defaults to YAML.
pub fn choose_format(
    explicit: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<Format, CliError> {
    match (explicit, output) {
        (Some(format), _) => Ok(format.into()),
        (None, Some(path)) => Ok(Format::from_path(path)?),
        (None, None) => Ok(Format::Yaml),
    }
}

/// Renders `value` and writes it to `output`, or to stdout when absent.
pub fn write_output<T: Document + ?Sized>(
    value: &T,
    format: Format,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let mut text = format.render(value)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, text)?;
            log::debug!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_io::ConfigNode;
    use tempfile::TempDir;

    #[test]
    fn test_choose_format_explicit_wins() {
        let format = choose_format(Some(OutputFormat::Json), Some(Path::new("out.yaml"))).unwrap();
        assert_eq!(format, Format::Json);
    }

    #[test]
    fn test_choose_format_from_extension() {
        assert_eq!(
            choose_format(None, Some(Path::new("out.yml"))).unwrap(),
            Format::Yaml
        );
        let err = choose_format(None, Some(Path::new("out.txt"))).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_choose_format_stdout_default() {
        assert_eq!(choose_format(None, None).unwrap(), Format::Yaml);
    }

    #[test]
    fn test_loader_args_fallbacks() {
        let args = LoaderArgs {
            default: Some("base.yaml".into()),
            search_paths: vec![PathBuf::from("shared")],
        };
        let loader = args.loader();
        assert_eq!(loader.options().default.as_deref(), Some("base.yaml"));
        assert_eq!(loader.options().search_paths, vec![PathBuf::from("shared")]);
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        let mut node = ConfigNode::new();
        node.insert("a", 1);

        write_output(&node, Format::Json, Some(&path)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(config_io::load(&path).unwrap(), node);
    }
}
