//! Expand command implementation.
//!
//! Resolves a document, then expands it (or the sub-node selected with
//! `--at`) into every variant. Expansion is forced on regardless of the
//! document's own `expand` key; its `expand_suffix` is still honoured.

use crate::error::CliError;
use crate::utils::{choose_format, write_output, GlobalOptions, LoaderArgs, OutputFormat};
use clap::Args;
use config_io::{ConfigNode, Expander};
use std::fs;
use std::path::PathBuf;

/// Resolve a document and expand it into variants.
#[derive(Args)]
pub struct ExpandCommand {
    /// Document to expand
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub loader: LoaderArgs,

    /// Marker suffix used when the document sets no `expand_suffix`
    #[arg(long, value_name = "SUFFIX", env = "CONFIG_IO_EXPAND_SUFFIX")]
    pub suffix: Option<String>,

    /// Expand only the sub-node at this dotted path
    #[arg(long, value_name = "KEY.PATH")]
    pub at: Option<String>,

    /// Write one file per variant into DIR
    #[arg(long, value_name = "DIR", conflicts_with = "count")]
    pub output_dir: Option<PathBuf>,

    /// Output format (defaults to YAML)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Print only the number of variants
    #[arg(long)]
    pub count: bool,
}

impl ExpandCommand {
    /// Execute the expand command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut loader = self.loader.loader();
        if let Some(suffix) = &self.suffix {
            if suffix.is_empty() {
                return Err(CliError::InvalidArguments(
                    "--suffix must not be empty".to_string(),
                ));
            }
            loader = loader.with_expand_suffix(suffix.clone());
        }

        let resolution = loader.resolve(&self.path)?;
        let expander = Expander::new(resolution.options.expand_suffix.clone());
        let target = self.select(&resolution.node)?;

        if self.count {
            println!("{}", expander.count(&target.to_value())?);
            return Ok(());
        }

        let variants = expander.expand(target)?;
        log::info!(
            "{} expanded into {} variant(s) with suffix '{}'",
            self.path.display(),
            variants.len(),
            expander.suffix()
        );

        let format = choose_format(self.format, None)?;
        match &self.output_dir {
            None => write_output(&variants, format, None),
            Some(dir) => {
                fs::create_dir_all(dir)?;
                for (i, variant) in variants.iter().enumerate() {
                    let file = dir.join(format!("variant-{i:04}.{}", format.extension()));
                    write_output(variant, format, Some(&file))?;
                }
                if !global.quiet {
                    eprintln!("Wrote {} variant(s) to {}", variants.len(), dir.display());
                }
                Ok(())
            }
        }
    }

    fn select<'a>(&self, node: &'a ConfigNode) -> Result<&'a ConfigNode, CliError> {
        let Some(path) = &self.at else {
            return Ok(node);
        };
        node.at(path)?.as_node().ok_or_else(|| {
            CliError::SemanticFailure(format!("value at '{path}' is not a mapping"))
        })
    }
}
