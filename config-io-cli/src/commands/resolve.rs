//! Resolve command implementation.
//!
//! Merges a document with its default chain and prints (or writes) the
//! merged node. Expansion is never applied here, even if the document
//! asks for it; use `expand` for that.

use crate::error::CliError;
use crate::utils::{choose_format, write_output, GlobalOptions, LoaderArgs, OutputFormat};
use clap::Args;
use std::path::PathBuf;

/// Merge a document with its default chain.
#[derive(Args)]
pub struct ResolveCommand {
    /// Document to resolve
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub loader: LoaderArgs,

    /// Output format (defaults to the output file's extension, or YAML)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Write the merged document to FILE instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolution = self.loader.loader().resolve(&self.path)?;

        for (depth, document) in resolution.chain.iter().enumerate() {
            log::info!("chain[{depth}]: {}", document.display());
        }

        let format = choose_format(self.format, self.output.as_deref())?;
        write_output(&resolution.node, format, self.output.as_deref())?;

        if let Some(output) = &self.output {
            if !global.quiet {
                eprintln!("Wrote {}", output.display());
            }
        }
        Ok(())
    }
}
