//! Convert command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;

/// Rewrite a single document in the format implied by OUTPUT's extension.
///
/// The input is loaded as-is: its `default` chain is not followed and
/// nothing is expanded.
#[derive(Args)]
pub struct ConvertCommand {
    /// Document to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination; `.json`, `.yaml` or `.yml`
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl ConvertCommand {
    /// Execute the convert command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let node = config_io::load(&self.input)?;
        node.dump_to_file(&self.output)?;

        if !global.quiet {
            eprintln!(
                "Converted {} to {}",
                self.input.display(),
                self.output.display()
            );
        }
        Ok(())
    }
}
