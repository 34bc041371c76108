//! Main entry point for the config-io CLI.
//!
//! Commands:
//! - `resolve`: Merge a document with its default chain
//! - `expand`: Merge, then expand into every variant
//! - `convert`: Rewrite a single document in another format
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let logger = config_io::init_logger(global.verbose, global.quiet);
    if let Err(e) = logger.install() {
        eprintln!("WARN: logging unavailable: {e}");
    }

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::Convert(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
