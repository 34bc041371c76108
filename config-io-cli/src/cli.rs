//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ConvertCommand, ExpandCommand, ResolveCommand};
use clap::{Parser, Subcommand};

/// Resolve and expand hierarchical YAML/JSON configurations.
#[derive(Parser)]
#[command(name = "config-io")]
#[command(
    version,
    about = "Resolve and expand hierarchical YAML/JSON configurations",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Merge a document with its default chain and print the result
    Resolve(ResolveCommand),

    /// Merge a document, then expand it into every variant
    Expand(ExpandCommand),

    /// Rewrite a single document in the format of the output path
    Convert(ConvertCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
