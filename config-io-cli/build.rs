//! Build script for config-io-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("config-io")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and expand hierarchical YAML/JSON configurations")
        .long_about(
            "Load YAML/JSON configuration documents, merge them with their `default` \
             parents, and expand keys marked with an `_expand` flag into every variant",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Merge a document with its default chain and print the result")
                .long_about(
                    "Follow the `default` chain of a document and print the merged document \
                     without expanding it",
                )
                .arg(
                    Arg::new("search-path")
                        .long("search-path")
                        .value_name("DIR")
                        .help("Directory to search for the parent document (repeatable)")
                        .env("CONFIG_IO_SEARCH_PATH"),
                ),
            Command::new("expand")
                .about("Merge a document, then expand it into every variant")
                .long_about(
                    "Resolve a document and print the cartesian product of its marked keys, \
                     or write one file per variant",
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .value_name("SUFFIX")
                        .help("Marker suffix used when the document sets none")
                        .env("CONFIG_IO_EXPAND_SUFFIX"),
                ),
            Command::new("convert")
                .about("Rewrite a single document in the format of the output path")
                .long_about("Load one document without resolving it and save it as JSON or YAML"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("config-io.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
