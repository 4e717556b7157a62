//! Build script for pathtag-cli.
//!
//! Generates the `pathtag.1` man page into OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! tree is restated here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pathtag")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read file name attribute tags and relocate media paths")
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
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file with path substitutions")
                .value_name("PATH")
                .global(true)
                .env("PATHTAG_CONFIG"),
        )
        .subcommands(vec![
            Command::new("attr")
                .about("Read a bracketed attribute from a file name")
                .long_about("Print the value of a [name=value] tag; bare IMDb ids are recognized for imdbid"),
            Command::new("ids")
                .about("Show the provider identifiers in a file name")
                .long_about("Print the imdbid, tmdbid and tvdbid tags found in a file name"),
            Command::new("relocate")
                .about("Replace a subpath within a path")
                .long_about("Replace a directory prefix, normalizing separators to the replacement's style"),
            Command::new("substitute")
                .about("Apply the configured path substitutions")
                .long_about("Rewrite a path with the first matching configured substitution rule"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathtag configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathtag.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
