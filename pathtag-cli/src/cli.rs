//! CLI structure and command definitions.

use crate::commands::{
    AttrCommand, CompletionsCommand, IdsCommand, RelocateCommand, SubstituteCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read attribute tags from media file names and relocate media paths.
#[derive(Parser)]
#[command(name = "pathtag")]
#[command(version, about = "Read file name attribute tags and relocate media paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file with path substitutions
    #[arg(long, value_name = "PATH", global = true, env = "PATHTAG_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Read a bracketed attribute from a file name
    Attr(AttrCommand),

    /// Show the provider identifiers in a file name
    Ids(IdsCommand),

    /// Replace a subpath within a path
    Relocate(RelocateCommand),

    /// Apply the configured path substitutions
    Substitute(SubstituteCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
