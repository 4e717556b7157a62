//! Library exports for pathtag-cli.
//!
//! The CLI structure is exported so integration tests and tooling can build
//! the command tree without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
