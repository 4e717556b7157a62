//! Utility functions for CLI operations.

use crate::error::CliError;
use pathtag::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
///
/// Verbosity flags are consumed by the logger before dispatch.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load configuration honoring the global `--config` option.
///
/// The user config is always consulted; an explicit file must exist.
pub fn load_config(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }
    Ok(builder.build()?)
}
