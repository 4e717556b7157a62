//! Command to replace a subpath within a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Replace the directory `--from` with `--to` inside PATH.
///
/// The output uses the separator style of `--to`.
#[derive(Args)]
pub struct RelocateCommand {
    /// Path to rewrite
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Subpath to replace
    #[arg(long, value_name = "SUBPATH")]
    pub from: String,

    /// Replacement subpath
    #[arg(long, value_name = "SUBPATH")]
    pub to: String,
}

impl RelocateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match pathtag::try_replace_subpath(&self.path, &self.from, &self.to)? {
            Some(relocated) => {
                println!("{relocated}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "'{}' does not occur in '{}'",
                self.from, self.path
            ))),
        }
    }
}
