//! Command to apply the configured path substitutions.

use crate::error::CliError;
use crate::utils::{load_config, GlobalOptions};
use clap::Args;
use pathtag::PathSubstitutions;

/// Apply the configured path substitutions to PATH.
///
/// Prints the rewritten path, or PATH itself when no rule matches.
#[derive(Args)]
pub struct SubstituteCommand {
    /// Path to rewrite
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Fail instead of printing PATH unchanged when no rule matches
    #[arg(long)]
    pub strict: bool,
}

impl SubstituteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(global)?;
        let rules = PathSubstitutions::from_config(&config);
        log::debug!("{} path substitution rule(s) loaded", rules.rules().len());

        match rules.try_apply(&self.path)? {
            Some(relocated) => println!("{relocated}"),
            None if self.strict => {
                return Err(CliError::SemanticFailure(format!(
                    "No path substitution matches '{}'",
                    self.path
                )));
            }
            None => println!("{}", self.path),
        }
        Ok(())
    }
}
