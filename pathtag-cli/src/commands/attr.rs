//! Command to read a bracketed attribute from a file name.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Read the value of a `[name=value]` tag.
#[derive(Args)]
pub struct AttrCommand {
    /// File name or path to search
    #[arg(value_name = "SUBJECT")]
    pub subject: String,

    /// Attribute name (case-insensitive)
    #[arg(long, short = 'n', value_name = "NAME")]
    pub name: String,
}

impl AttrCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match pathtag::extract_attribute(&self.subject, &self.name)? {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "No '{}' attribute found",
                self.name
            ))),
        }
    }
}
