//! Command to read provider identifiers from a file name.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};

/// Output format for identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IdsFormat {
    /// One `provider<TAB>id` line per identifier found
    #[default]
    Text,
    /// A JSON object with every provider
    Json,
}

/// Show the imdb, tmdb and tvdb identifiers in a file name.
#[derive(Args)]
pub struct IdsCommand {
    /// File name or path to search
    #[arg(value_name = "SUBJECT")]
    pub subject: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = IdsFormat::Text)]
    pub format: IdsFormat,
}

impl IdsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let ids = pathtag::extract_provider_ids(&self.subject)?;

        match self.format {
            IdsFormat::Json => println!("{}", serde_json::to_string_pretty(&ids)?),
            IdsFormat::Text => {
                for (provider, id) in [("imdb", &ids.imdb), ("tmdb", &ids.tmdb), ("tvdb", &ids.tvdb)] {
                    if let Some(id) = id {
                        println!("{provider}\t{id}");
                    }
                }
            }
        }
        Ok(())
    }
}
