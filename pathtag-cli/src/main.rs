//! Main entry point for the pathtag CLI.
//!
//! - `attr`: Read a bracketed attribute from a file name
//! - `ids`: Show provider identifiers
//! - `relocate`: Replace a subpath within a path
//! - `substitute`: Apply configured path substitutions

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let level = pathtag::init_logger(cli.verbose, cli.quiet);
    log::debug!("log level: {level}");

    let global = GlobalOptions { config: cli.config };

    let result = match cli.command {
        cli::Command::Attr(cmd) => cmd.execute(&global),
        cli::Command::Ids(cmd) => cmd.execute(&global),
        cli::Command::Relocate(cmd) => cmd.execute(&global),
        cli::Command::Substitute(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
