//! CLI command implementations.
//!
//! - `attr`: Read one bracketed attribute from a file name
//! - `ids`: Read the provider identifiers from a file name
//! - `relocate`: Replace a subpath in a path
//! - `substitute`: Apply the configured path substitutions
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod attr;
pub mod completions;
pub mod ids;
pub mod relocate;
pub mod substitute;
pub mod validate;

pub use attr::AttrCommand;
pub use completions::CompletionsCommand;
pub use ids::IdsCommand;
pub use relocate::RelocateCommand;
pub use substitute::SubstituteCommand;
pub use validate::ValidateCommand;
