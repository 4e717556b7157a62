//! Configuration for pathtag.
//!
//! Configuration is YAML and currently carries the ordered list of path
//! substitution rules:
//!
//! ```yaml
//! path_substitutions:
//!   - from: /mnt/old-disk/media
//!     to: /mnt/media
//!   - from: '\\nas\media'
//!     to: 'M:\media'
//! ```
//!
//! # Sources
//!
//! Rules are collected from several sources. Because the first matching rule
//! wins, rules from higher-precedence sources are tried first:
//!
//! 1. Programmatic configuration (via `ConfigBuilder::with_config`)
//! 2. An explicit file (`--config` / `PATHTAG_CONFIG`)
//! 3. The user config (`~/.pathtag/config.yaml`)
//!
//! A rule whose `from` names the same subpath as one from a higher-precedence
//! source (ignoring case and separator style) is overridden. Within a single
//! source a repeated `from` is a validation error.
//!
//! # Examples
//!
//! ```
//! use pathtag::config::{Config, ConfigBuilder};
//! use pathtag::path::PathSubstitution;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .with_config(Config {
//!         path_substitutions: Some(vec![PathSubstitution::new("/old", "/new")]),
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.path_substitutions.unwrap().len(), 1);
//! ```

pub mod builder;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::Config;
pub use validator::ConfigValidator;
