#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathtag
//!
//! Small string utilities for media libraries: reading `[name=value]`
//! attribute tags out of file names, and relocating paths whose library
//! root has moved.
//!
//! Everything here is pure string processing. Nothing touches the file
//! system except the optional configuration loader.
//!
//! ## Core API
//!
//! - [`extract_attribute`] and [`extract_provider_ids`]: bracketed tags
//! - [`try_replace_subpath`] and [`PathSubstitutions`]: path relocation
//! - [`Error`] and [`Result`]: error handling types
//! - [`init_logger`] and [`LogLevel`]: stderr logging for binaries
//!
//! ## Examples
//!
//! ```
//! use pathtag::{extract_attribute, try_replace_subpath};
//!
//! let id = extract_attribute("Movie Title (2010) [imdbid=tt1234567].mkv", "imdbid").unwrap();
//! assert_eq!(id.as_deref(), Some("tt1234567"));
//!
//! let moved = try_replace_subpath("/media/shows/X/ep1.mkv", "/media/shows", "/data/tv").unwrap();
//! assert_eq!(moved.as_deref(), Some("/data/tv/X/ep1.mkv"));
//! ```

pub mod attribute;
pub mod config;
pub mod error;
mod fold;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use attribute::{extract_attribute, extract_provider_ids, ProviderIds};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{try_replace_subpath, PathSubstitution, PathSubstitutions, Separator};
