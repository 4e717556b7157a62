//! Error types for the pathtag library.
//!
//! Lookups that simply find nothing are not errors: they come back as
//! `Ok(None)`. The variants here cover bad input and the configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathtag error.
///
/// # Examples
///
/// ```
/// use pathtag::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("tt1234567".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathtag library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required string argument was empty or blank.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        name: &'static str,
        /// The reason the argument was rejected.
        reason: String,
    },

    /// A configuration file could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be used.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`] about an empty input.
    pub(crate) fn empty(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "must not be empty".to_string(),
        }
    }

    /// Shorthand for an [`Error::InvalidArgument`] about a blank input.
    pub(crate) fn blank(name: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            reason: "must not be empty or whitespace".to_string(),
        }
    }

    /// Check if error was caused by a bad argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtag::extract_attribute;
    ///
    /// let err = extract_attribute("", "imdbid").unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
