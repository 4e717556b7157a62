//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::fold;
use crate::path::{PathSubstitution, Separator};

/// Returns true if two `from` subpaths select the same directory.
///
/// Both sides are compared in their separator-terminated form with a single
/// separator style, ignoring case.
pub(crate) fn same_subpath(a: &str, b: &str) -> bool {
    fold::eq_ignore_case(
        &Separator::Slash.normalize_dir(a),
        &Separator::Slash.normalize_dir(b),
    )
}

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathtag::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref rules) = config.path_substitutions {
            Self::validate_substitutions(rules)?;
        }
        Ok(())
    }

    /// Validate substitution rules.
    ///
    /// Both sides must be non-blank, and a `from` may appear only once.
    /// Two `from` values are the same if they differ only in case,
    /// separator style or a trailing separator.
    fn validate_substitutions(rules: &[PathSubstitution]) -> Result<()> {
        for (i, rule) in rules.iter().enumerate() {
            Self::validate_subpath(&format!("path_substitutions[{i}].from"), &rule.from)?;
            Self::validate_subpath(&format!("path_substitutions[{i}].to"), &rule.to)?;

            if let Some(first) = rules[..i]
                .iter()
                .position(|earlier| same_subpath(&earlier.from, &rule.from))
            {
                return Err(Error::Validation {
                    field: format!("path_substitutions[{i}].from"),
                    message: format!("Duplicates path_substitutions[{first}].from"),
                });
            }
        }
        Ok(())
    }

    fn validate_subpath(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
