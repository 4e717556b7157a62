//! Ordered path substitution rules.
//!
//! A substitution maps a library root as it is recorded (`from`) to where it
//! can be reached now (`to`), for example after a disk was remounted or when
//! a network share is mapped to a drive letter on another host.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::relocate::try_replace_subpath;

/// A single `from` → `to` relocation rule.
///
/// # Examples
///
/// ```
/// use pathtag::path::PathSubstitution;
///
/// let rule = PathSubstitution::new("/mnt/old", "/mnt/new");
/// assert_eq!(rule.try_apply("/mnt/old/a.mkv").unwrap().as_deref(), Some("/mnt/new/a.mkv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSubstitution {
    /// The subpath as it appears in stored paths.
    pub from: String,
    /// The subpath to use instead.
    pub to: String,
}

impl PathSubstitution {
    /// Creates a new rule.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Applies this rule to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` or either side of the rule is blank.
    pub fn try_apply(&self, path: &str) -> Result<Option<String>> {
        try_replace_subpath(path, &self.from, &self.to)
    }
}

/// An ordered set of substitution rules where the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSubstitutions {
    rules: Vec<PathSubstitution>,
}

impl PathSubstitutions {
    /// Creates a rule set, keeping the given order.
    #[must_use]
    pub fn new(rules: Vec<PathSubstitution>) -> Self {
        Self { rules }
    }

    /// Creates a rule set from the `path_substitutions` of a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.path_substitutions.clone().unwrap_or_default())
    }

    /// The rules in the order they are tried.
    #[must_use]
    pub fn rules(&self) -> &[PathSubstitution] {
        &self.rules
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies the first matching rule, or returns `None` if no rule matched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `path` is blank or a rule tried
    /// before the first match is blank.
    pub fn try_apply(&self, path: &str) -> Result<Option<String>> {
        if path.trim().is_empty() {
            return Err(Error::blank("path"));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(relocated) = rule.try_apply(path)? {
                log::debug!("path substitution #{index} ({} -> {}) matched", rule.from, rule.to);
                return Ok(Some(relocated));
            }
        }
        Ok(None)
    }

    /// Applies the first matching rule, returning `path` unchanged if none
    /// matched.
    ///
    /// # Errors
    ///
    /// See [`PathSubstitutions::try_apply`].
    pub fn apply(&self, path: &str) -> Result<String> {
        Ok(self.try_apply(path)?.unwrap_or_else(|| path.to_string()))
    }
}

impl From<Vec<PathSubstitution>> for PathSubstitutions {
    fn from(rules: Vec<PathSubstitution>) -> Self {
        Self::new(rules)
    }
}
