//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::path::PathSubstitution;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathtag::config::Config;
///
/// let config: Config = serde_yaml::from_str("path_substitutions:\n  - from: /a\n    to: /b\n").unwrap();
/// assert_eq!(config.path_substitutions.unwrap()[0].to, "/b");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Ordered path substitution rules; the first match wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_substitutions: Option<Vec<PathSubstitution>>,
}

impl Config {
    /// Number of configured substitution rules.
    #[must_use]
    pub fn substitution_count(&self) -> usize {
        self.path_substitutions.as_ref().map_or(0, Vec::len)
    }
}
