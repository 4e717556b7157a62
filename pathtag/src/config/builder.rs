//! Assembling a validated configuration from its sources.

use std::path::{Path, PathBuf};

use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::schema::Config;
use crate::config::validator::{self, ConfigValidator};
use crate::error::Result;

const PROGRAMMATIC_PRECEDENCE: u8 = 3;

/// Builds a [`Config`] from the user file, an explicit file and
/// programmatic overrides.
///
/// Substitution rules accumulate across sources; rules from a
/// higher-precedence source come first in the result. A rule whose `from`
/// names the same subpath as a rule from a higher-precedence source is
/// overridden and dropped.
///
/// # Examples
///
/// ```no_run
/// use pathtag::config::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_file(Path::new("/etc/pathtag.yaml"))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the user config file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also load `path`, which must exist.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Add programmatic configuration with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or if any source
    /// fails validation on its own.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            if let Some(user) = ConfigLoader::load_user_config()? {
                sources.push(user);
            }
            if let Some(ref path) = self.file {
                sources.push(ConfigLoader::load_explicit(path)?);
            }
        }

        sources.extend(self.overrides.into_iter().map(|config| ConfigSource {
            path: None,
            precedence: PROGRAMMATIC_PRECEDENCE,
            config,
        }));

        for source in &sources {
            ConfigValidator::validate(&source.config)?;
        }

        Ok(Self::merge(sources))
    }

    fn merge(mut sources: Vec<ConfigSource>) -> Config {
        // Stable sort keeps insertion order within one precedence level
        sources.sort_by_key(|s| std::cmp::Reverse(s.precedence));

        let mut result = Config::default();
        for source in sources {
            let Some(rules) = source.config.path_substitutions else {
                continue;
            };
            let merged = result.path_substitutions.get_or_insert_with(Vec::new);
            for rule in rules {
                if merged
                    .iter()
                    .any(|taken| validator::same_subpath(&taken.from, &rule.from))
                {
                    log::debug!(
                        "substitution for {} overridden by a higher-precedence source",
                        rule.from
                    );
                    continue;
                }
                merged.push(rule);
            }
        }
        result
    }
}
