//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user data directory under the home directory.
pub const USER_DIR_NAME: &str = ".pathtag";

/// Name of the configuration file inside the user data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are tried after higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file, if the source is a file.
    pub path: Option<PathBuf>,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathtag::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config().unwrap() {
///     println!("{} rule(s)", source.config.substitution_count());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or if
    /// the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<ConfigSource>> {
        let config_path = Self::user_config_path()?;
        if !config_path.exists() {
            log::debug!("no user config at {}", config_path.display());
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: Some(config_path),
            precedence: 1,
            config,
        }))
    }

    /// Load an explicitly requested configuration file, which must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        let config = Self::load_file(path)?;
        Ok(ConfigSource {
            path: Some(path.to_path_buf()),
            precedence: 2,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        log::debug!("loading configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Get the user config file path (`~/.pathtag/config.yaml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(USER_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_unknown_field() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "path_subs: []\n").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("path_subs"));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            "path_substitutions:\n  - from: /mnt/old\n    to: /mnt/new\n",
        )
        .unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.substitution_count(), 1);
    }

    #[test]
    fn test_load_explicit_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pathtag.yaml");
        fs::write(&config_path, "{}\n").unwrap();

        let source = ConfigLoader::load_explicit(&config_path).unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(source.path.as_deref(), Some(config_path.as_path()));
    }

    #[test]
    fn test_user_config_path_layout() {
        if let Ok(path) = ConfigLoader::user_config_path() {
            assert!(path.ends_with(Path::new(USER_DIR_NAME).join(CONFIG_FILE_NAME)));
        }
    }
}
