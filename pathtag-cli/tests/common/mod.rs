//! Common test utilities for CLI integration tests.
//!
//! Every command runs with HOME pointed at a temporary directory so the
//! developer's own `~/.pathtag/config.yaml` never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as HOME
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder with HOME isolated and no inherited config.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathtag").expect("Failed to find pathtag binary");
        cmd.env("HOME", &self.home)
            .env_remove("PATHTAG_CONFIG")
            .env_remove("PATHTAG_LOG_MODE");
        cmd
    }

    /// Write `contents` as the user config (`~/.pathtag/config.yaml`).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".pathtag");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Write a config file with an arbitrary name under the temp directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.home
    }
}
