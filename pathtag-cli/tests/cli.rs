//! Tests for global CLI behavior.

mod common;

use clap::CommandFactory;
use common::TestEnv;
use pathtag_cli::Cli;
use predicates::prelude::*;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("attr"))
        .stdout(predicate::str::contains("relocate"))
        .stdout(predicate::str::contains("substitute"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "relocate", "/a/b", "--from", "/a", "--to", "/c"])
        .assert()
        .success()
        .stdout("/c/b\n")
        .stderr(predicate::str::contains("DEBUG:"));
}

#[test]
fn test_quiet_keeps_stderr_clean_on_success() {
    let env = TestEnv::new();
    env.command()
        .args(["--quiet", "relocate", "/a/b", "--from", "/a", "--to", "/c"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_log_mode_env() {
    let env = TestEnv::new();
    env.command()
        .env("PATHTAG_LOG_MODE", "verbose")
        .args(["attr", "[year=1999]", "--name", "year"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG: log level: verbose"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pathtag"));
}
