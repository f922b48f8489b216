//! CLI argument parsing tests for basedirs

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command instance with the basedirs binary
fn basedirs() -> Command {
    Command::new(env!("CARGO_BIN_EXE_basedirs"))
}

#[test]
fn test_help_flag() {
    let mut cmd = basedirs();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Platform-aware base, user and project directories"))
        .stdout(predicate::str::contains("--help"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn test_version_flag() {
    let mut cmd = basedirs();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_no_args_shows_help() {
    let mut cmd = basedirs();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// Project command tests
// ============================================================================

#[test]
fn test_project_command_help() {
    let mut cmd = basedirs();
    cmd.args(["project", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("per-application directories"))
        .stdout(predicate::str::contains("-q, --qualifier"))
        .stdout(predicate::str::contains("-o, --organization"))
        .stdout(predicate::str::contains("--raw"))
        .stdout(predicate::str::contains("--data-local"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_project_requires_name() {
    let mut cmd = basedirs();
    cmd.arg("project");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn test_project_rejects_unknown_flag() {
    let mut cmd = basedirs();
    cmd.args(["project", "app", "--bogus"]);
    cmd.assert().failure().code(2);
}

#[test]
fn test_helper_timeout_requires_number() {
    let mut cmd = basedirs();
    cmd.args(["--helper-timeout-ms", "soon", "base"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Base and user command tests
// ============================================================================

#[test]
fn test_base_command_help() {
    let mut cmd = basedirs();
    cmd.args(["base", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Show base directories"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_user_command_help() {
    let mut cmd = basedirs();
    cmd.args(["user", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Show user content directories"));
}

#[test]
fn test_settings_flag_in_help() {
    let mut cmd = basedirs();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--settings <FILE>"));
}
