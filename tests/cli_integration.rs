//! CLI integration tests for Anvil.
//!
//! These tests exercise option parsing and upfront validation. They stop
//! short of a real LLVM build, which requires cmake, ninja, and an LLVM
//! checkout.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the anvil binary command.
fn anvil() -> Command {
    Command::cargo_bin("anvil").unwrap()
}

#[test]
fn test_help_lists_options() {
    anvil()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source-dir"))
        .stdout(predicate::str::contains("--build-type"))
        .stdout(predicate::str::contains("--enable-runtimes"));
}

#[test]
fn test_source_dir_is_required() {
    anvil()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--source-dir"));
}

#[test]
fn test_missing_source_dir_aborts_before_any_invocation() {
    let tmp = TempDir::new().unwrap();

    anvil()
        .args(["--source-dir", "no/such/llvm"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"))
        .stderr(predicate::str::contains("does not exist"));

    // Validation failed before configure: no build directory was created.
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_zero_jobs_rejected() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("llvm");
    std::fs::create_dir(&source).unwrap();

    anvil()
        .args(["--source-dir"])
        .arg(&source)
        .args(["--jobs", "0"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--jobs must be at least 1"));
}

#[test]
fn test_invalid_build_type_rejected() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("llvm");
    std::fs::create_dir(&source).unwrap();

    anvil()
        .args(["--source-dir"])
        .arg(&source)
        .args(["--build-type", "Fastest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
