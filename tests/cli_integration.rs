//! Integration tests for the `td` binary.
//!
//! The TUI needs a terminal, so these only cover what happens before it
//! starts: argument parsing and config loading failures.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `td` with the given args in the given directory, returning (stdout, stderr, success).
fn run_td(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_td"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run td");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_help_lists_flags() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (stdout, _, success) = run_td(tmp.path(), &["--help"]);
    assert!(success);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--theme"));
    assert!(stdout.contains("--sort"));
    assert!(stdout.contains("--order"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (stdout, _, success) = run_td(tmp.path(), &["--version"]);
    assert!(success);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_config_file_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_td(tmp.path(), &["--config", "absent.toml"]);
    assert!(!success);
    assert!(stderr.starts_with("error: could not read"));
    assert!(stderr.contains("absent.toml"));
}

#[test]
fn test_malformed_default_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("tasklist.toml"), "[ui]\ntheme = \"purple\"\n").unwrap();
    let (_, stderr, success) = run_td(tmp.path(), &[]);
    assert!(!success);
    assert!(stderr.starts_with("error: could not parse"));
}

#[test]
fn test_invalid_sort_flag_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_td(tmp.path(), &["--sort", "size"]);
    assert!(!success);
    assert!(stderr.contains("unknown sort key: size"));
}
