// tests/integration_test.rs
mod common;

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn version_sync(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_version-sync"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute version-sync")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_version-sync"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("check"));
    assert!(out.contains("bump"));
    assert!(out.contains("list"));
}

#[test]
fn test_check_passes_on_consistent_project() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.2.3");

    let output = version_sync(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("version check passed: 1.2.3"));
}

#[test]
fn test_check_lists_every_mismatch() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.2.3");
    common::write(
        dir.path(),
        "crates/arbiter-server/Cargo.toml",
        "[package]\nversion = \"1.2.2\"\n",
    );
    common::write(
        dir.path(),
        "config/example-config.yaml",
        "policy:\n  version: \"policy:v1.2.2\"\n",
    );

    let output = version_sync(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("version check failed:"));
    assert!(out.contains("- crates/arbiter-server/Cargo.toml:"));
    assert!(out.contains("- config/example-config.yaml:"));
    assert_eq!(out.lines().filter(|l| l.starts_with("- ")).count(), 2);
}

#[test]
fn test_check_without_canonical_version_is_internal_error() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.2.3");
    common::write(dir.path(), "Cargo.toml", "[workspace]\nmembers = []\n");

    let output = version_sync(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to find canonical version in Cargo.toml"));
}

#[test]
fn test_check_with_missing_target_is_internal_error() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.2.3");
    std::fs::remove_file(dir.path().join("openapi/v1.yaml")).unwrap();

    let output = version_sync(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("file not found: openapi/v1.yaml"));
    assert!(!stdout(&output).contains("version check failed:"));
}

#[test]
fn test_bump_then_bump_again() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.4.0");
    common::write(
        dir.path(),
        "crates/arbiter-config/Cargo.toml",
        "[package]\nname = \"arbiter-config\"\nversion = \"1.3.9\"\n",
    );

    let first = version_sync(dir.path(), &["bump", "1.4.0"]);
    assert_eq!(first.status.code(), Some(0), "{}", stderr(&first));
    assert!(stdout(&first).contains("updated version references to 1.4.0"));
    assert!(common::read(dir.path(), "crates/arbiter-config/Cargo.toml")
        .contains("version = \"1.4.0\""));

    let check = version_sync(dir.path(), &["check"]);
    assert_eq!(check.status.code(), Some(0));

    let second = version_sync(dir.path(), &["bump", "1.4.0"]);
    assert_eq!(second.status.code(), Some(0));
    assert!(stdout(&second).contains("no changes needed for 1.4.0"));
}

#[test]
fn test_bump_invalid_version_fails() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.0.0");

    for bad in ["1.2", "v1.2.3", "1.2.3-rc1"] {
        let output = version_sync(dir.path(), &["bump", bad]);
        assert_eq!(output.status.code(), Some(1), "accepted {}", bad);
        assert!(stderr(&output).contains(&format!("invalid version: {}", bad)));
    }
    assert!(common::read(dir.path(), "Cargo.toml").contains("version = \"1.0.0\""));
}

#[test]
fn test_bump_count_mismatch_names_file_and_counts() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.0.0");
    common::write(dir.path(), "openapi/v1.yaml", "info:\n  title: Arbiter\n");

    let output = version_sync(dir.path(), &["bump", "1.0.1"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("openapi/v1.yaml: replacement count mismatch"));
    assert!(err.contains("expected 1, got 0"));
}

#[test]
fn test_bump_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.0.0");

    let output = version_sync(dir.path(), &["bump", "--dry-run", "2.0.0"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("would be updated to 2.0.0"));
    assert!(out.contains("README.ja.md"));
    assert!(common::read(dir.path(), "Cargo.toml").contains("version = \"1.0.0\""));
}

#[test]
fn test_bump_next_minor() {
    let dir = TempDir::new().unwrap();
    common::write_project(dir.path(), "1.4.7");

    let output = version_sync(dir.path(), &["bump", "--next", "minor"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("updated version references to 1.5.0"));
    assert!(common::read(dir.path(), "crates/arbiter-contracts/src/lib.rs")
        .contains("pub const API_VERSION: &str = \"1.5.0\";"));
}

#[test]
fn test_bump_requires_a_target() {
    let dir = TempDir::new().unwrap();
    let output = version_sync(dir.path(), &["bump"]);
    assert!(!output.status.success());
}

#[test]
fn test_custom_config_file() {
    let dir = TempDir::new().unwrap();
    common::write(dir.path(), "VERSION", "0.1.0\n");
    common::write(dir.path(), "chart/Chart.yaml", "name: app\nappVersion: \"0.0.9\"\n");
    common::write(
        dir.path(),
        "versionsync.toml",
        r#"
[canonical]
path = "VERSION"
pattern = '^([0-9]+\.[0-9]+\.[0-9]+)$'

[[rules]]
path = "VERSION"
pattern = '^[0-9]+\.[0-9]+\.[0-9]+$'
replacement = "{version}"

[[rules]]
path = "chart/Chart.yaml"
pattern = '^(appVersion: ")[0-9]+\.[0-9]+\.[0-9]+(")$'
replacement = "${1}{version}${2}"
"#,
    );

    let check = version_sync(dir.path(), &["check"]);
    assert_eq!(check.status.code(), Some(1));
    assert!(stdout(&check).contains("- chart/Chart.yaml:"));

    let bump = version_sync(dir.path(), &["bump", "0.2.0"]);
    assert_eq!(bump.status.code(), Some(0), "{}", stderr(&bump));
    assert_eq!(common::read(dir.path(), "VERSION"), "0.2.0\n");
    assert_eq!(
        common::read(dir.path(), "chart/Chart.yaml"),
        "name: app\nappVersion: \"0.2.0\"\n"
    );
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    common::write(dir.path(), "versionsync.toml", "[[rules]]\npath = 1\n");

    let check = version_sync(dir.path(), &["check"]);
    assert_eq!(check.status.code(), Some(2));
    assert!(stderr(&check).contains("Error loading config"));
}

#[test]
fn test_list_shows_registry() {
    let dir = TempDir::new().unwrap();
    let output = version_sync(dir.path(), &["list"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Canonical source:"));
    assert!(out.contains("openapi/v1.yaml"));
    assert!(out.contains("config/example-config.yaml"));
}
