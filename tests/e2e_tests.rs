//! End-to-end tests for the gradver CLI
//!
//! These tests verify:
//! - Help and error paths of the binary
//! - Offline behavior where no registry lookup is needed
//! - JSON output schema
//!
//! Scenarios that would need Maven Central stay out of here so the suite
//! runs without network access.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gradver() -> Command {
    Command::cargo_bin("gradver").expect("binary should build")
}

/// Create a project whose only dependency uses an undefined version
/// variable. The check skips it before any network lookup.
fn offline_project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(
        temp_dir.path().join("build.gradle"),
        "dependencies {\n    implementation \"org.example:lib:$undefinedVersion\"\n}\n",
    )
    .unwrap();
    temp_dir
}

#[test]
fn test_help() {
    gradver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gradle"))
        .stdout(predicate::str::contains("--exclude"))
        .stdout(predicate::str::contains("--pre"));
}

#[test]
fn test_version() {
    gradver()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_path_is_not_a_directory() {
    gradver()
        .arg("/nonexistent/gradle/project")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid project path"));
}

#[test]
fn test_no_build_files_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    gradver()
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Gradle build file found"));
}

#[test]
fn test_invalid_age_value() {
    gradver()
        .args(["--age", "10x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn test_unresolved_version_is_skipped_offline() {
    let project = offline_project();
    gradver()
        .arg(project.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skipped"));
}

#[test]
fn test_json_output_schema() {
    let project = offline_project();
    let output = gradver()
        .arg(project.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["summary"]["dependencies"], 1);
    assert_eq!(json["summary"]["skipped"], 1);
    assert_eq!(json["summary"]["updates"], 0);
    assert!(json["manifests"].is_array());
    // No lookup happened, so the errors key is omitted entirely
    assert!(json.get("errors").is_none());
}

#[test]
fn test_only_filter_skips_everything_offline() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("build.gradle"),
        "dependencies {\n    implementation 'org.agrona:agrona:1.21.1'\n}\n",
    )
    .unwrap();

    // --only names a different artifact, so nothing is ever fetched
    gradver()
        .arg(temp_dir.path())
        .args(["--only", "fastutil", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skipped\": 1"));
}
