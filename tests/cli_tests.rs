//! CLI surface integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn paceline() -> Command {
    cargo_bin_cmd!("paceline")
}

#[test]
fn test_help() {
    paceline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("paceline"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("course"))
        .stdout(predicate::str::contains("record"))
        .stdout(predicate::str::contains("music"));
}

#[test]
fn test_version() {
    paceline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paceline"));
}

#[test]
fn test_course_help_lists_subcommands() {
    paceline()
        .args(["course", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_course_list_documents_sort_values() {
    paceline()
        .args(["course", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created-desc"))
        .stdout(predicate::str::contains("created-asc"))
        .stdout(predicate::str::contains("name-asc"));
}

#[test]
fn test_config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paceline.toml");
    fs::write(
        &path,
        "[backend]\nurl = \"https://proj.backend.example/\"\n",
    )
    .unwrap();

    paceline()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("config is valid"))
        .stdout(predicate::str::contains("https://proj.backend.example/"));
}

#[test]
fn test_config_validate_rejects_bad_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paceline.toml");
    fs::write(&path, "[backend]\nurl = \"not a url\"\n").unwrap();

    paceline()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("backend.url"));
}

#[test]
fn test_unknown_subcommand_fails() {
    paceline().arg("sprint").assert().failure();
}

#[test]
fn test_course_create_requires_name() {
    paceline()
        .args(["course", "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME").or(predicate::str::contains("name")));
}
