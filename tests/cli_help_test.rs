//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("mime")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "MIME type database import, manipulation and export",
        ));
}

#[test]
fn test_version() {
    Command::cargo_bin("mime")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    Command::cargo_bin("mime")
        .unwrap()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_unknown_command_prints_usage_and_fails() {
    Command::cargo_bin("mime")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_install_help() {
    Command::cargo_bin("mime")
        .unwrap()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH_OR_TYPE"));
}

#[test]
fn test_delete_help() {
    Command::cargo_bin("mime")
        .unwrap()
        .args(["delete", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MIME type to delete"));
}

#[test]
fn test_uninstall_alias_help() {
    Command::cargo_bin("mime")
        .unwrap()
        .args(["uninstall", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MIME type to delete"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("mime")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_export_help() {
    Command::cargo_bin("mime")
        .unwrap()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resource file to write"));
}
