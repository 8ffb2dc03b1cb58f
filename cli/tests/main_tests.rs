//! # fiuba-chat CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behaviour of the binary: `--help`, `--version`, and argument
//! errors that must fail before any request is made.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn test_version_flag() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    let dir = isolated_dir();
    chat_cmd(&dir).arg("serve").assert().failure();
}

#[test]
fn test_year_outside_range_is_rejected() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["chat", "--variant", "guided", "--name", "Ana", "--year", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year must be one of 1-5"));
}

#[test]
fn test_invalid_endpoint_is_a_config_error() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["ask", "--endpoint", "not a url", "hola"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"));
}
