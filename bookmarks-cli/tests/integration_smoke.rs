//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("bookmarks").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("bookmarks").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bearer token"))
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--max-connections"))
        .stdout(predicate::str::contains("--cors-local-only"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("bookmarks").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_serve_rejects_unknown_environment() {
    let mut cmd = Command::cargo_bin("bookmarks").unwrap();
    cmd.env_remove("APP_ENV")
        .args([
            "serve",
            "--database-url",
            "postgres://localhost/bookmarks",
            "--api-token",
            "secret",
            "--env",
            "staging",
        ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown environment"));
}
