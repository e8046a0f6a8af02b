//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database file path"));
}

#[test]
fn test_init_db_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("jotter.db");

    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.arg("init-db").arg("--database").arg(&db_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Initialized the database"));

    assert!(db_path.exists());
}

#[test]
fn test_init_db_is_rerunnable() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("jotter.db");

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("jotter").unwrap();
        cmd.arg("init-db").arg("--database").arg(&db_path);
        cmd.assert().success();
    }
}
