//! CLI Integration Tests
//!
//! These tests run the `birthday` binary end-to-end against config files in
//! temporary directories.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("birthday").expect("Failed to find birthday binary")
}

fn config_in(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("page.json")
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = config_in(&dir);

    cli_cmd()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"autoplay\": true"));
    assert!(raw.contains("/songs.mp3"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = config_in(&dir);
    std::fs::write(&path, "{}").unwrap();

    cli_cmd()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli_cmd()
        .args(["config", "init", "--force", "--path"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_config_show_merges_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = config_in(&dir);
    std::fs::write(&path, r#"{ "content": { "recipient": "Sunshine!" } }"#).unwrap();

    cli_cmd()
        .args(["config", "show", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunshine!"))
        .stdout(predicate::str::contains("\"threshold\": 0.5"));
}

#[test]
fn test_config_check_accepts_defaults() {
    let dir = TempDir::new().unwrap();
    let path = config_in(&dir);

    cli_cmd()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success();

    cli_cmd()
        .args(["config", "check", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"))
        .stdout(predicate::str::contains("Memories: 9"));
}

#[test]
fn test_config_check_rejects_bad_threshold() {
    let dir = TempDir::new().unwrap();
    let path = config_in(&dir);
    std::fs::write(&path, r#"{ "navigation": { "threshold": 1.5 } }"#).unwrap();

    cli_cmd()
        .args(["config", "check", "--path"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn test_config_check_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["config", "check", "--path"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure();
}

// ============================================================================
// Content Command Tests
// ============================================================================

#[test]
fn test_content_prints_page() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["content", "--path"])
        .arg(config_in(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Happy Birthday, Pretty!"))
        .stdout(predicate::str::contains("March 28, 2004 (Sunday)"))
        .stdout(predicate::str::contains("Memories (9):"))
        .stdout(predicate::str::contains("Adventure:"));
}

#[test]
fn test_content_json() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["content", "--json", "--path"])
        .arg(config_in(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recipient\": \"Pretty!\""));
}

// ============================================================================
// Tour Command Tests
// ============================================================================

#[test]
fn test_tour_visits_every_section() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["tour", "--path"])
        .arg(config_in(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("start: greeting"))
        .stdout(predicate::str::contains("settled: gallery"))
        .stdout(predicate::str::contains("settled: message"))
        .stdout(predicate::str::contains("settled: wishes"))
        .stdout(predicate::str::ends_with("settled: greeting\n"));
}

#[test]
fn test_tour_single_target() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["tour", "--to", "Message", "--viewport", "700", "--path"])
        .arg(config_in(&dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Viewport 700px"))
        .stdout(predicate::str::contains("go to message"))
        .stdout(predicate::str::contains("settled: message"))
        .stdout(predicate::str::contains("settled: gallery").not());
}

#[test]
fn test_tour_rejects_unknown_section() {
    cli_cmd()
        .args(["tour", "--to", "footer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown section"));
}

#[test]
fn test_tour_rejects_zero_viewport() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["tour", "--viewport", "0", "--path"])
        .arg(config_in(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("viewport must be positive"));
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn test_log_dir_receives_jsonl() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");

    cli_cmd()
        .args(["-vv", "tour", "--to", "wishes", "--log-dir"])
        .arg(&logs)
        .arg("--path")
        .arg(config_in(&dir))
        .assert()
        .success();

    let raw_dir = logs.join("raw");
    let files: Vec<_> = std::fs::read_dir(&raw_dir).unwrap().collect();
    assert_eq!(files.len(), 1);
}
