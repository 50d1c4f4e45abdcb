//! Integration tests for the `path` and `completions` commands.

mod common;

use common::{env_path, envboot_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_path_prints_env_file_and_creates_directory_only() {
    let temp_dir = TempDir::new().unwrap();
    let expected = env_path(temp_dir.path(), "myapp");

    envboot_cmd(temp_dir.path())
        .args(["-p", "myapp", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));

    assert!(temp_dir.path().join("myapp").is_dir());
    assert!(!expected.exists());
}

#[test]
fn test_path_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();

    let first = envboot_cmd(temp_dir.path())
        .args(["-p", "myapp", "path"])
        .output()
        .unwrap();
    let second = envboot_cmd(temp_dir.path())
        .args(["-p", "myapp", "path"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_path_rejects_traversal_in_project_name() {
    let temp_dir = TempDir::new().unwrap();

    envboot_cmd(temp_dir.path())
        .args(["-p", "../escape", "path"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_completions_bash_outputs_non_empty() {
    let temp_dir = TempDir::new().unwrap();

    envboot_cmd(temp_dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
