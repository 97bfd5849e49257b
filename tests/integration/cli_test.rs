//! Integration tests for top-level CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::config_path;

fn sortvis(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sortvis").unwrap();
    cmd.env("SORTVIS_CONFIG", config_path(dir))
        .env("SORTVIS_LOG", "off");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    sortvis(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trace"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_starts_with_package_version() {
    let dir = TempDir::new().unwrap();
    sortvis(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "sortvis {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn bash_completions_mention_binary() {
    let dir = TempDir::new().unwrap();
    sortvis(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sortvis"));
}

#[test]
fn unknown_shell_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    sortvis(&dir)
        .args(["completions", "tcsh"])
        .assert()
        .code(2);
}

#[test]
fn run_rejects_bad_array_before_touching_the_terminal() {
    let dir = TempDir::new().unwrap();
    sortvis(&dir)
        .args(["run", "--array", "1,2,3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("All values must be between 5 and 100."));
}

#[test]
fn run_rejects_out_of_range_size() {
    let dir = TempDir::new().unwrap();
    sortvis(&dir)
        .args(["run", "--size", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("array.size must be between 2 and 50"));
}

#[test]
fn log_file_receives_trace_logs() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("sortvis.log");
    sortvis(&dir)
        .env("SORTVIS_LOG", "debug")
        .args(["trace", "--array", "20,10", "--log-file"])
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    assert!(log.exists());
}
