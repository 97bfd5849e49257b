//! Integration tests for the config subcommands

use std::fs;

use tempfile::TempDir;

use crate::helpers::{config_path, run_sortvis};

fn write_config(dir: &TempDir, content: &str) {
    let path = config_path(dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn path_honours_environment_variable() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), config_path(&dir).display().to_string());
}

#[test]
fn config_flag_beats_environment_variable() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("elsewhere.toml");
    let explicit = explicit.to_str().unwrap();
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "path", "--config", explicit]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), explicit);
}

#[test]
fn show_without_file_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[array]"));
    assert!(stdout.contains("size = 15"));
    assert!(stdout.contains("[timing]"));
    assert!(stdout.contains("settle_ms = 1000"));
    assert!(!config_path(&dir).exists(), "show must not create the file");
}

#[test]
fn show_merges_partial_file_with_defaults() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[timing]\nsettle_ms = 250\n");
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("settle_ms = 250"));
    assert!(stdout.contains("size = 15"));
}

#[test]
fn invalid_values_are_reported() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[array]\nsize = 500\n");
    let (_stdout, stderr, exit_code) = run_sortvis(&dir, &["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("array.size must be between 2 and 50"));
}

#[test]
fn malformed_toml_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[array\nsize = ");
    let (_stdout, stderr, exit_code) = run_sortvis(&dir, &["trace", "--array", "10,20"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to parse config"));
    assert!(stderr.contains("config.toml"));
}

#[test]
fn migrate_creates_missing_file_then_reports_up_to_date() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config file created successfully."));
    let written = fs::read_to_string(config_path(&dir)).unwrap();
    assert!(written.contains("[array]"));

    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "migrate", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config is already up to date."));
}

#[test]
fn migrate_fills_gaps_and_keeps_user_values() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "# tuned for demos\n[timing]\nsettle_ms = 250\n");
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config updated successfully."));

    let written = fs::read_to_string(config_path(&dir)).unwrap();
    assert!(written.contains("# tuned for demos"));
    assert!(written.contains("settle_ms = 250"));
    assert!(written.contains("min_settle_ms = 100"));
    assert!(written.contains("[array]"));
}

#[test]
fn migrate_without_yes_outside_a_terminal_changes_nothing() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[timing]\nsettle_ms = 250\n");
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["config", "migrate"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes made."));
    let written = fs::read_to_string(config_path(&dir)).unwrap();
    assert_eq!(written, "[timing]\nsettle_ms = 250\n");
}

#[test]
fn bad_palette_color_is_reported() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[palette]\nswap = \"purple\"\n");
    let (_stdout, stderr, exit_code) = run_sortvis(&dir, &["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid color 'purple'"));
}
