//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Run the sortvis binary against a private config file.
///
/// Returns (stdout, stderr, exit code). The config file lives in `dir` and
/// does not need to exist.
pub fn run_sortvis(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sortvis"))
        .args(args)
        .env("SORTVIS_CONFIG", config_path(dir))
        .env("SORTVIS_LOG", "off")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute sortvis");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("sortvis").join("config.toml")
}
