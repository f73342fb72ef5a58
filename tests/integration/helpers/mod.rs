//! Helpers for running the lisible binary

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const EXAMPLE: &str = "Cependant, il est impératif de procéder à une analyse approfondie.";

/// Path to a file under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Isolated home directory, so no user config leaks into a test.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("Failed to create temp home")
}

/// Home whose default config pins the fixture frequencies over the model,
/// so level assertions on the fixture texts stay stable.
pub fn pinned_home() -> TempDir {
    let home = temp_home();
    let dir = home.path().join(".config").join("lisible");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    std::fs::write(
        dir.join("config.toml"),
        format!(
            "[lexicon]\nfrequency_file = {:?}\n",
            fixture("frequencies.tsv").display().to_string()
        ),
    )
    .expect("Failed to write pinned config");
    home
}

/// The lisible binary running against `home`.
pub fn lisible(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lisible").expect("lisible binary is built");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("LISIBLE_LOG");
    cmd
}

/// Parse stdout as one JSON document.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
