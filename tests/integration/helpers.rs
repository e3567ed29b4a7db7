//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use mirrorgrid::grid::{initialize_grid, GridConfig};

/// A blank grid in a fresh temp directory.
///
/// Keep the `TempDir` alive for as long as the grid is used.
pub fn temp_grid(width: usize, height: usize) -> (TempDir, GridConfig) {
    let dir = TempDir::new().expect("create temp dir");
    let config = GridConfig::new(dir.path().join("term.txt"), width, height);
    initialize_grid(&config).expect("initialize grid");
    (dir, config)
}

/// Read a grid file and split it into stored rows.
pub fn rows(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read grid")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// `mirrorgrid` isolated from the user's settings and grid.
///
/// Settings are read from `<dir>/config.toml`, which tests may create;
/// the grid is `<dir>/term.txt`.
pub fn mirrorgrid(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mirrorgrid").expect("binary built");
    cmd.arg("--config")
        .arg(config_path(dir))
        .arg("--grid")
        .arg(grid_path(dir))
        .env_remove("RUST_LOG");
    cmd
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

pub fn grid_path(dir: &Path) -> PathBuf {
    dir.join("term.txt")
}
