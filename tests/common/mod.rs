//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use dash_refresh::ui::auto_refresh::{AutoRefreshState, AutoRefreshStatus};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn state(status: AutoRefreshStatus, interval: f64) -> AutoRefreshState {
    AutoRefreshState { status, interval }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
