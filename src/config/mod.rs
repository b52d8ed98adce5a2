//! Configuration module for Grok-Search
//!
//! Handles loading settings from a JSON file, explicit parameters and
//! environment variables.

mod settings;

pub use settings::*;

use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "GROK_SEARCH_CONFIG";

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Candidate config file locations, in lookup order
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        paths.push(PathBuf::from(path));
    }

    paths.push(PathBuf::from(CONFIG_FILE_NAME));

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("grok-search").join(CONFIG_FILE_NAME));
    }

    paths
}

/// First candidate config file that exists.
///
/// Falls back to `./config.json` so a load attempt reports a meaningful
/// path in its `ConfigNotFound` error.
pub fn resolve_path() -> PathBuf {
    let paths = candidate_paths();
    paths
        .iter()
        .find(|p| p.exists())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
