//! # Configuration loader
//!
//! Reads the TOML file into [`AppConfig`]. Missing sections and keys take
//! their defaults from the DTO itself; nothing is validated here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cs_core::config::AppConfig;

const APP_DIR: &str = "cropsure";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/cropsure/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid config.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Like [`load_config`], but an absent file yields the defaults.
///
/// A file that exists and fails to parse is still an error.
pub fn load_config_or_default(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) if path.exists() => load_config(path),
        Some(path) => {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Ok(AppConfig::default())
        }
        None => Ok(AppConfig::default()),
    }
}
