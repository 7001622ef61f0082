//! Path helpers for the config file location.
//!
//! Responsibilities:
//! - Determine the platform default config file path (`~/.aws/config`).
//! - Use `directories` crate for home directory discovery.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Environment overrides (see env.rs).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE_NAME};

/// Returns the default path to the config file.
///
/// - Linux/macOS: `~/.aws/config`
/// - Windows: `%USERPROFILE%\.aws\config`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let base_dirs =
        directories::BaseDirs::new().context("Failed to determine home directory")?;

    Ok(base_dirs
        .home_dir()
        .join(DEFAULT_CONFIG_DIR)
        .join(DEFAULT_CONFIG_FILE_NAME))
}
