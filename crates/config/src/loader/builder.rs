//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that locates and reads the config file.
//! - Turn parsed sections into profiles and build the final `Config`.
//!
//! Does NOT handle:
//! - Line-level parsing (delegated to parser.rs).
//! - Environment variable lookups (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - A path set with `with_config_path` beats `AWS_CONFIG_FILE`, which beats `~/.aws/config`.
//! - An explicitly configured path must exist; a missing environment/default file yields an empty Config.
//! - Loading either fully succeeds or returns an error; there is no partial Config.
//! - No file handle is held after `load` returns.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::env::config_path_from_env;
use super::error::ConfigError;
use super::parser::{Section, parse_sections};
use super::path::default_config_path;
use crate::types::{Config, Profile};

/// Loads a `Config` from an INI-style profile file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that reads from the environment/default location.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Read from this path instead of the environment/default location.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Resolve the path this loader would read from.
    pub fn resolve_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.config_path {
            return Ok(path.clone());
        }
        if let Some(path) = config_path_from_env() {
            return Ok(path);
        }
        default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))
    }

    /// Read and parse the config file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileRead` if the file cannot be opened or read.
    /// - `ConfigError::Parse` if the file is structurally malformed.
    /// - `ConfigError::ConfigDirUnavailable` if no path is configured and the
    ///   home directory cannot be determined.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let path = self.resolve_path()?;

        if self.config_path.is_none() && !path.exists() {
            tracing::debug!(path = %path.display(), "Config file does not exist, using empty config");
            return Ok(Config::from_profiles(None, Vec::new()));
        }

        load_from_file(&path)
    }
}

/// Load the config file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    ConfigLoader::new()
        .with_config_path(path.as_ref().to_path_buf())
        .load()
}

/// Load the config file named by `AWS_CONFIG_FILE`, or `~/.aws/config`.
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    ConfigLoader::new().load()
}

fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!(path = %path.display(), "Loading config file");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let sections = parse_sections(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        line: e.line,
        message: e.message,
    })?;

    let config = build_config(path, sections);
    tracing::debug!(
        path = %path.display(),
        profiles = config.len(),
        "Loaded config file"
    );
    Ok(config)
}

fn build_config(path: &Path, sections: Vec<Section>) -> Config {
    let mut seen = HashSet::new();
    let mut profiles: Vec<Profile> = Vec::with_capacity(sections.len());

    for section in sections {
        let name = section.profile_name();
        if !seen.insert(name.to_string()) {
            tracing::debug!(
                profile = %name,
                line = section.line,
                "Section redeclares profile, replacing earlier definition"
            );
        }

        let mut profile = Profile::new(name);
        for entry in &section.entries {
            if !profile.apply(&entry.key, &entry.value) {
                tracing::trace!(
                    profile = %profile.name,
                    key = %entry.key,
                    line = entry.line,
                    "Ignoring unrecognized key"
                );
            }
        }
        profiles.push(profile);
    }

    // Later sections win; from_profiles keeps the last profile per name.
    Config::from_profiles(Some(path.to_path_buf()), profiles)
}
