//! Error types for configuration loading and resolution.
//!
//! Responsibilities:
//! - Define error variants for config file read and parse failures.
//! - Define error variants for transitive source profile resolution.
//!
//! Does NOT handle:
//! - Not-found outcomes of single lookups; those are `Option::None`.
//! - Credential storage errors (see `credentials`).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, line numbers, names).
//! - Parse line numbers are 1-based.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}, line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Profile '{0}' not found in config file")]
    ProfileNotFound(String),

    #[error("Profile '{profile}' references missing source profile '{source_profile}'")]
    SourceProfileMissing {
        profile: String,
        source_profile: String,
    },

    #[error("Source profile cycle detected: {}", .chain.join(" -> "))]
    SourceProfileCycle { chain: Vec<String> },
}

impl ConfigError {
    /// Line number for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
