//! Environment variable lookups for configuration.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Resolve the config file path override and the selected profile name.
//!
//! Does NOT handle:
//! - Platform default paths (see path.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - `AWS_PROFILE` takes precedence over `AWS_DEFAULT_PROFILE`.

use std::path::PathBuf;

use crate::constants::{ENV_CONFIG_FILE, ENV_DEFAULT_PROFILE, ENV_PROFILE};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Config file path from `AWS_CONFIG_FILE`, if set.
pub fn config_path_from_env() -> Option<PathBuf> {
    env_var_or_none(ENV_CONFIG_FILE).map(PathBuf::from)
}

/// Profile name requested through the environment, if any.
pub fn selected_profile_name() -> Option<String> {
    env_var_or_none(ENV_PROFILE).or_else(|| env_var_or_none(ENV_DEFAULT_PROFILE))
}
