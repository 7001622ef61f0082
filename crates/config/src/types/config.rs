//! The resolved, queryable profile configuration.
//!
//! Responsibilities:
//! - Own the mapping from normalized profile name to `Profile`.
//! - Answer exact-name, default, and one-hop source profile lookups.
//! - Walk the full source profile chain with cycle detection.
//!
//! Does NOT handle:
//! - Reading or parsing config files (see `loader`).
//! - Name normalization; names are normalized once, at load time.
//!
//! Invariants:
//! - A `Config` is immutable once built; there is no mutation API.
//! - Names are compared byte-for-byte. No case folding, no fuzzy matching.
//! - `source_profile` references are resolved lazily and may dangle.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_PROFILE_NAME;
use crate::loader::ConfigError;
use crate::types::Profile;

/// Profiles loaded from a single config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    path: Option<PathBuf>,
    profiles: HashMap<String, Profile>,
}

impl Config {
    /// Build a config from already-normalized profiles.
    ///
    /// A later profile with the same name replaces an earlier one.
    pub fn from_profiles<I>(path: Option<PathBuf>, profiles: I) -> Self
    where
        I: IntoIterator<Item = Profile>,
    {
        let profiles = profiles
            .into_iter()
            .map(|profile| (profile.name.clone(), profile))
            .collect();
        Self { path, profiles }
    }

    /// Path the config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// All profile names, sorted.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Borrowing form of [`Config::profile`].
    pub fn profile_ref(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Look up a profile by its exact normalized name.
    pub fn profile(&self, name: &str) -> Option<Profile> {
        self.profile_ref(name).cloned()
    }

    /// The profile declared by the `[default]` section.
    pub fn default(&self) -> Option<Profile> {
        self.profile(DEFAULT_PROFILE_NAME)
    }

    /// Look up `name` when given, otherwise fall back to the default profile.
    pub fn profile_or_default(&self, name: Option<&str>) -> Option<Profile> {
        match name {
            Some(name) => self.profile(name),
            None => self.default(),
        }
    }

    /// Resolve the profile that `name` sources its credentials from.
    ///
    /// Follows exactly one hop. Returns `None` when `name` is absent, declares
    /// no source profile, or references a profile that does not exist.
    pub fn source_profile(&self, name: &str) -> Option<Profile> {
        let source = self.profile_ref(name)?.source_profile()?;
        self.profile(source)
    }

    /// Resolve the full chain starting at `name`.
    ///
    /// The first element is the profile itself, each following element is the
    /// source profile of the one before it, and the last element declares no
    /// source profile.
    pub fn source_chain(&self, name: &str) -> Result<Vec<Profile>, ConfigError> {
        let mut current = self
            .profile_ref(name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        let mut visited = HashSet::new();
        let mut chain = Vec::new();

        loop {
            visited.insert(current.name.as_str());
            chain.push(current.clone());

            let Some(source) = current.source_profile() else {
                return Ok(chain);
            };

            if visited.contains(source) {
                let mut names: Vec<String> = chain.iter().map(|p| p.name.clone()).collect();
                names.push(source.to_string());
                tracing::debug!(chain = %names.join(" -> "), "Source profile cycle detected");
                return Err(ConfigError::SourceProfileCycle { chain: names });
            }

            current = match self.profile_ref(source) {
                Some(next) => next,
                None => {
                    tracing::debug!(
                        profile = %current.name,
                        source_profile = %source,
                        "Source profile reference does not resolve"
                    );
                    return Err(ConfigError::SourceProfileMissing {
                        profile: current.name.clone(),
                        source_profile: source.to_string(),
                    });
                }
            };
        }
    }
}
