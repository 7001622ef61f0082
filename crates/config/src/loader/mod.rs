//! Configuration loader for INI-style profile files.
//!
//! Responsibilities:
//! - Locate the config file (explicit path, `AWS_CONFIG_FILE`, or `~/.aws/config`).
//! - Parse section / `key=value` syntax into profiles.
//! - Provide a builder-pattern `ConfigLoader` and `load_config` convenience functions.
//!
//! Does NOT handle:
//! - Querying loaded profiles (see `types::Config`).
//! - Writing the config file back to disk.
//!
//! Invariants / Assumptions:
//! - Profile names are normalized here, once, so lookups stay exact.
//! - Semantic issues (duplicate names, dangling source profiles, empty files) are not load errors.

mod builder;
mod env;
mod error;
mod parser;
mod path;

pub use builder::{ConfigLoader, load_config, load_config_from_env};
pub use env::{config_path_from_env, env_var_or_none, selected_profile_name};
pub use error::ConfigError;
pub use parser::{Entry, ParseError, Section, normalize_section_name, parse_sections};
pub use path::default_config_path;

#[cfg(test)]
mod tests;
