//! Named credential profile configuration.
//!
//! This crate parses INI-style profile files in the AWS CLI multi-profile
//! format and exposes the profiles through an immutable, queryable `Config`.
//! Credential storage for those profiles is abstracted behind `CredentialStore`.

pub mod constants;
pub mod credentials;
mod loader;
pub mod types;

pub use credentials::{CredentialStore, CredentialStoreError, KeyringStore, MemoryStore};
pub use loader::{
    ConfigError, ConfigLoader, Entry, ParseError, Section, config_path_from_env,
    default_config_path, env_var_or_none, load_config, load_config_from_env,
    normalize_section_name, parse_sections, selected_profile_name,
};
pub use types::{Config, Profile};
