//! Centralized constants for the profile configuration crate.
//!
//! Section names, recognized keys and environment variable names live here so
//! the parser, loader and tests agree on the exact spelling.

// =============================================================================
// Section Headers
// =============================================================================

/// Name of the implicit profile used when no profile is requested.
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Prefix that marks a named profile section header (`[profile <name>]`).
pub const PROFILE_SECTION_PREFIX: &str = "profile ";

// =============================================================================
// Recognized Keys
// =============================================================================

pub const KEY_REGION: &str = "region";
pub const KEY_OUTPUT: &str = "output";
pub const KEY_ROLE_ARN: &str = "role_arn";
pub const KEY_MFA_SERIAL: &str = "mfa_serial";
pub const KEY_SOURCE_PROFILE: &str = "source_profile";

// =============================================================================
// Environment
// =============================================================================

/// Overrides the location of the config file.
pub const ENV_CONFIG_FILE: &str = "AWS_CONFIG_FILE";

/// Selects the active profile.
pub const ENV_PROFILE: &str = "AWS_PROFILE";

/// Legacy spelling of [`ENV_PROFILE`], consulted when it is unset.
pub const ENV_DEFAULT_PROFILE: &str = "AWS_DEFAULT_PROFILE";

/// Config file location relative to the user's home directory.
pub const DEFAULT_CONFIG_DIR: &str = ".aws";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config";

// =============================================================================
// Credential Storage
// =============================================================================

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "vault";
