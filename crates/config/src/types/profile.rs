//! Profile type for named credential configuration.
//!
//! Responsibilities:
//! - Define `Profile`, the value parsed from one config file section.
//! - Apply recognized `key=value` pairs to the matching profile field.
//!
//! Does NOT handle:
//! - Section header normalization (see `loader::parser`).
//! - Lookup or source profile resolution (see `types::config`).
//!
//! Invariants:
//! - Every field except `name` is optional; an absent key or empty value leaves it `None`.
//! - Equality compares every field, `output` included.
//! - Unrecognized keys never fail; they are reported back to the caller.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PROFILE_NAME, KEY_MFA_SERIAL, KEY_OUTPUT, KEY_REGION, KEY_ROLE_ARN,
    KEY_SOURCE_PROFILE,
};

/// A named bundle of credential-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Normalized profile name (`default`, or `<name>` from `[profile <name>]`).
    pub name: String,
    /// Region the profile operates in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Preferred output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Role to assume. Opaque to this crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Multi-factor device serial required to assume `role_arn`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_serial: Option<String>,
    /// Name of the profile holding the base credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_profile: Option<String>,
}

impl Profile {
    /// Create an empty profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn mfa_serial(&self) -> Option<&str> {
        self.mfa_serial.as_deref()
    }

    pub fn source_profile(&self) -> Option<&str> {
        self.source_profile.as_deref()
    }

    /// Whether this profile assumes a role.
    pub fn has_role(&self) -> bool {
        self.role_arn.is_some()
    }

    /// Whether assuming this profile's role needs an MFA token.
    pub fn requires_mfa(&self) -> bool {
        self.mfa_serial.is_some()
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_PROFILE_NAME
    }

    /// Apply a single `key=value` pair.
    ///
    /// Returns `false` when the key is not recognized; the profile is left
    /// untouched in that case. A repeated key overwrites the earlier value and
    /// an empty value clears the field.
    pub(crate) fn apply(&mut self, key: &str, value: &str) -> bool {
        let field = match key {
            KEY_REGION => &mut self.region,
            KEY_OUTPUT => &mut self.output,
            KEY_ROLE_ARN => &mut self.role_arn,
            KEY_MFA_SERIAL => &mut self.mfa_serial,
            KEY_SOURCE_PROFILE => &mut self.source_profile,
            _ => return false,
        };
        *field = (!value.is_empty()).then(|| value.to_string());
        true
    }
}
