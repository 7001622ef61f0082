//! Credential storage keyed by profile name.
//!
//! Responsibilities:
//! - Define the `CredentialStore` interface used by credential-sourcing collaborators.
//! - Provide a system keyring backed store and an in-memory store.
//!
//! Does NOT handle:
//! - Interpreting the stored secret material (it is opaque here).
//! - Role assumption or MFA prompts.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - A missing entry is `Ok(None)` on read and a no-op on removal.
//! - Entries are keyed by normalized profile name, the same key `Config` uses.

use std::collections::HashMap;
use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::constants::KEYRING_SERVICE;

/// Errors returned by credential stores.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Keyring error for profile '{profile}': {source}")]
    Keyring {
        profile: String,
        source: keyring::Error,
    },

    #[error("Credential store lock poisoned")]
    Poisoned,
}

/// Storage for opaque secret material, keyed by profile name.
pub trait CredentialStore: Send + Sync {
    /// Fetch the secret stored for `profile`, if any.
    fn get(&self, profile: &str) -> Result<Option<SecretString>, CredentialStoreError>;

    /// Store `secret` for `profile`, replacing any existing value.
    fn set(&self, profile: &str, secret: &SecretString) -> Result<(), CredentialStoreError>;

    /// Remove the secret stored for `profile`.
    fn remove(&self, profile: &str) -> Result<(), CredentialStoreError>;
}

/// Credential store backed by the system keyring.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new(KEYRING_SERVICE)
    }
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, profile: &str) -> Result<keyring::Entry, CredentialStoreError> {
        keyring::Entry::new(&self.service, profile).map_err(|e| keyring_error(profile, e))
    }
}

fn keyring_error(profile: &str, source: keyring::Error) -> CredentialStoreError {
    CredentialStoreError::Keyring {
        profile: profile.to_string(),
        source,
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self, profile: &str) -> Result<Option<SecretString>, CredentialStoreError> {
        match self.entry(profile)?.get_password() {
            Ok(secret) => Ok(Some(SecretString::new(secret.into()))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(keyring_error(profile, e)),
        }
    }

    fn set(&self, profile: &str, secret: &SecretString) -> Result<(), CredentialStoreError> {
        self.entry(profile)?
            .set_password(secret.expose_secret())
            .map_err(|e| keyring_error(profile, e))?;
        tracing::debug!(profile = %profile, service = %self.service, "Stored credentials in keyring");
        Ok(())
    }

    fn remove(&self, profile: &str) -> Result<(), CredentialStoreError> {
        match self.entry(profile)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(keyring_error(profile, e)),
        }
    }
}

/// Credential store that keeps secrets in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    secrets: RwLock<HashMap<String, SecretString>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, profile: &str) -> Result<Option<SecretString>, CredentialStoreError> {
        let secrets = self
            .secrets
            .read()
            .map_err(|_| CredentialStoreError::Poisoned)?;
        Ok(secrets.get(profile).cloned())
    }

    fn set(&self, profile: &str, secret: &SecretString) -> Result<(), CredentialStoreError> {
        let mut secrets = self
            .secrets
            .write()
            .map_err(|_| CredentialStoreError::Poisoned)?;
        secrets.insert(profile.to_string(), secret.clone());
        Ok(())
    }

    fn remove(&self, profile: &str) -> Result<(), CredentialStoreError> {
        let mut secrets = self
            .secrets
            .write()
            .map_err(|_| CredentialStoreError::Poisoned)?;
        secrets.remove(profile);
        Ok(())
    }
}
