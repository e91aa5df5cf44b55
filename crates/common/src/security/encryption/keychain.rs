//! Platform keychain access for field keys
//!
//! Thin wrapper over the platform keychain for storing secrets across macOS
//! (Keychain Access), Windows (Credential Manager), and Linux (Secret Service
//! API).
//!
//! [`SecretStore`] is the seam between key sourcing and the keychain. Tests
//! substitute an in-memory store (`testing::MemorySecretStore`) so they never
//! prompt the user or touch the real keychain.
//!
//! ## Usage
//!
//! ```no_run
//! use tessera_common::security::{KeychainProvider, SecretStore};
//!
//! let keychain = KeychainProvider::new("com.tessera.app");
//! keychain.set_secret("field_encryption_key", "00ff...")?;
//! let secret = keychain.get_secret("field_encryption_key")?;
//! # Ok::<(), tessera_common::security::KeychainError>(())
//! ```

use keyring::Entry;
use thiserror::Error;
use tracing::debug;

/// Account-keyed secret storage.
pub trait SecretStore: Send + Sync {
    /// Retrieve a secret, or [`KeychainError::NotFound`] if absent.
    fn get_secret(&self, account: &str) -> Result<String, KeychainError>;

    /// Store or replace a secret.
    fn set_secret(&self, account: &str, value: &str) -> Result<(), KeychainError>;

    /// Delete a secret. Deleting a missing secret succeeds.
    fn delete_secret(&self, account: &str) -> Result<(), KeychainError>;
}

/// Platform keychain scoped to one service name.
#[derive(Debug, Clone)]
pub struct KeychainProvider {
    service_name: String,
}

impl KeychainProvider {
    /// Create a provider for a service (e.g. `"com.tessera.app"`).
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    /// Keychain service this provider reads and writes.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn create_entry(&self, account: &str) -> Result<Entry, KeychainError> {
        Entry::new(&self.service_name, account).map_err(|e| {
            KeychainError::AccessFailed(format!("Failed to create keychain entry: {}", e))
        })
    }
}

impl SecretStore for KeychainProvider {
    fn get_secret(&self, account: &str) -> Result<String, KeychainError> {
        debug!(service = %self.service_name, account = %account, "Retrieving secret from keychain");

        let entry = self.create_entry(account)?;
        entry.get_password().map_err(|e| match e {
            keyring::Error::NoEntry => KeychainError::NotFound,
            other => KeychainError::AccessFailed(format!(
                "Failed to retrieve secret for {}: {}",
                account, other
            )),
        })
    }

    fn set_secret(&self, account: &str, value: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, account = %account, "Storing secret in keychain");

        let entry = self.create_entry(account)?;
        entry.set_password(value).map_err(|e| {
            KeychainError::AccessFailed(format!("Failed to store secret for {}: {}", account, e))
        })
    }

    fn delete_secret(&self, account: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, account = %account, "Deleting secret from keychain");

        let entry = self.create_entry(account)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(KeychainError::AccessFailed(format!(
                "Failed to delete secret for {}: {}",
                account, e
            ))),
        }
    }
}

/// Keychain error types
#[derive(Debug, Error)]
pub enum KeychainError {
    /// Keychain access failed (permission denied, not available, etc.)
    #[error("Keychain access failed: {0}")]
    AccessFailed(String),

    /// Entry not found in keychain
    #[error("Entry not found")]
    NotFound,

    /// Underlying keyring library error
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

#[cfg(test)]
mod tests {
    //! Unit tests for security::encryption::keychain.
    use super::*;

    /// Validates `KeychainProvider::new` behavior for the keychain provider
    /// creation scenario.
    ///
    /// Assertions:
    /// - Confirms `keychain.service_name()` equals `"com.tessera.test"`.
    #[test]
    fn keychain_provider_keeps_service_name() {
        let keychain = KeychainProvider::new("com.tessera.test");
        assert_eq!(keychain.service_name(), "com.tessera.test");
    }

    #[test]
    fn keychain_error_messages() {
        assert_eq!(KeychainError::NotFound.to_string(), "Entry not found");
        assert!(KeychainError::AccessFailed("locked".into()).to_string().contains("locked"));
    }
}
