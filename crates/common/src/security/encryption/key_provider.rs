//! Field key sourcing
//!
//! Resolves the 32-byte field key from one of several sources:
//!
//! | Source | Creates a key when missing | Survives restart |
//! |--------|----------------------------|------------------|
//! | [`KeySource::Keychain`] | yes, persisted | yes |
//! | [`KeySource::Environment`] | no | yes (caller-managed) |
//! | [`KeySource::Direct`] | no | caller-managed |
//! | [`KeySource::Ephemeral`] | always | no |
//!
//! Keys are returned hex-encoded inside a [`SecureString`]. Nothing in this
//! module logs key material.

use tracing::{info, instrument, warn};

use super::keychain::{KeychainError, KeychainProvider, SecretStore};
use super::keys::{generate_field_key, validate_field_key};
use super::SecureString;
use crate::crypto::error::{CryptoError, CryptoResult};

/// Where the field key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Platform keychain entry, created on first use.
    Keychain { service: String, account: String },

    /// Hex key read from an environment variable.
    Environment { var_name: String },

    /// Hex key supplied by the caller.
    Direct { key: SecureString },

    /// Random key held only for the life of the process.
    Ephemeral,
}

impl KeySource {
    /// Keychain source for `service` / `account`.
    pub fn keychain(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self::Keychain { service: service.into(), account: account.into() }
    }

    /// Environment source reading `var_name`.
    pub fn environment(var_name: impl Into<String>) -> Self {
        Self::Environment { var_name: var_name.into() }
    }

    /// Direct hex key (tests and tooling only).
    pub fn direct(key: impl Into<String>) -> Self {
        Self::Direct { key: SecureString::new(key.into()) }
    }

    /// Short label safe for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Keychain { .. } => "keychain",
            Self::Environment { .. } => "environment",
            Self::Direct { .. } => "direct",
            Self::Ephemeral => "ephemeral",
        }
    }
}

/// Get or create the field key from the configured source.
///
/// # Errors
/// - [`CryptoError::KeyUnavailable`] when the keychain cannot be reached or
///   the environment variable is unset
/// - [`CryptoError::InvalidKey`] when a stored or supplied key is not 64 hex
///   characters
#[instrument(skip_all, fields(key_source = key_source.kind()))]
pub fn get_or_create_key(key_source: &KeySource) -> CryptoResult<SecureString> {
    match key_source {
        KeySource::Keychain { service, account } => {
            info!("Retrieving field key from platform keychain");
            let keychain = KeychainProvider::new(service.as_str());
            get_or_create_stored_key(&keychain, account)
        }
        KeySource::Environment { var_name } => {
            info!(var_name = %var_name, "Retrieving field key from environment variable");
            let key = match std::env::var(var_name) {
                Ok(value) if !value.trim().is_empty() => SecureString::new(value.trim().to_string()),
                _ => {
                    warn!(var_name = %var_name, "Field key environment variable is not set");
                    return Err(CryptoError::KeyUnavailable(format!(
                        "environment variable {var_name} is not set"
                    )));
                }
            };
            validate_field_key(&key)?;
            Ok(key)
        }
        KeySource::Direct { key } => {
            warn!("Using direct key source (not recommended for production)");
            validate_field_key(key)?;
            Ok(key.clone())
        }
        KeySource::Ephemeral => {
            warn!("Using ephemeral field key; values written now are unreadable after restart");
            Ok(generate_field_key())
        }
    }
}

/// Get the key stored under `account`, generating and persisting one if the
/// entry does not exist yet.
///
/// An existing entry that is not a valid key is reported, never overwritten.
#[instrument(skip(store), fields(account = account))]
pub fn get_or_create_stored_key(
    store: &dyn SecretStore,
    account: &str,
) -> CryptoResult<SecureString> {
    match store.get_secret(account) {
        Ok(existing) => {
            let key = SecureString::new(existing);
            validate_field_key(&key)?;
            info!("Existing field key found");
            Ok(key)
        }
        Err(KeychainError::NotFound) => {
            info!("No field key stored, generating a new one");
            let key = generate_field_key();
            store.set_secret(account, key.expose()).map_err(|e| {
                warn!(error = %e, "Failed to persist new field key");
                CryptoError::KeyUnavailable(format!("failed to store field key: {e}"))
            })?;
            Ok(key)
        }
        Err(e) => {
            warn!(error = %e, "Failed to access secret store");
            Err(CryptoError::KeyUnavailable(format!("failed to read field key: {e}")))
        }
    }
}
