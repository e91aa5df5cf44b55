//! Field key selection from configuration
use tessera_common::security::{generate_field_key, KeySource, SecureString};
use tessera_domain::{EncryptionConfig, KeyStorage};
use tracing::warn;

use crate::crypto::FieldCodec;

/// Maps [`EncryptionConfig`] onto a [`KeySource`] and builds codecs from it.
pub struct KeyManager;

impl KeyManager {
    /// Key source described by the configuration.
    pub fn key_source(config: &EncryptionConfig) -> KeySource {
        match config.key_storage {
            KeyStorage::Keychain => {
                KeySource::keychain(&config.keychain_service, &config.keychain_account)
            }
            KeyStorage::Environment => KeySource::environment(&config.key_env_var),
            KeyStorage::Ephemeral => {
                warn!("ephemeral key storage configured; stored emails will be unreadable after exit");
                KeySource::Ephemeral
            }
        }
    }

    /// Lazily initialised codec for the configured key source.
    pub fn codec(config: &EncryptionConfig) -> FieldCodec {
        FieldCodec::new(Self::key_source(config))
    }

    /// Generate a new random encryption key (64 hex characters)
    pub fn generate_key() -> SecureString {
        generate_field_key()
    }
}
