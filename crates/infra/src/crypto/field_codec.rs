//! Field codec backed by AES-256-GCM envelopes
//!
//! Owns one [`KeySource`] and builds the [`EncryptionService`] on first use.
//! The key is resolved once per codec; a failed resolution is not cached, so
//! provisioning the key later (for example setting the environment variable)
//! lets the next call succeed.

use once_cell::sync::OnceCell;
use tessera_common::crypto::{CryptoError, EncryptionService};
use tessera_common::security::{get_or_create_key, KeySource};
use tessera_core::FieldCipher;
use tracing::{debug, info, instrument};

/// Implementation of [`FieldCipher`] over the `enc:v1:` envelope.
pub struct FieldCodec {
    key_source: KeySource,
    service: OnceCell<EncryptionService>,
}

impl FieldCodec {
    /// Codec that resolves its key lazily from `key_source`.
    pub fn new(key_source: KeySource) -> Self {
        Self { key_source, service: OnceCell::new() }
    }

    /// Codec over an already-built service. Mostly useful in tests.
    pub fn from_service(service: EncryptionService) -> Self {
        Self { key_source: KeySource::Ephemeral, service: OnceCell::with_value(service) }
    }

    /// Where this codec reads its key from.
    pub fn key_source(&self) -> &KeySource {
        &self.key_source
    }

    /// Whether the key has been resolved.
    pub fn is_ready(&self) -> bool {
        self.service.get().is_some()
    }

    /// Resolve the key now and return its fingerprint.
    ///
    /// # Errors
    /// Returns the [`CryptoError`] raised while resolving or validating the
    /// key. The codec stays uninitialised in that case.
    pub fn ensure_ready(&self) -> Result<String, CryptoError> {
        self.service().map(EncryptionService::key_fingerprint)
    }

    #[instrument(skip_all, fields(key_source = self.key_source.kind()))]
    fn service(&self) -> Result<&EncryptionService, CryptoError> {
        self.service.get_or_try_init(|| {
            let key = get_or_create_key(&self.key_source)?;
            let service = EncryptionService::from_hex(key.expose())?;
            info!(fingerprint = %service.key_fingerprint(), "field codec initialised");
            Ok(service)
        })
    }
}

impl std::fmt::Debug for FieldCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCodec")
            .field("key_source", &self.key_source.kind())
            .field("ready", &self.is_ready())
            .finish()
    }
}

impl FieldCipher for FieldCodec {
    fn encrypt_string(&self, plaintext: &str) -> Result<String, CryptoError> {
        let envelope = self.service()?.encrypt_to_string(plaintext)?;
        debug!(len = envelope.len(), "field encrypted");
        Ok(envelope)
    }

    fn decrypt_string(&self, ciphertext: &str) -> Result<String, CryptoError> {
        self.service()?.decrypt_from_string(ciphertext)
    }
}
