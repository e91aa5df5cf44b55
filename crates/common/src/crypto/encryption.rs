//! AES-256-GCM field encryption.
//!
//! [`EncryptionService`] seals individual field values into a self-contained,
//! printable envelope:
//!
//! ```text
//! enc:v1:<base64(nonce[12] || ciphertext || tag[16])>
//! ```
//!
//! - A fresh 96-bit nonce is drawn from the OS RNG for every call, so equal
//!   plaintexts never produce equal envelopes.
//! - The envelope version is bound as associated data. Changing any character
//!   of an envelope makes [`EncryptionService::decrypt_from_string`] fail.
//! - The canonical base64 engine rejects non-zero trailing bits, so there is
//!   exactly one accepted spelling of every sealed payload.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_common::crypto::encryption::EncryptionService;
//!
//! let service = EncryptionService::new(EncryptionService::generate_key())?;
//!
//! let envelope = service.encrypt_to_string("alice@example.com")?;
//! assert!(envelope.starts_with("enc:v1:"));
//! assert_eq!(service.decrypt_from_string(&envelope)?, "alice@example.com");
//! # Ok::<(), tessera_common::crypto::CryptoError>(())
//! ```

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use super::error::{CryptoError, CryptoResult};

/// Raw key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

const TAG_LEN: usize = 16;

/// Leading marker of every envelope.
pub const ENVELOPE_PREFIX: &str = "enc";

/// Current envelope version.
pub const ENVELOPE_VERSION: &str = "v1";

const ENVELOPE_AAD: &[u8] = b"tessera:field:v1";

/// AES-256-GCM encryption service bound to a single key.
pub struct EncryptionService {
    key: Zeroizing<Vec<u8>>,
    cipher: Aes256Gcm,
}

impl std::fmt::Debug for EncryptionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionService")
            .field("key", &"[REDACTED]")
            .field("fingerprint", &self.key_fingerprint())
            .finish()
    }
}

impl EncryptionService {
    /// Create a new encryption service from a raw 32-byte key.
    pub fn new(key: Vec<u8>) -> CryptoResult<Self> {
        let key = Zeroizing::new(key);
        if key.len() != KEY_LEN {
            return Err(CryptoError::InvalidKey(format!(
                "expected {KEY_LEN} bytes, got {}",
                key.len()
            )));
        }

        let cipher = Aes256Gcm::new_from_slice(&key)
            .map_err(|e| CryptoError::InvalidKey(format!("failed to create cipher: {e}")))?;

        Ok(Self { key, cipher })
    }

    /// Create a service from a 64-character hex key.
    pub fn from_hex(hex_key: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(hex_key.trim())
            .map_err(|e| CryptoError::InvalidKey(format!("key is not valid hex: {e}")))?;
        Self::new(bytes)
    }

    /// Generate a random 32-byte symmetric key.
    pub fn generate_key() -> Vec<u8> {
        let mut key = vec![0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        key
    }

    /// Seal raw bytes into `nonce || ciphertext || tag`.
    pub fn encrypt(&self, data: &[u8]) -> CryptoResult<Vec<u8>> {
        let nonce_bytes = Self::generate_nonce();
        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), Payload { msg: data, aad: ENVELOPE_AAD })
            .map_err(|e| CryptoError::Cipher(format!("encryption failed: {e}")))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);
        Ok(sealed)
    }

    /// Open a payload produced by [`EncryptionService::encrypt`].
    pub fn decrypt(&self, sealed: &[u8]) -> CryptoResult<Vec<u8>> {
        if sealed.len() < NONCE_LEN + TAG_LEN {
            return Err(CryptoError::Malformed(format!(
                "payload too short ({} bytes)",
                sealed.len()
            )));
        }

        let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext, aad: ENVELOPE_AAD })
            .map_err(|_| CryptoError::Authentication)
    }

    /// Encrypt a string field into an `enc:v1:` envelope.
    pub fn encrypt_to_string(&self, plaintext: &str) -> CryptoResult<String> {
        let sealed = self.encrypt(plaintext.as_bytes())?;
        Ok(format!("{ENVELOPE_PREFIX}:{ENVELOPE_VERSION}:{}", BASE64.encode(sealed)))
    }

    /// Decrypt an `enc:v1:` envelope back into the original string.
    pub fn decrypt_from_string(&self, envelope: &str) -> CryptoResult<String> {
        let sealed = parse_envelope(envelope)?;
        let plaintext = Zeroizing::new(self.decrypt(&sealed)?);
        String::from_utf8(plaintext.to_vec()).map_err(|e| CryptoError::Encoding(e.to_string()))
    }

    /// Generate a short fingerprint for the current key.
    ///
    /// Safe to log: eight bytes of the key's SHA-256 digest.
    pub fn key_fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(self.key.as_slice());
        BASE64.encode(&digest[..8])
    }

    fn generate_nonce() -> [u8; NONCE_LEN] {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        nonce
    }
}

fn parse_envelope(envelope: &str) -> CryptoResult<Vec<u8>> {
    let rest = envelope
        .strip_prefix(ENVELOPE_PREFIX)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| CryptoError::Malformed("missing envelope prefix".to_string()))?;

    let (version, body) = rest
        .split_once(':')
        .ok_or_else(|| CryptoError::Malformed("missing version separator".to_string()))?;

    if version != ENVELOPE_VERSION {
        return Err(CryptoError::UnsupportedVersion(version.to_string()));
    }

    BASE64.decode(body).map_err(|e| CryptoError::Malformed(format!("invalid base64 body: {e}")))
}

#[cfg(test)]
mod tests {
    //! Unit tests for crypto::encryption.
    use super::*;

    fn service() -> EncryptionService {
        EncryptionService::new(EncryptionService::generate_key()).unwrap()
    }

    /// Validates `EncryptionService::generate_key` behavior for the generate
    /// key has correct length scenario.
    ///
    /// Assertions:
    /// - Confirms `key.len()` equals `32`.
    #[test]
    fn generate_key_has_correct_length() {
        let key = EncryptionService::generate_key();
        assert_eq!(key.len(), KEY_LEN);
    }

    /// Validates `EncryptionService::new` behavior for the new service rejects
    /// invalid key size scenario.
    ///
    /// Assertions:
    /// - Ensures the error is `CryptoError::InvalidKey`.
    #[test]
    fn new_service_rejects_invalid_key_size() {
        let result = EncryptionService::new(vec![0; 16]);
        assert!(matches!(result, Err(CryptoError::InvalidKey(_))));
    }

    #[test]
    fn from_hex_accepts_64_hex_chars_and_rejects_garbage() {
        let hex_key = hex::encode(EncryptionService::generate_key());
        assert!(EncryptionService::from_hex(&hex_key).is_ok());
        assert!(matches!(
            EncryptionService::from_hex("not-hex"),
            Err(CryptoError::InvalidKey(_))
        ));
        assert!(matches!(EncryptionService::from_hex("abcd"), Err(CryptoError::InvalidKey(_))));
    }

    /// Validates the byte-level round trip.
    ///
    /// Assertions:
    /// - Confirms `decrypted` equals `plaintext`.
    #[test]
    fn encrypt_and_decrypt_round_trip() {
        let service = service();

        let plaintext = b"hello world";
        let sealed = service.encrypt(plaintext).unwrap();
        assert_eq!(sealed.len(), NONCE_LEN + plaintext.len() + TAG_LEN);

        let decrypted = service.decrypt(&sealed).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    /// Validates string round trips for edge-case inputs.
    ///
    /// Assertions:
    /// - Confirms every sample survives `encrypt_to_string` then
    ///   `decrypt_from_string` unchanged.
    #[test]
    fn string_round_trip_covers_edge_cases() {
        let service = service();
        let samples = [
            "",
            "a@b.com",
            "zoë@exämple.de",
            "用户@例子.广告",
            "tab\there\nnewline\r\0nul",
            "\u{1F600}\u{200D}\u{1F680}",
            &"x".repeat(4096),
        ];

        for sample in samples {
            let envelope = service.encrypt_to_string(sample).unwrap();
            assert!(envelope.starts_with("enc:v1:"));
            assert_eq!(service.decrypt_from_string(&envelope).unwrap(), sample);
        }
    }

    #[test]
    fn envelopes_differ_for_identical_plaintext() {
        let service = service();
        let first = service.encrypt_to_string("a@b.com").unwrap();
        let second = service.encrypt_to_string("a@b.com").unwrap();
        assert_ne!(first, second);
    }

    /// Validates tamper detection at the character level.
    ///
    /// Assertions:
    /// - Ensures flipping the low bit of any envelope character fails to
    ///   decrypt.
    #[test]
    fn flipping_any_envelope_character_fails() {
        let service = service();
        let envelope = service.encrypt_to_string("alice@example.com").unwrap();

        for index in 0..envelope.len() {
            let mut bytes = envelope.clone().into_bytes();
            bytes[index] ^= 0x01;
            let tampered = String::from_utf8(bytes).unwrap();

            let result = service.decrypt_from_string(&tampered);
            assert!(result.is_err(), "tampering at index {index} was not detected");
        }
    }

    /// Validates tamper detection on the sealed payload.
    ///
    /// Assertions:
    /// - Ensures every single-bit flip yields `CryptoError::Authentication`.
    #[test]
    fn flipping_any_sealed_byte_fails_authentication() {
        let service = service();
        let sealed = service.encrypt(b"bob@x.com").unwrap();

        for index in 0..sealed.len() {
            for bit in 0..8 {
                let mut tampered = sealed.clone();
                tampered[index] ^= 1 << bit;
                assert_eq!(service.decrypt(&tampered), Err(CryptoError::Authentication));
            }
        }
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let writer = service();
        let reader = service();

        let envelope = writer.encrypt_to_string("carol@example.com").unwrap();
        assert_eq!(reader.decrypt_from_string(&envelope), Err(CryptoError::Authentication));
    }

    #[test]
    fn malformed_envelopes_are_rejected() {
        let service = service();

        assert!(matches!(
            service.decrypt_from_string("alice@example.com"),
            Err(CryptoError::Malformed(_))
        ));
        assert!(matches!(service.decrypt_from_string("enc:v1"), Err(CryptoError::Malformed(_))));
        assert!(matches!(
            service.decrypt_from_string("enc:v1:!!!not-base64!!!"),
            Err(CryptoError::Malformed(_))
        ));
        assert!(matches!(
            service.decrypt_from_string("enc:v1:AAAA"),
            Err(CryptoError::Malformed(_))
        ));
        assert!(matches!(
            service.decrypt_from_string("enc:v2:AAAA"),
            Err(CryptoError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn truncated_envelope_is_rejected() {
        let service = service();
        let envelope = service.encrypt_to_string("dave@example.com").unwrap();

        let truncated = &envelope[..envelope.len() - 4];
        assert!(service.decrypt_from_string(truncated).is_err());
    }

    #[test]
    fn non_utf8_plaintext_is_reported_as_encoding_error() {
        let service = service();
        let sealed = service.encrypt(&[0xff, 0xfe, 0xfd]).unwrap();
        let envelope = format!("enc:v1:{}", BASE64.encode(sealed));

        assert!(matches!(service.decrypt_from_string(&envelope), Err(CryptoError::Encoding(_))));
    }

    #[test]
    fn fingerprint_is_stable_and_debug_is_redacted() {
        let key = EncryptionService::generate_key();
        let first = EncryptionService::new(key.clone()).unwrap();
        let second = EncryptionService::new(key).unwrap();

        assert_eq!(first.key_fingerprint(), second.key_fingerprint());
        assert_eq!(first.key_fingerprint().len(), BASE64.encode([0u8; 8]).len());

        let debug = format!("{first:?}");
        assert!(debug.contains("[REDACTED]"));
    }
}
