//! Field key generation and validation
//!
//! Field keys travel as 64 lowercase hex characters (32 raw bytes) so they can
//! live in a keychain entry or an environment variable.

use crate::crypto::encryption::{EncryptionService, KEY_LEN};
use crate::crypto::error::{CryptoError, CryptoResult};

use super::SecureString;

/// Generate a new random field key, hex-encoded.
///
/// # Example
/// ```
/// use tessera_common::security::encryption::keys::generate_field_key;
///
/// let key = generate_field_key();
/// assert_eq!(key.len(), 64);
/// ```
pub fn generate_field_key() -> SecureString {
    let raw = zeroize::Zeroizing::new(EncryptionService::generate_key());
    SecureString::new(hex::encode(raw.as_slice()))
}

/// Check that `key` is a 64-character hex encoding of a 32-byte key.
pub fn validate_field_key(key: &SecureString) -> CryptoResult<()> {
    let expected = KEY_LEN * 2;
    if key.len() != expected {
        return Err(CryptoError::InvalidKey(format!(
            "expected {expected} hex characters, got {}",
            key.len()
        )));
    }

    if !key.expose().bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CryptoError::InvalidKey("key contains non-hex characters".to_string()));
    }

    Ok(())
}
