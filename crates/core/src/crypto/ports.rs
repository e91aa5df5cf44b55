//! Port interface for field-level encryption
//!
//! The repository layer calls this at the storage boundary: `encrypt_string`
//! before every insert, `decrypt_string` on every value read back.

use tessera_common::crypto::CryptoError;

/// Reversible, authenticated transformation of a single string field.
///
/// Implementations must:
/// - produce a different ciphertext on every call, even for equal inputs
/// - round-trip every string, including the empty string
/// - fail (never pass through) on malformed, tampered or foreign ciphertext
pub trait FieldCipher: Send + Sync {
    /// Encrypt a plaintext value into a self-contained ciphertext string.
    fn encrypt_string(&self, plaintext: &str) -> Result<String, CryptoError>;

    /// Decrypt a ciphertext produced by [`FieldCipher::encrypt_string`] under
    /// the same key.
    fn decrypt_string(&self, ciphertext: &str) -> Result<String, CryptoError>;
}
