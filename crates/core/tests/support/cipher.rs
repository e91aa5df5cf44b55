//! Toy `FieldCipher` for port-level tests.

use std::sync::atomic::{AtomicU64, Ordering};

use tessera_common::crypto::CryptoError;
use tessera_core::FieldCipher;

/// Reverses the input and tags it with a call counter so equal plaintexts
/// still produce different ciphertexts. Not encryption.
#[derive(Default)]
pub struct ReversingCipher {
    counter: AtomicU64,
}

impl FieldCipher for ReversingCipher {
    fn encrypt_string(&self, plaintext: &str) -> Result<String, CryptoError> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        Ok(format!("rev:{n}:{}", plaintext.chars().rev().collect::<String>()))
    }

    fn decrypt_string(&self, ciphertext: &str) -> Result<String, CryptoError> {
        let rest = ciphertext
            .strip_prefix("rev:")
            .ok_or_else(|| CryptoError::Malformed("missing prefix".to_string()))?;
        let (_, body) = rest
            .split_once(':')
            .ok_or_else(|| CryptoError::Malformed("missing counter".to_string()))?;
        Ok(body.chars().rev().collect())
    }
}
