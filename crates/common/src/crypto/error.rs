//! Errors raised by the field encryption primitives.

use thiserror::Error;

use crate::error::{ErrorClassification, ErrorSeverity};

/// Result alias for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Field encryption failure.
///
/// Every variant is fatal to the operation that produced it. None of them is
/// retryable: a ciphertext that failed to authenticate once will fail again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Encryption key unavailable: {0}")]
    KeyUnavailable(String),

    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),

    #[error("Malformed ciphertext: {0}")]
    Malformed(String),

    #[error("Unsupported ciphertext version: {0}")]
    UnsupportedVersion(String),

    #[error("Ciphertext failed authentication (wrong key or tampered data)")]
    Authentication,

    #[error("Decrypted value is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Cipher failure: {0}")]
    Cipher(String),
}

impl ErrorClassification for CryptoError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::KeyUnavailable(_) | Self::InvalidKey(_) | Self::Authentication => {
                ErrorSeverity::Critical
            }
            Self::Malformed(_)
            | Self::UnsupportedVersion(_)
            | Self::Encoding(_)
            | Self::Cipher(_) => ErrorSeverity::Error,
        }
    }

    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    fn retry_after(&self) -> Option<std::time::Duration> {
        None
    }
}
