//! Field encryption primitives.
//!
//! - [`encryption`]: AES-256-GCM [`EncryptionService`] and the `enc:v1:`
//!   string envelope
//! - [`error`]: [`CryptoError`] taxonomy
//!
//! Key sourcing (keychain, environment) lives in `security::encryption`.

pub mod encryption;
pub mod error;

pub use encryption::{EncryptionService, ENVELOPE_PREFIX, ENVELOPE_VERSION, KEY_LEN, NONCE_LEN};
pub use error::{CryptoError, CryptoResult};
