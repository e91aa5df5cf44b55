//! Field key management
//!
//! Operational side of field encryption, built on the primitives in
//! `crypto::encryption`:
//!
//! - **Key sources**: keychain, environment, direct or ephemeral
//!   ([`KeySource`])
//! - **Keychain integration**: platform keychain behind [`SecretStore`]
//! - **Secure strings**: key material that zeroes itself on drop

pub mod key_provider;
pub mod keychain;
pub mod keys;
pub mod secure_string;

pub use key_provider::{get_or_create_key, get_or_create_stored_key, KeySource};
pub use keychain::{KeychainError, KeychainProvider, SecretStore};
pub use keys::{generate_field_key, validate_field_key};
pub use secure_string::SecureString;
