//! Security primitives: field key sourcing and secret handling.

pub mod encryption;

pub use encryption::{
    generate_field_key, get_or_create_key, get_or_create_stored_key, KeySource, KeychainError,
    KeychainProvider, SecretStore, SecureString,
};
