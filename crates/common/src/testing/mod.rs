//! Testing utilities
//!
//! - [`secrets`]: in-memory [`SecretStore`](crate::security::SecretStore) so
//!   keychain-backed key sourcing can be tested without the platform keychain
//! - [`database`]: throwaway on-disk SQLite databases

pub mod database;
pub mod secrets;

pub use database::{TestDatabase, TestDbResult};
pub use secrets::MemorySecretStore;
