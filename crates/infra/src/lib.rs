//! # Tessera Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite connection manager and migrations
//! - `SqliteUserRepository`, which encrypts the email column at the storage
//!   boundary
//! - `FieldCodec`, the AES-256-GCM implementation of `FieldCipher`
//! - Configuration loading and key source selection
//!
//! ## Architecture
//! - Implements traits defined in `tessera-core`
//! - Depends on `tessera-common`, `tessera-domain` and `tessera-core`
//! - Contains all "impure" code (I/O, keychain access)

pub mod config;
pub mod crypto;
pub mod database;
pub mod errors;
pub mod key_manager;

// Re-export commonly used items
pub use crypto::FieldCodec;
pub use database::{DbManager, SqliteUserRepository};
pub use errors::InfraError;
pub use key_manager::KeyManager;
