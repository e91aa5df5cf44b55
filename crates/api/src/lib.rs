//! # Tessera App
//!
//! Application layer - commands, context and CLI support.
//!
//! This crate contains:
//! - Commands (`list_users`, `add_user`, `remove_user`, `encrypt_string`,
//!   `decrypt_string`, `get_app_health`)
//! - Application context (dependency injection)
//! - Logging setup for the `tessera` binary
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
