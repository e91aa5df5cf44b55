//! # Tessera Core
//!
//! Business logic layer with no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for persistence and field encryption
//! - The `UserDirectory` use-case service
//!
//! ## Architecture Principles
//! - Only depends on `tessera-common` and `tessera-domain`
//! - No database or platform code
//! - All external dependencies via traits

pub mod crypto;
pub mod user;

pub use crypto::ports::FieldCipher;
pub use user::ports::UserRepository;
pub use user::UserDirectory;
