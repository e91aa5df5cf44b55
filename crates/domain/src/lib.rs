//! # Tessera Domain
//!
//! Domain types for Tessera.
//!
//! This crate contains:
//! - User records (`User`, `NewUser`)
//! - The domain error type and `Result` alias
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Tessera crates
//! - Pure data structures and conversions

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
