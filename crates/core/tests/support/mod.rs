//! Shared test helpers for `tessera-core` integration tests.

pub mod cipher;
pub mod repositories;
