//! Database implementations

pub mod manager;
pub mod user_repository;

pub use manager::*;
pub use user_repository::*;
