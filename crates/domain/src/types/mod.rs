//! Domain types and models

pub mod user;

pub use user::{NewUser, User};
