//! User records
//!
//! `email` is plaintext in both types. Encryption happens at the storage
//! boundary and never leaks into the domain.

use serde::{Deserialize, Serialize};

/// A stored user as returned by reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned, monotonic, never reused.
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Build a new user from plaintext fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }

    /// Attach the id assigned by the store.
    pub fn into_user(self, id: i64) -> User {
        User { id, name: self.name, email: self.email }
    }
}
