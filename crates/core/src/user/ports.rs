//! Port interfaces for user persistence
//!
//! Callers only ever see plaintext. Implementations own the encryption of
//! the email field at the storage boundary.

use async_trait::async_trait;
use tessera_domain::{NewUser, Result, User};

/// Trait for user persistence and retrieval
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Read every user with the email decrypted, in store order.
    ///
    /// Fails as a whole if any single row cannot be decrypted.
    async fn list(&self) -> Result<Vec<User>>;

    /// Encrypt the email and insert the user. Returns the assigned id.
    ///
    /// Nothing is written if encryption fails.
    async fn create(&self, user: NewUser) -> Result<i64>;

    /// Delete a user by id. Deleting a missing id succeeds.
    async fn remove(&self, id: i64) -> Result<()>;
}
