//! User directory service - core business logic

use std::sync::Arc;

use tessera_domain::{NewUser, Result, TesseraError, User};
use tracing::{debug, info, instrument, warn};

use super::ports::UserRepository;

/// Use-case service in front of a [`UserRepository`].
pub struct UserDirectory {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Wrap a repository implementation.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List every user with plaintext emails.
    #[instrument(skip_all)]
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.repository.list().await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Validate and store a new user, returning its id.
    ///
    /// The name must contain a non-whitespace character. The email is opaque
    /// and stored exactly as given (including empty).
    #[instrument(skip_all)]
    pub async fn add_user(&self, user: NewUser) -> Result<i64> {
        if user.name.trim().is_empty() {
            warn!("Rejected user with empty name");
            return Err(TesseraError::InvalidInput("name must not be empty".to_string()));
        }

        let id = self.repository.create(user).await?;
        info!(user_id = id, "User created");
        Ok(id)
    }

    /// Remove a user. Missing ids are not an error.
    #[instrument(skip(self))]
    pub async fn remove_user(&self, id: i64) -> Result<()> {
        self.repository.remove(id).await?;
        info!(user_id = id, "User removed");
        Ok(())
    }
}
