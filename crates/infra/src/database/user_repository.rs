//! User repository implementation using SQLite
//!
//! The `email` column only ever holds [`FieldCipher`] ciphertext. Names are
//! stored as plaintext.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use rusqlite::{params, Row};
use tessera_common::crypto::CryptoError;
use tessera_common::storage::StorageError;
use tessera_core::user::ports::UserRepository as UserRepositoryPort;
use tessera_core::FieldCipher;
use tessera_domain::{NewUser, Result as DomainResult, TesseraError, User};
use tokio::task;
use tracing::{debug, info, instrument, warn};

use super::manager::DbManager;
use crate::errors::InfraError;

const SELECT_USERS: &str = "SELECT * FROM users";
const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?1, ?2)";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";

/// SQLite-backed implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
    cipher: Arc<dyn FieldCipher>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>, cipher: Arc<dyn FieldCipher>) -> Self {
        Self { db, cipher }
    }
}

/// A row as stored, before the email is decrypted.
struct StoredUser {
    id: i64,
    name: String,
    email: Option<String>,
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> DomainResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> DomainResult<Vec<StoredUser>> {
            let conn = db.get_connection()?;
            conn.query_map(SELECT_USERS, [], map_stored_user_row).map_err(map_storage_error)
        })
        .await
        .map_err(map_join_error)??;

        let count = rows.len();

        // One decrypt task per row; join_all yields results in input order.
        let decrypts = rows.into_iter().map(|row| {
            let cipher = Arc::clone(&self.cipher);
            task::spawn_blocking(move || decrypt_row(cipher.as_ref(), row))
        });

        let users = join_all(decrypts)
            .await
            .into_iter()
            .map(|joined| joined.map_err(map_join_error)?)
            .collect::<DomainResult<Vec<User>>>()?;

        debug!(count, "users listed");
        Ok(users)
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: NewUser) -> DomainResult<i64> {
        let db = Arc::clone(&self.db);
        let cipher = Arc::clone(&self.cipher);

        let id = task::spawn_blocking(move || -> DomainResult<i64> {
            // Encrypt before touching the store; a crypto failure writes nothing.
            let ciphertext = cipher.encrypt_string(&user.email).map_err(map_crypto_error)?;

            let conn = db.get_connection()?;
            conn.execute(INSERT_USER, params![user.name, ciphertext]).map_err(map_storage_error)?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(map_join_error)??;

        info!(user_id = id, "user created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        let affected = task::spawn_blocking(move || -> DomainResult<usize> {
            let conn = db.get_connection()?;
            conn.execute(DELETE_USER, params![id]).map_err(map_storage_error)
        })
        .await
        .map_err(map_join_error)??;

        if affected == 0 {
            debug!(user_id = id, "remove of missing user ignored");
        } else {
            info!(user_id = id, "user removed");
        }
        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// `SELECT *` is read positionally: id, name, email.
fn map_stored_user_row(row: &Row<'_>) -> rusqlite::Result<StoredUser> {
    Ok(StoredUser { id: row.get(0)?, name: row.get(1)?, email: row.get(2)? })
}

fn decrypt_row(cipher: &dyn FieldCipher, row: StoredUser) -> DomainResult<User> {
    let ciphertext = row.email.ok_or_else(|| {
        map_crypto_error(CryptoError::Malformed(format!("user {} has no stored email", row.id)))
    })?;

    let email = cipher.decrypt_string(&ciphertext).map_err(|err| {
        warn!(user_id = row.id, error = %err, "failed to decrypt stored email");
        map_crypto_error(err)
    })?;

    Ok(User { id: row.id, name: row.name, email })
}

fn map_storage_error(err: StorageError) -> TesseraError {
    TesseraError::from(InfraError::from(err))
}

fn map_crypto_error(err: CryptoError) -> TesseraError {
    TesseraError::from(InfraError::from(err))
}

fn map_join_error(err: task::JoinError) -> TesseraError {
    TesseraError::from(InfraError::from(err))
}
