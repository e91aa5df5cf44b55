//! Temporary SQLite databases for tests.
//!
//! The database file lives inside a [`tempfile::TempDir`] and disappears with
//! it when the helper is dropped.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::CommonError;
use crate::storage::sqlite::{SqliteConnection, SqlitePool, SqlitePoolConfig};

/// Result type for test database operations
pub type TestDbResult<T> = Result<T, CommonError>;

/// On-disk SQLite database scoped to a temporary directory.
#[derive(Debug)]
pub struct TestDatabase {
    temp_dir: TempDir,
    db_path: PathBuf,
    pool: SqlitePool,
}

impl TestDatabase {
    /// Fresh database with the default pool settings.
    pub fn new() -> TestDbResult<Self> {
        Self::with_pool_config(SqlitePoolConfig::default())
    }

    /// Fresh database with custom pool settings.
    pub fn with_pool_config(config: SqlitePoolConfig) -> TestDbResult<Self> {
        let temp_dir = TempDir::new().map_err(|e| {
            CommonError::persistence_op("create_temp_dir", format!("create temp dir: {e}"))
        })?;
        let db_path = temp_dir.path().join("tessera-test.db");

        let pool = SqlitePool::new(&db_path, config).map_err(|err| {
            CommonError::persistence_op("create_pool", format!("create SQLite pool: {err}"))
        })?;

        Ok(Self { temp_dir, db_path, pool })
    }

    /// Check out a pooled connection.
    pub fn connection(&self) -> TestDbResult<SqliteConnection> {
        self.pool.get_sqlite_connection().map_err(|err| {
            CommonError::persistence_op("get_connection", format!("acquire connection: {err}"))
        })
    }

    /// Path of the main database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Directory holding the database and its WAL/SHM side files.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The pool backing this database.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
