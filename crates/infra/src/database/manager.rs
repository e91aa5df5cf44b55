//! Database connection manager backed by the shared SQLite pool.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusqlite::params;
use tessera_common::storage::{
    ConnectionPool, HealthStatus, PoolMetrics, SqliteConnection, SqlitePool, SqlitePoolConfig,
    StorageConfig, StorageError,
};
use tessera_domain::constants::SCHEMA_VERSION;
use tessera_domain::{Result, TesseraError};
use tracing::{info, instrument, warn};

use crate::errors::InfraError;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager that wraps a [`SqlitePool`].
pub struct DbManager {
    pool: Arc<SqlitePool>,
    path: PathBuf,
}

impl DbManager {
    /// Open (creating if needed) the database file with the given pool size.
    ///
    /// # Errors
    /// Returns [`TesseraError::Config`] for an out-of-range pool size or an
    /// empty path, and [`TesseraError::Storage`] if the file cannot be opened.
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();

        let storage_config = StorageConfig::new(path.clone()).with_pool_size(pool_size);
        storage_config.validate().map_err(map_storage_error)?;

        let pool = SqlitePool::new(&path, SqlitePoolConfig::from(&storage_config))
            .map(Arc::new)
            .map_err(map_storage_error)?;

        info!(
            db_path = %path.display(),
            max_connections = pool.config().max_size,
            "sqlite pool initialised"
        );

        Ok(Self { pool, path })
    }

    /// Borrow the underlying SQLite pool.
    pub fn pool(&self) -> &Arc<SqlitePool> {
        &self.pool
    }

    /// Acquire a SQLite connection from the pool.
    pub fn get_connection(&self) -> Result<SqliteConnection> {
        self.pool.get_sqlite_connection().map_err(map_storage_error)
    }

    /// Ensure the full schema exists on the current database.
    ///
    /// Idempotent. Fails with a storage error if the file was written by a
    /// newer schema than this build knows.
    #[instrument(skip(self), fields(db_path = %self.path.display()))]
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        create_schema(&conn)?;
        Ok(())
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pool health, including connection counts.
    ///
    /// An unreachable database is reported as an error rather than an
    /// unhealthy status so callers can surface it directly.
    pub fn health_check(&self) -> Result<HealthStatus> {
        let status = self.pool.health_check().map_err(map_storage_error)?;
        if !status.healthy {
            let message = status.message.clone().unwrap_or_else(|| "database unhealthy".into());
            warn!(%message, "database health check failed");
            return Err(TesseraError::Storage(message));
        }
        Ok(status)
    }

    /// Snapshot of the pool's acquisition and query counters.
    pub fn metrics(&self) -> PoolMetrics {
        self.pool.metrics()
    }
}

fn create_schema(conn: &SqliteConnection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;

    if let Some(found) = schema_version(conn)? {
        if found > SCHEMA_VERSION {
            return Err(map_storage_error(StorageError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found,
            }));
        }
    }

    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, CAST(strftime('%s','now') AS INTEGER))",
            params![SCHEMA_VERSION],
        )
        .map_err(map_storage_error)?;

    if inserted > 0 {
        info!(version = SCHEMA_VERSION, "schema migration applied");
    }
    Ok(())
}

/// Look up the recorded schema version, if any.
pub fn schema_version(conn: &SqliteConnection) -> Result<Option<i32>> {
    conn.query_row("SELECT MAX(version) FROM schema_version", params![], |row| {
        row.get::<_, Option<i32>>(0)
    })
    .map_err(map_storage_error)
}

fn map_sql_error(err: rusqlite::Error) -> TesseraError {
    TesseraError::from(InfraError::from(err))
}

fn map_storage_error(err: StorageError) -> TesseraError {
    TesseraError::from(InfraError::from(err))
}
