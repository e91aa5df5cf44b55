//! SQLite connection pool
//!
//! r2d2 pool of bundled-SQLite connections. Each connection receives the
//! configured pragmas when it is opened.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info, instrument, warn};

use super::config::SqlitePoolConfig;
use super::connection::SqliteConnection;
use super::pragmas::apply_connection_pragmas;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::metrics::StorageMetrics;
use crate::storage::types::{ConnectionPool, HealthStatus, PoolMetrics};

/// SQLite connection pool
///
/// - Connection pooling with a configurable size
/// - WAL mode and foreign keys applied per connection
/// - Connection timeout handling with metrics
#[derive(Debug)]
pub struct SqlitePool {
    pool: Pool<SqliteConnectionManager>,
    config: SqlitePoolConfig,
    metrics: Arc<StorageMetrics>,
}

impl SqlitePool {
    /// Open (creating if needed) the database at `path` and build the pool.
    ///
    /// # Errors
    /// Returns [`StorageError::Connection`] if the file cannot be opened or a
    /// test connection cannot be acquired.
    #[instrument(skip_all, fields(db_path = ?path, pool_size = config.max_size))]
    pub fn new(path: &Path, config: SqlitePoolConfig) -> StorageResult<Self> {
        info!("Creating SQLite connection pool");

        let metrics = Arc::new(StorageMetrics::new(config.max_size));

        let pragma_config = config.clone();
        let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
            apply_connection_pragmas(conn, &pragma_config)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
        });

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| {
                warn!("Failed to create connection pool: {}", e);
                StorageError::Connection(format!("Failed to create pool: {}", e))
            })?;

        {
            let conn = pool.get().map_err(|e| {
                warn!("Failed to get test connection: {}", e);
                StorageError::Connection(format!("Failed to get test connection: {}", e))
            })?;
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| StorageError::Connection(format!("Database not usable: {}", e)))?;
        }

        info!("SQLite pool created successfully with {} connections", config.max_size);

        Ok(Self { pool, config, metrics })
    }

    /// Pool settings in effect.
    pub fn config(&self) -> &SqlitePoolConfig {
        &self.config
    }

    /// Acquire a connection, recording acquisition time or the failure kind.
    #[instrument(skip(self), fields(pool_size = self.config.max_size))]
    pub fn get_sqlite_connection(&self) -> StorageResult<SqliteConnection> {
        let start = Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                self.metrics.record_connection_acquired(duration_ms);
                debug!("Connection acquired in {}ms", duration_ms);
                Ok(SqliteConnection::new(conn, Arc::clone(&self.metrics)))
            }
            Err(e) => {
                let message = e.to_string().to_lowercase();
                if message.contains("timed out") || message.contains("timeout") {
                    self.metrics.record_connection_timeout();
                    warn!("Connection timeout after {:?}", self.config.connection_timeout);
                    Err(StorageError::Timeout(self.config.connection_timeout.as_secs()))
                } else {
                    self.metrics.record_connection_error();
                    warn!("Connection error: {}", e);
                    Err(StorageError::Connection(format!("Failed to get connection: {}", e)))
                }
            }
        }
    }
}

impl ConnectionPool for SqlitePool {
    type Conn = SqliteConnection;

    fn get_connection(&self) -> StorageResult<SqliteConnection> {
        self.get_sqlite_connection()
    }

    fn health_check(&self) -> StorageResult<HealthStatus> {
        let state = self.pool.state();

        match self.pool.get() {
            Ok(conn) => match conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)) {
                Ok(_) => Ok(HealthStatus::healthy(
                    (state.connections - state.idle_connections) as usize,
                    state.idle_connections as usize,
                    self.config.max_size as usize,
                )),
                Err(e) => Ok(HealthStatus::unhealthy(format!("Health query failed: {}", e))),
            },
            Err(e) => Ok(HealthStatus::unhealthy(format!("Pool unhealthy: {}", e))),
        }
    }

    fn metrics(&self) -> PoolMetrics {
        self.metrics.snapshot()
    }
}
