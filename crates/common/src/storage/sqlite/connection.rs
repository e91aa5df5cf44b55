//! Pooled SQLite connection wrapper

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection as RusqliteConnection, Params, Row};
use tracing::instrument;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::metrics::StorageMetrics;

/// Pooled connection that records query outcomes in the pool's metrics.
///
/// Returned to the pool on drop. Derefs to [`rusqlite::Connection`] for
/// statement-level work.
pub struct SqliteConnection {
    inner: PooledConnection<SqliteConnectionManager>,
    metrics: Arc<StorageMetrics>,
}

impl SqliteConnection {
    pub(crate) fn new(
        conn: PooledConnection<SqliteConnectionManager>,
        metrics: Arc<StorageMetrics>,
    ) -> Self {
        Self { inner: conn, metrics }
    }

    /// Execute a statement that returns no rows.
    #[instrument(skip(self, params), fields(sql = %sql))]
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> StorageResult<usize> {
        self.record(self.inner.execute(sql, params))
    }

    /// Execute a query that returns a single row.
    #[instrument(skip(self, params, f), fields(sql = %sql))]
    pub fn query_row<T, P, F>(&self, sql: &str, params: P, f: F) -> StorageResult<T>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        self.record(self.inner.query_row(sql, params, f))
    }

    /// Run a query and collect every mapped row.
    #[instrument(skip(self, params, f), fields(sql = %sql))]
    pub fn query_map<T, P, F>(&self, sql: &str, params: P, f: F) -> StorageResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        self.record(collect_rows(&self.inner, sql, params, f))
    }

    fn record<T>(&self, result: rusqlite::Result<T>) -> StorageResult<T> {
        match result {
            Ok(value) => {
                self.metrics.record_query_executed();
                Ok(value)
            }
            Err(e) => {
                self.metrics.record_query_failed();
                Err(StorageError::from(e))
            }
        }
    }
}

fn collect_rows<T, P, F>(
    conn: &RusqliteConnection,
    sql: &str,
    params: P,
    f: F,
) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> Result<T, rusqlite::Error>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, f)?;
    rows.collect()
}

impl Deref for SqliteConnection {
    type Target = RusqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SqliteConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
