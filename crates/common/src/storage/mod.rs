//! Storage primitives for the local SQLite store
//!
//! - [`config`]: pool sizing, timeouts and pragmas
//! - [`sqlite`]: r2d2-backed connection pool
//! - [`metrics`]: lock-free pool counters

pub mod config;
pub mod error;
pub mod metrics;
pub mod sqlite;
pub mod types;

pub use config::StorageConfig;
pub use error::{StorageError, StorageResult};
pub use metrics::StorageMetrics;
pub use sqlite::{apply_connection_pragmas, SqliteConnection, SqlitePool, SqlitePoolConfig};
pub use types::{ConnectionPool, HealthStatus, PoolMetrics};
