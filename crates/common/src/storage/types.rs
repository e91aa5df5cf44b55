//! Core storage trait definitions

use std::fmt::Debug;

use super::error::StorageResult;

/// Connection pool abstraction.
///
/// Implementations must provide thread-safe access to database connections.
pub trait ConnectionPool: Send + Sync + Debug {
    /// Connection handle returned to callers.
    type Conn;

    /// Get a connection from the pool
    ///
    /// This may block if the pool is exhausted, up to the configured timeout.
    fn get_connection(&self) -> StorageResult<Self::Conn>;

    /// Check pool health
    fn health_check(&self) -> StorageResult<HealthStatus>;

    /// Get pool metrics
    fn metrics(&self) -> PoolMetrics;
}

/// Health status of the storage system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
    pub active_connections: usize,
    pub idle_connections: usize,
    pub max_connections: usize,
    /// Error message if unhealthy
    pub message: Option<String>,
}

impl HealthStatus {
    /// Healthy status with current connection counts.
    pub fn healthy(active: usize, idle: usize, max: usize) -> Self {
        Self {
            healthy: true,
            active_connections: active,
            idle_connections: idle,
            max_connections: max,
            message: None,
        }
    }

    /// Unhealthy status; counts are zeroed.
    pub fn unhealthy(message: String) -> Self {
        Self {
            healthy: false,
            active_connections: 0,
            idle_connections: 0,
            max_connections: 0,
            message: Some(message),
        }
    }
}

/// Connection pool metrics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolMetrics {
    pub connections_acquired: u64,
    pub connections_timeout: u64,
    pub connections_error: u64,
    /// Average connection acquisition time (milliseconds)
    pub avg_acquisition_time_ms: u64,
    pub queries_executed: u64,
    pub queries_failed: u64,
}
