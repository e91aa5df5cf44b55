//! SQLite connection pool configuration

use std::time::Duration;

use crate::storage::config::StorageConfig;

/// r2d2-specific view of [`StorageConfig`].
#[derive(Debug, Clone)]
pub struct SqlitePoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,

    /// How long to wait for a free connection
    pub connection_timeout: Duration,

    /// Busy timeout for SQLite lock contention
    pub busy_timeout: Duration,

    pub enable_wal: bool,

    pub enable_foreign_keys: bool,
}

impl From<&StorageConfig> for SqlitePoolConfig {
    fn from(config: &StorageConfig) -> Self {
        Self {
            max_size: config.pool_size,
            connection_timeout: Duration::from_secs(config.connection_timeout_secs),
            busy_timeout: Duration::from_millis(config.busy_timeout_ms),
            enable_wal: config.enable_wal,
            enable_foreign_keys: config.enable_foreign_keys,
        }
    }
}

impl Default for SqlitePoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_millis(5000),
            enable_wal: true,
            enable_foreign_keys: true,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for storage::sqlite::config.
    use super::*;

    /// Tests conversion from StorageConfig to SqlitePoolConfig.
    ///
    /// Verifies that all configuration fields are properly mapped.
    #[test]
    fn from_storage_config_maps_every_field() {
        let storage_config = StorageConfig {
            path: std::env::temp_dir().join("tessera-test.db"),
            pool_size: 3,
            connection_timeout_secs: 10,
            busy_timeout_ms: 750,
            enable_wal: false,
            enable_foreign_keys: false,
        };

        let pool_config = SqlitePoolConfig::from(&storage_config);

        assert_eq!(pool_config.max_size, 3);
        assert_eq!(pool_config.connection_timeout, Duration::from_secs(10));
        assert_eq!(pool_config.busy_timeout, Duration::from_millis(750));
        assert!(!pool_config.enable_wal);
        assert!(!pool_config.enable_foreign_keys);
    }

    #[test]
    fn default_matches_production_values() {
        let config = SqlitePoolConfig::default();
        assert_eq!(config.max_size, 10);
        assert_eq!(config.connection_timeout, Duration::from_secs(5));
        assert!(config.enable_wal, "WAL mode should be enabled by default");
    }
}
