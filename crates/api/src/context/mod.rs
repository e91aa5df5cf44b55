//! Application context - dependency injection container

use std::sync::Arc;

use tessera_common::storage::HealthStatus;
use tessera_core::{FieldCipher, UserDirectory, UserRepository};
use tessera_domain::{Config, Result, TesseraError};
use tessera_infra::{config, DbManager, FieldCodec, InfraError, KeyManager, SqliteUserRepository};
use tracing::{info, warn};

/// Application context - holds all services and dependencies
pub struct AppContext {
    /// Configuration the context was built from.
    pub config: Config,
    /// Database pool and migrations.
    pub db: Arc<DbManager>,
    /// Field codec shared with the user repository.
    pub codec: Arc<FieldCodec>,
    /// User directory service.
    pub users: Arc<UserDirectory>,
}

impl AppContext {
    /// Create a context from environment or file configuration, falling back
    /// to defaults when neither is present.
    pub fn new() -> Result<Self> {
        Self::new_with_config(load_config()?)
    }

    /// Create a new application context with custom configuration
    ///
    /// Opens the database, applies migrations and resolves the field key. A
    /// key that cannot be resolved yet is logged, not fatal: listing and
    /// adding users will report the crypto error until it is provisioned.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let codec = Arc::new(KeyManager::codec(&config.encryption));
        match codec.ensure_ready() {
            Ok(fingerprint) => info!(
                key_source = codec.key_source().kind(),
                %fingerprint,
                "field key ready"
            ),
            Err(err) => warn!(
                key_source = codec.key_source().kind(),
                error = %err,
                "field key unavailable; encrypted fields are inaccessible until it is provisioned"
            ),
        }

        let cipher: Arc<dyn FieldCipher> = codec.clone();
        let repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(Arc::clone(&db), cipher));
        let users = Arc::new(UserDirectory::new(repository));

        info!(db_path = %db.path().display(), "application context initialised");

        Ok(Self { config, db, codec, users })
    }

    /// Check database health without blocking the async runtime.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(|e| TesseraError::from(InfraError::from(e)))?
    }
}

/// Resolve configuration: environment, then config file, then defaults.
///
/// Defaults apply only when no source exists. A present but broken source
/// is an error.
pub fn load_config() -> Result<Config> {
    config::load_or_default()
}
