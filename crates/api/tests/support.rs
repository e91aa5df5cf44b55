#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use tessera_common::security::generate_field_key;
use tessera_domain::{Config, KeyStorage};
use tessera_lib::context::AppContext;

/// Environment variable the tests point `KeyStorage::Environment` at.
pub const TEST_KEY_VAR: &str = "TESSERA_APP_TEST_FIELD_KEY";

/// Temporary directory plus the configuration that targets it.
pub struct TestApp {
    pub config: Config,
    temp_dir: TempDir,
}

impl TestApp {
    /// Ephemeral key: nothing touches the keychain or the environment.
    pub fn ephemeral() -> Self {
        Self::with_storage(KeyStorage::Ephemeral)
    }

    /// Environment key read from [`TEST_KEY_VAR`]. Callers manage the
    /// variable and must run under `#[serial]`.
    pub fn environment() -> Self {
        let mut app = Self::with_storage(KeyStorage::Environment);
        app.config.encryption.key_env_var = TEST_KEY_VAR.to_string();
        app
    }

    fn with_storage(key_storage: KeyStorage) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary test directory");
        let mut config = Config::default();
        config.database.path = temp_dir.path().join("tessera.db").to_string_lossy().to_string();
        config.database.pool_size = 2;
        config.encryption.key_storage = key_storage;
        Self { config, temp_dir }
    }

    /// Build a fresh context over the same database file.
    pub fn context(&self) -> AppContext {
        AppContext::new_with_config(self.config.clone()).expect("AppContext creation should succeed")
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.config.database.path)
    }
}

/// Put a new random key into [`TEST_KEY_VAR`].
pub fn install_test_key() -> String {
    let key = generate_field_key().expose().to_string();
    std::env::set_var(TEST_KEY_VAR, &key);
    key
}

pub fn clear_test_key() {
    std::env::remove_var(TEST_KEY_VAR);
}
