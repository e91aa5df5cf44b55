//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DB_PATH, DEFAULT_KEYCHAIN_ACCOUNT, DEFAULT_KEYCHAIN_SERVICE, DEFAULT_KEY_ENV_VAR,
    DEFAULT_POOL_SIZE,
};
use crate::impl_enum_string_conversions;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub encryption: EncryptionConfig,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: DEFAULT_DB_PATH.to_string(), pool_size: DEFAULT_POOL_SIZE }
    }
}

/// Where the field encryption key is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyStorage {
    /// Platform keychain; created on first run and reused afterwards.
    #[default]
    Keychain,
    /// Hex key supplied through an environment variable.
    Environment,
    /// Random per-process key. Data written with it is lost on exit.
    Ephemeral,
}

impl_enum_string_conversions!(KeyStorage {
    Keychain => "keychain",
    Environment => "environment",
    Ephemeral => "ephemeral",
});

/// Field encryption configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncryptionConfig {
    pub key_storage: KeyStorage,
    pub keychain_service: String,
    pub keychain_account: String,
    pub key_env_var: String,
}

impl Default for EncryptionConfig {
    fn default() -> Self {
        Self {
            key_storage: KeyStorage::Keychain,
            keychain_service: DEFAULT_KEYCHAIN_SERVICE.to_string(),
            keychain_account: DEFAULT_KEYCHAIN_ACCOUNT.to_string(),
            key_env_var: DEFAULT_KEY_ENV_VAR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.database.path, "tessera.db");
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.encryption.key_storage, KeyStorage::Keychain);
        assert_eq!(config.encryption.keychain_service, "com.tessera.app");
        assert_eq!(config.encryption.keychain_account, "field_encryption_key");
        assert_eq!(config.encryption.key_env_var, "TESSERA_FIELD_KEY");
    }

    #[test]
    fn key_storage_serde_is_lowercase() {
        let json = serde_json::to_string(&KeyStorage::Environment).unwrap();
        assert_eq!(json, "\"environment\"");

        let parsed: KeyStorage = serde_json::from_str("\"ephemeral\"").unwrap();
        assert_eq!(parsed, KeyStorage::Ephemeral);
        assert_eq!("Keychain".parse::<KeyStorage>().unwrap(), KeyStorage::Keychain);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"database":{"path":"/tmp/x.db","pool_size":2}}"#).unwrap();
        assert_eq!(config.database.pool_size, 2);
        assert_eq!(config.encryption, EncryptionConfig::default());

        let config: Config =
            serde_json::from_str(r#"{"encryption":{"key_storage":"environment"}}"#).unwrap();
        assert_eq!(config.database, DatabaseConfig::default());
        assert_eq!(config.encryption.key_storage, KeyStorage::Environment);
        assert_eq!(config.encryption.key_env_var, "TESSERA_FIELD_KEY");
    }
}
