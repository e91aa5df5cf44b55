//! Application constants
//!
//! Defaults shared by configuration, the loader and the CLI.

// Database
pub const DEFAULT_DB_PATH: &str = "tessera.db";
pub const DEFAULT_POOL_SIZE: u32 = 4;

// Field key storage
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "com.tessera.app";
pub const DEFAULT_KEYCHAIN_ACCOUNT: &str = "field_encryption_key";
pub const DEFAULT_KEY_ENV_VAR: &str = "TESSERA_FIELD_KEY";

// Environment overrides read by the config loader
pub const ENV_DB_PATH: &str = "TESSERA_DB_PATH";
pub const ENV_DB_POOL_SIZE: &str = "TESSERA_DB_POOL_SIZE";
pub const ENV_KEY_STORAGE: &str = "TESSERA_KEY_STORAGE";
pub const ENV_KEY_ENV_VAR: &str = "TESSERA_KEY_ENV_VAR";

/// Current schema version written by migrations.
pub const SCHEMA_VERSION: i32 = 1;
