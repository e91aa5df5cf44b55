//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TESSERA_DB_PATH`: Database file path (required)
//! - `TESSERA_DB_POOL_SIZE`: Connection pool size (required)
//! - `TESSERA_KEY_STORAGE`: `keychain`, `environment` or `ephemeral`
//! - `TESSERA_KEY_ENV_VAR`: Variable holding the hex key when
//!   `TESSERA_KEY_STORAGE=environment`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tessera.json` or `./tessera.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use tessera_domain::constants::{ENV_DB_PATH, ENV_DB_POOL_SIZE, ENV_KEY_ENV_VAR, ENV_KEY_STORAGE};
use tessera_domain::{Config, DatabaseConfig, EncryptionConfig, KeyStorage, Result, TesseraError};

const CONFIG_FILE_NAMES: [&str; 4] = ["tessera.json", "tessera.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `TesseraError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration, using defaults only when no source exists at all
///
/// Environment variables win when `TESSERA_DB_PATH` or `TESSERA_DB_POOL_SIZE`
/// is set, otherwise the first probed config file is read. With neither,
/// [`Config::default`] is returned.
///
/// # Errors
/// Returns `TesseraError::Config` if a present source is incomplete or
/// invalid. A broken source never falls back to defaults.
pub fn load_or_default() -> Result<Config> {
    resolve(probe_config_paths())
}

fn resolve(config_path: Option<PathBuf>) -> Result<Config> {
    let env_present =
        optional_env_var(ENV_DB_PATH).is_some() || optional_env_var(ENV_DB_POOL_SIZE).is_some();

    if env_present {
        return load_from_env();
    }

    match config_path {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("no configuration source found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `TesseraError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var(ENV_DB_PATH)?;
    let db_pool_size = env_var(ENV_DB_POOL_SIZE).and_then(|s| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| TesseraError::Config(format!("Invalid pool size: {}", e)))
    })?;

    let mut encryption = EncryptionConfig::default();
    if let Some(storage) = optional_env_var(ENV_KEY_STORAGE) {
        encryption.key_storage = storage.parse::<KeyStorage>().map_err(|e| {
            TesseraError::Config(format!("Invalid {}: {}", ENV_KEY_STORAGE, e))
        })?;
    }
    if let Some(var_name) = optional_env_var(ENV_KEY_ENV_VAR) {
        encryption.key_env_var = var_name;
    }

    Ok(Config { database: DatabaseConfig { path: db_path, pool_size: db_pool_size }, encryption })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TesseraError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TesseraError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TesseraError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TesseraError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TesseraError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TesseraError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TesseraError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `TesseraError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    optional_env_var(key).ok_or_else(|| {
        TesseraError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
