//! Integration tests for configuration serialization
//!
//! The loader accepts JSON and TOML; both must describe the same `Config`.

use tessera_domain::{Config, KeyStorage, TesseraError};

#[test]
fn toml_and_json_describe_the_same_config() {
    let toml_src = r#"
        [database]
        path = "data/users.db"
        pool_size = 2

        [encryption]
        key_storage = "environment"
        key_env_var = "MY_FIELD_KEY"
    "#;
    let json_src = r#"{
        "database": {"path": "data/users.db", "pool_size": 2},
        "encryption": {"key_storage": "environment", "key_env_var": "MY_FIELD_KEY"}
    }"#;

    let from_toml: Config = toml::from_str(toml_src).unwrap();
    let from_json: Config = serde_json::from_str(json_src).unwrap();

    assert_eq!(from_toml, from_json);
    assert_eq!(from_toml.encryption.key_storage, KeyStorage::Environment);
    assert_eq!(from_toml.encryption.keychain_service, "com.tessera.app");
}

#[test]
fn unknown_key_storage_is_rejected() {
    let result: Result<Config, _> =
        serde_json::from_str(r#"{"encryption": {"key_storage": "vault"}}"#);
    assert!(result.is_err());
}

#[test]
fn errors_round_trip_through_json() {
    let err = TesseraError::Storage("database is locked".into());
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"type":"Storage","message":"database is locked"}"#);
}
