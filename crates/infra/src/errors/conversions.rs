//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use rusqlite::Error as SqlError;
use tessera_common::crypto::CryptoError;
use tessera_common::security::KeychainError;
use tessera_common::storage::StorageError;
use tessera_domain::TesseraError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TesseraError);

impl From<InfraError> for TesseraError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TesseraError> for InfraError {
    fn from(value: TesseraError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTesseraError {
    fn into_tessera(self) -> TesseraError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → TesseraError */
/* -------------------------------------------------------------------------- */

impl IntoTesseraError for SqlError {
    fn into_tessera(self) -> TesseraError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        TesseraError::Storage("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        TesseraError::Storage("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 1299) => {
                        TesseraError::Storage(format!("not null constraint violation: {message}"))
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        TesseraError::Storage("unique constraint violation".into())
                    }
                    (ErrorCode::NotADatabase, _) => {
                        TesseraError::Storage("file is not a database".into())
                    }
                    _ => TesseraError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => TesseraError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                TesseraError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                TesseraError::Storage(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => TesseraError::Storage("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidPath(path) => TesseraError::Storage(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => TesseraError::Storage("invalid SQL query".into()),
            other => TesseraError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_tessera())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → TesseraError */
/* -------------------------------------------------------------------------- */

impl IntoTesseraError for StorageError {
    fn into_tessera(self) -> TesseraError {
        match self {
            StorageError::Rusqlite(err) => err.into_tessera(),
            StorageError::InvalidConfig(message) => TesseraError::Config(message),
            other => TesseraError::Storage(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_tessera())
    }
}

/* -------------------------------------------------------------------------- */
/* CryptoError → TesseraError */
/* -------------------------------------------------------------------------- */

impl IntoTesseraError for CryptoError {
    fn into_tessera(self) -> TesseraError {
        TesseraError::Crypto(self.to_string())
    }
}

impl From<CryptoError> for InfraError {
    fn from(value: CryptoError) -> Self {
        InfraError(value.into_tessera())
    }
}

/* -------------------------------------------------------------------------- */
/* keyring::Error / KeychainError → TesseraError */
/* -------------------------------------------------------------------------- */

impl IntoTesseraError for KeyringError {
    fn into_tessera(self) -> TesseraError {
        use KeyringError::*;

        let description = self.to_string();

        match self {
            NoEntry => TesseraError::NotFound("keychain entry not found".into()),
            BadEncoding(_) => {
                TesseraError::Crypto("credential in keychain is not valid UTF-8".into())
            }
            Ambiguous(entries) => TesseraError::Crypto(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => TesseraError::Crypto(format!("keychain platform error: {err}")),
            NoStorageAccess(err) => {
                TesseraError::Crypto(format!("unable to access secure storage: {err}"))
            }
            _ => TesseraError::Crypto(description),
        }
    }
}

impl IntoTesseraError for KeychainError {
    fn into_tessera(self) -> TesseraError {
        match self {
            KeychainError::NotFound => TesseraError::NotFound("keychain entry not found".into()),
            KeychainError::AccessFailed(message) => {
                TesseraError::Crypto(format!("keychain access failed: {message}"))
            }
            KeychainError::Keyring(err) => err.into_tessera(),
        }
    }
}

impl From<KeychainError> for InfraError {
    fn from(value: KeychainError) -> Self {
        InfraError(value.into_tessera())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → TesseraError */
/* -------------------------------------------------------------------------- */

impl IntoTesseraError for JoinError {
    fn into_tessera(self) -> TesseraError {
        if self.is_panic() {
            TesseraError::Internal("blocking task panicked".into())
        } else {
            TesseraError::Internal(format!("blocking task failed: {self}"))
        }
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(value.into_tessera())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use rusqlite::ffi::{Error as FfiError, ErrorCode};
    use rusqlite::Error as SqlError;

    use super::*;

    #[test]
    fn sqlite_busy_maps_to_storage_error() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::DatabaseBusy, extended_code: 5 },
            Some("database is locked".into()),
        );

        let mapped: TesseraError = InfraError::from(err).into();
        match mapped {
            TesseraError::Storage(msg) => {
                assert!(msg.contains("busy") || msg.contains("locked"));
            }
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[test]
    fn not_null_violation_maps_to_storage_error() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::ConstraintViolation, extended_code: 1299 },
            Some("NOT NULL constraint failed: users.name".into()),
        );

        let mapped: TesseraError = InfraError::from(err).into();
        assert!(matches!(mapped, TesseraError::Storage(ref msg) if msg.contains("users.name")));
    }

    #[test]
    fn storage_error_unwraps_rusqlite_source() {
        let err = StorageError::Rusqlite(SqlError::QueryReturnedNoRows);
        let mapped: TesseraError = InfraError::from(err).into();
        assert!(matches!(mapped, TesseraError::NotFound(_)));

        let mapped: TesseraError = InfraError::from(StorageError::Timeout(5)).into();
        assert_eq!(mapped, TesseraError::Storage("Connection timeout after 5s".into()));

        let mapped: TesseraError =
            InfraError::from(StorageError::InvalidConfig("pool_size".into())).into();
        assert_eq!(mapped, TesseraError::Config("pool_size".into()));
    }

    #[test]
    fn crypto_error_keeps_message() {
        let mapped: TesseraError = InfraError::from(CryptoError::Authentication).into();
        match mapped {
            TesseraError::Crypto(msg) => assert!(msg.contains("authentication")),
            other => panic!("expected crypto error, got {:?}", other),
        }
    }

    #[test]
    fn keyring_no_entry_maps_to_not_found() {
        let err = KeyringError::NoEntry;
        let mapped: TesseraError = InfraError::from(KeychainError::Keyring(err)).into();
        match mapped {
            TesseraError::NotFound(msg) => assert!(msg.contains("keychain")),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn keychain_access_failure_maps_to_crypto() {
        let mapped: TesseraError =
            InfraError::from(KeychainError::AccessFailed("locked".into())).into();
        assert!(matches!(mapped, TesseraError::Crypto(ref msg) if msg.contains("locked")));
    }

    #[tokio::test]
    async fn panicking_task_maps_to_internal() {
        let join_err = tokio::spawn(async { panic!("boom") }).await.unwrap_err();
        let mapped: TesseraError = InfraError::from(join_err).into();
        assert_eq!(mapped, TesseraError::Internal("blocking task panicked".into()));
    }
}
