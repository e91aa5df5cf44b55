//! In-memory secret store.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::security::{KeychainError, SecretStore};

/// Secret store that keeps entries in memory.
///
/// Clones share the same entries, so a clone handed to the code under test
/// can be inspected afterwards.
#[derive(Clone, Debug, Default)]
pub struct MemorySecretStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_access: Arc<Mutex<bool>>,
}

impl MemorySecretStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`KeychainError::AccessFailed`].
    pub fn fail_access(&self, fail: bool) {
        *self.fail_access.lock() = fail;
    }

    /// Whether a secret exists for `account`.
    pub fn contains(&self, account: &str) -> bool {
        self.entries.lock().contains_key(account)
    }

    /// Number of stored secrets.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn check_access(&self) -> Result<(), KeychainError> {
        if *self.fail_access.lock() {
            return Err(KeychainError::AccessFailed("keychain locked".to_string()));
        }
        Ok(())
    }
}

impl SecretStore for MemorySecretStore {
    fn get_secret(&self, account: &str) -> Result<String, KeychainError> {
        self.check_access()?;
        self.entries.lock().get(account).cloned().ok_or(KeychainError::NotFound)
    }

    fn set_secret(&self, account: &str, value: &str) -> Result<(), KeychainError> {
        self.check_access()?;
        self.entries.lock().insert(account.to_string(), value.to_string());
        Ok(())
    }

    fn delete_secret(&self, account: &str) -> Result<(), KeychainError> {
        self.check_access()?;
        self.entries.lock().remove(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for testing::secrets.
    use super::*;

    #[test]
    fn set_get_and_delete_secret() {
        let store = MemorySecretStore::new();

        store.set_secret("field_key", "abc").unwrap();
        assert_eq!(store.get_secret("field_key").unwrap(), "abc");
        assert!(store.contains("field_key"));

        store.delete_secret("field_key").unwrap();
        store.delete_secret("field_key").unwrap();
        assert!(matches!(store.get_secret("field_key"), Err(KeychainError::NotFound)));
        assert!(store.is_empty());
    }

    #[test]
    fn fail_access_rejects_every_call() {
        let store = MemorySecretStore::new();
        store.fail_access(true);

        assert!(matches!(store.get_secret("k"), Err(KeychainError::AccessFailed(_))));
        assert!(matches!(store.set_secret("k", "v"), Err(KeychainError::AccessFailed(_))));
    }
}
