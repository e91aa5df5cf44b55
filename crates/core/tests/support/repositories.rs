//! Mock repository implementations for testing
//!
//! In-memory mocks for the user port, so service tests run without a
//! database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tessera_core::UserRepository;
use tessera_domain::{NewUser, Result as DomainResult, TesseraError, User};

/// In-memory `UserRepository` with monotonic ids.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    rows: Vec<User>,
    next_id: i64,
    create_calls: usize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.lock().unwrap().rows.clone())
    }

    async fn create(&self, user: NewUser) -> DomainResult<i64> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        state.next_id += 1;
        let id = state.next_id;
        state.rows.push(user.into_user(id));
        Ok(id)
    }

    async fn remove(&self, id: i64) -> DomainResult<()> {
        self.state.lock().unwrap().rows.retain(|user| user.id != id);
        Ok(())
    }
}

/// Repository whose every call fails with the configured error.
#[derive(Clone)]
pub struct FailingUserRepository {
    error: TesseraError,
}

impl FailingUserRepository {
    pub fn new(error: TesseraError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Err(self.error.clone())
    }

    async fn create(&self, _user: NewUser) -> DomainResult<i64> {
        Err(self.error.clone())
    }

    async fn remove(&self, _id: i64) -> DomainResult<()> {
        Err(self.error.clone())
    }
}
