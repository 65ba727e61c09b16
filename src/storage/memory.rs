//! In-memory storage backend for tests.
//!
//! Implements the same `Storage` contract as `PostgresStore`, so handlers
//! and the authorization gate can be exercised without a live database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::AppError, models::account::Account, storage::Storage};

/// In-memory account store with a monotonically increasing id counter.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    accounts: Vec<Account>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn create_account(&self, mut account: Account) -> Result<Account, AppError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        account.id = inner.next_id;
        inner.accounts.push(account.clone());
        Ok(account)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        let inner = self.inner.read().await;
        // Ids are assigned in insertion order, so the vec is already
        // sorted ascending.
        Ok(inner.accounts.clone())
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Account, AppError> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn update_account(&self, _account: &Account) -> Result<(), AppError> {
        Err(AppError::NotImplemented("update_account"))
    }

    async fn delete_account(&self, id: i64) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.accounts.len();
        inner.accounts.retain(|a| a.id != id);
        Ok((before - inner.accounts.len()) as u64)
    }
}
