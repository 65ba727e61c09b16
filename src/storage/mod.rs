//! Storage abstraction over the accounts table.
//!
//! The `Storage` trait is the capability contract for account persistence.
//! There are two implementations:
//!
//! - `PostgresStore`: the production backend over a sqlx pool
//! - `MemoryStore`: an in-memory fake used by handler and middleware tests

use async_trait::async_trait;

use crate::{error::AppError, models::account::Account};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Capability contract for account persistence.
///
/// All durable state lives behind this trait; handlers hold only transient,
/// request-scoped copies of accounts.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist a new account and return it with the generated id populated.
    async fn create_account(&self, account: Account) -> Result<Account, AppError>;

    /// All accounts ordered by id ascending. An empty table yields an empty
    /// vec, not an error.
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// The account with the given id, or `AccountNotFound`.
    async fn get_account_by_id(&self, id: i64) -> Result<Account, AppError>;

    /// Contractually a no-op in this design. Always fails with
    /// `NotImplemented` so misuse surfaces instead of silently succeeding.
    async fn update_account(&self, account: &Account) -> Result<(), AppError>;

    /// Delete the account row, returning the number of rows affected.
    /// Zero rows affected is a successful no-op, not a failure.
    async fn delete_account(&self, id: i64) -> Result<u64, AppError>;
}
