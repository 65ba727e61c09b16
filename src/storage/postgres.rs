//! PostgreSQL-backed storage implementation.

use async_trait::async_trait;

use crate::{db::DbPool, error::AppError, models::account::Account, storage::Storage};

/// Production storage over the shared sqlx connection pool.
///
/// No explicit transactions are opened here; every method is a single
/// statement and relies on the database's own guarantees.
#[derive(Clone)]
pub struct PostgresStore {
    pool: DbPool,
}

impl PostgresStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PostgresStore {
    async fn create_account(&self, account: Account) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.number)
        .bind(account.balance)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM accounts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Account, AppError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::AccountNotFound(id))
    }

    async fn update_account(&self, _account: &Account) -> Result<(), AppError> {
        Err(AppError::NotImplemented("update_account"))
    }

    async fn delete_account(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let rows = result.rows_affected();
        tracing::debug!(account_id = id, rows_affected = rows, "deleted account rows");

        Ok(rows)
    }
}
