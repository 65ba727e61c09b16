//! Account data model and API request types.
//!
//! This module defines:
//! - `Account`: database entity representing a bank account
//! - `CreateAccountRequest`: request body for creating accounts
//! - `TransferRequest`: request body for the transfer endpoint

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Represents an account row from the database.
///
/// Maps to the `accounts` table. JSON serialization uses camelCase field
/// names (`firstName`, `createdAt`, ...).
///
/// # Invariants
///
/// - `id` is assigned by storage, unique, and immutable once assigned
/// - `number` comes from a random generator and is NOT guaranteed unique;
///   no database constraint enforces it
/// - `balance` is initialized to zero and never mutated in practice
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier, populated by storage on insert
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Account number, caller-supplied at creation time via the generator
    pub number: i64,

    pub balance: f64,

    /// Timestamp assigned when the account value is constructed
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Construct a not-yet-persisted account with a freshly generated
    /// account number and a zero balance.
    ///
    /// The `id` field is a placeholder until storage assigns the real one.
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: 0,
            first_name,
            last_name,
            number: rand::rng().random_range(100_000..1_000_000),
            balance: 0.0,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a new account.
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
///
/// Transient: used only to construct an `Account`, then echoed back to the
/// caller in the 201 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Request body for the transfer endpoint.
///
/// ```json
/// {
///   "toAccount": 7,
///   "amount": 100
/// }
/// ```
///
/// Accepted and echoed back; never applied to any balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_account: i64,
    pub amount: f64,
}
