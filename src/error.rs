//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses. The API has exactly two error status codes:
//!
//! - **403 Forbidden** for anything the authorization gate rejects
//! - **400 Bad Request** for every other handler failure
//!
//! Every error response body is the flat shape `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Application-wide error type.
///
/// Each variant carries the message that ends up in the JSON error body.
/// Handlers return `Result<T, AppError>` and never write error responses
/// themselves; the one exception is the single-account GET, which converts
/// `AccountNotFound` into a 200 response carrying the error body (a
/// compatibility quirk, see `handlers::accounts::get_account`).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error).
    ///
    /// The underlying message is surfaced to the caller as a 400. There is
    /// no retry policy anywhere; a storage failure propagates immediately.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The authorization gate rejected the request.
    ///
    /// Deliberately carries no detail: a missing token, a mis-signed token,
    /// an unparseable id, a missing account and an account-number mismatch
    /// all produce this same variant, so the caller cannot tell which check
    /// failed. Returns HTTP 403.
    #[error("permission denied")]
    PermissionDenied,

    /// No account row matches the requested identifier.
    #[error("account {0} not found")]
    AccountNotFound(i64),

    /// A matched path received a method it does not support.
    #[error("method not allowed {0}")]
    MethodNotAllowed(String),

    /// Request body could not be decoded.
    #[error("{0}")]
    InvalidRequest(String),

    /// Token could not be signed.
    #[error("{0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Operation exists on the storage contract but has no semantics yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Serialized error body, also reused by the not-found-as-200 quirk.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `PermissionDenied` → 403 Forbidden
/// - everything else → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::PermissionDenied => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(ApiError {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
