//! HTTP request handlers (route handlers).
//!
//! Each handler decodes the request, makes at most one storage call, and
//! encodes a JSON response. Failures propagate as `AppError` and are
//! rendered by its `IntoResponse` impl; handlers never write error
//! responses themselves.

use axum::http::Method;

use crate::error::AppError;

/// Account CRUD endpoints
pub mod accounts;
/// Transfer endpoint (accepted, never executed)
pub mod transfer;

/// Method fallback for matched paths.
///
/// Mounted as the `MethodRouter` fallback so an unsupported method on a
/// known path is surfaced as 400 `{"error": "method not allowed <METHOD>"}`
/// rather than the framework's plain 405.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
