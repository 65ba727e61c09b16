//! Token authorization gate for the single-account path.
//!
//! This middleware wraps `/account/{id}` to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Validate its signature and parse the claims
//! 3. Parse the `id` path segment
//! 4. Load the account and compare its number against the token's claim
//! 5. Reject any failure with HTTP 403
//!
//! It is a pure gate: it never mutates state, never answers with any
//! status other than 403, and performs a fresh account lookup on every
//! request (authorization decisions are not cached).

use axum::{
    extract::{Path, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Authorization middleware for `/account/{id}`.
///
/// Every failure mode folds into the same `PermissionDenied` outcome:
/// a missing or mis-signed token, an `id` segment that does not parse,
/// an account that does not exist, and an account-number mismatch are
/// all answered with 403 `{"error": "permission denied"}` so the caller
/// cannot tell which check failed.
pub async fn account_guard(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Strip a "Bearer " prefix if present; a missing header leaves an
    // empty candidate that fails validation below.
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let claims = state
        .tokens
        .validate(token)
        .map_err(|_| AppError::PermissionDenied)?;

    // Parse failures are folded into the denied outcome, not a 400.
    let id: i64 = id.parse().map_err(|_| AppError::PermissionDenied)?;

    let account = state
        .store
        .get_account_by_id(id)
        .await
        .map_err(|_| AppError::PermissionDenied)?;

    if account.number != claims.account_number {
        tracing::warn!(
            account_id = id,
            "token account number does not match requested account"
        );
        return Err(AppError::PermissionDenied);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers,
        models::account::Account,
        storage::{MemoryStore, Storage},
        token::TokenManager,
    };
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware as axum_middleware,
        routing::get,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), TokenManager::new("test-secret"))
    }

    /// The gated `/account/{id}` route as composed in `main`.
    fn gated_app(state: AppState) -> Router {
        Router::new()
            .route(
                "/account/{id}",
                get(handlers::accounts::get_account)
                    .delete(handlers::accounts::delete_account)
                    .fallback(handlers::method_not_allowed)
                    .layer(axum_middleware::from_fn_with_state(
                        state.clone(),
                        account_guard,
                    )),
            )
            .with_state(state)
    }

    async fn create(state: &AppState, first: &str, last: &str) -> Account {
        state
            .store
            .create_account(Account::new(first.to_string(), last.to_string()))
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn own_token_passes_the_gate() {
        let state = test_state();
        let account = create(&state, "Ada", "Lovelace").await;
        let token = state.tokens.issue(&account).unwrap();

        let response = gated_app(state)
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri(format!("/account/{}", account.id))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], account.id);
        assert_eq!(body["firstName"], "Ada");
    }

    #[tokio::test]
    async fn other_accounts_token_is_denied() {
        let state = test_state();
        let owner = create(&state, "Ada", "Lovelace").await;
        let intruder = create(&state, "Alan", "Turing").await;
        let intruder_token = state.tokens.issue(&intruder).unwrap();

        let response = gated_app(state)
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri(format!("/account/{}", owner.id))
                    .header("Authorization", format!("Bearer {intruder_token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"], "permission denied");
    }

    #[tokio::test]
    async fn missing_token_is_denied() {
        let state = test_state();
        let account = create(&state, "Ada", "Lovelace").await;

        let response = gated_app(state)
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri(format!("/account/{}", account.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unparseable_id_is_denied_not_a_400() {
        let state = test_state();
        let account = create(&state, "Ada", "Lovelace").await;
        let token = state.tokens.issue(&account).unwrap();

        let response = gated_app(state)
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri("/account/not-a-number")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"], "permission denied");
    }

    #[tokio::test]
    async fn unknown_account_id_is_denied() {
        let state = test_state();
        let account = create(&state, "Ada", "Lovelace").await;
        let token = state.tokens.issue(&account).unwrap();

        let response = gated_app(state)
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri("/account/9999")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn delete_with_own_token_succeeds() {
        let state = test_state();
        let account = create(&state, "Ada", "Lovelace").await;
        let token = state.tokens.issue(&account).unwrap();
        let store = Arc::clone(&state.store);

        let response = gated_app(state)
            .oneshot(
                HttpRequest::builder()
                    .method("DELETE")
                    .uri(format!("/account/{}", account.id))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["deleted"], account.id);
        assert!(store.get_account_by_id(account.id).await.is_err());
    }

    #[tokio::test]
    async fn unsupported_method_still_sits_behind_the_gate() {
        let state = test_state();
        let account = create(&state, "Ada", "Lovelace").await;

        // No token: the gate answers before the method fallback does.
        let response = gated_app(state)
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri(format!("/account/{}", account.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
