//! Bank JSON API - Main Application Entry Point
//!
//! A minimal REST API over a single bank-accounts table: create, list,
//! fetch-by-id, delete, plus a transfer endpoint that is accepted but not
//! executed. The single-account path is gated by a bearer JWT bound to the
//! account's number.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: HS256 JWT bound to one account number
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Ensure the accounts table exists (fatal on failure)
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod state;
mod storage;
mod token;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{state::AppState, storage::PostgresStore, token::TokenManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment
    // variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Ensure the accounts table exists; a failure here aborts startup
    db::run_migrations(&pool).await?;
    tracing::info!("Accounts table ensured");

    let state = AppState::new(
        Arc::new(PostgresStore::new(pool)),
        TokenManager::new(&config.jwt_secret),
    );

    let app = router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("JSON API service listening on {}", addr);

    // Serve HTTP requests; each one is handled on an independent task
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
///
/// Method fallbacks turn an unsupported method on a matched path into a
/// 400. On the single-account path the fallback sits behind the
/// authorization gate, so a tokenless request with a wrong method is a
/// 403 rather than a method error.
fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/account",
            get(handlers::accounts::list_accounts)
                .post(handlers::accounts::create_account)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/account/{id}",
            get(handlers::accounts::get_account)
                .delete(handlers::accounts::delete_account)
                .fallback(handlers::method_not_allowed)
                // Token gate: validates the bearer JWT and cross-checks the
                // claimed account number against the stored account
                .layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    middleware::auth::account_guard,
                )),
        )
        .route(
            "/transfer",
            post(handlers::transfer::transfer).fallback(handlers::method_not_allowed),
        )
        // Request tracing for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
