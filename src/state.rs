//! Shared application state.

use std::sync::Arc;

use crate::{storage::Storage, token::TokenManager};

/// State shared with all handlers via Axum's `State` extraction.
///
/// Holds the storage capability behind a trait object (production code
/// injects `PostgresStore`, tests inject `MemoryStore`) and the token
/// manager built from the configured secret. Cloning is cheap; there is
/// no other shared mutable in-process state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub tokens: TokenManager,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>, tokens: TokenManager) -> Self {
        Self { store, tokens }
    }
}
