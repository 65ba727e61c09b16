//! HTTP middleware components.

/// Token authorization gate for the single-account path
pub mod auth;
