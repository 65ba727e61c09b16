//! Data models representing database entities and API payloads.

/// Bank account entity and request types
pub mod account;
