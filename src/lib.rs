//! Pokemon API - A small read-only HTTP service
//!
//! Serves Pokemon records grouped by type, read from a Redis key-value store.

pub mod api;
pub mod config;
pub mod error;
pub mod pokemon;
pub mod store;

pub use api::AppState;
pub use config::Config;
