//! Error types for the Pokemon API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

// == Store Error Enum ==
/// Failures reported by a [`PokemonStore`](crate::store::PokemonStore) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store connection cannot be used (refused, dropped, timed out, bad URL)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A listed key could not be retrieved
    #[error("Failed to fetch key '{key}': {reason}")]
    KeyFetch { key: String, reason: String },
}

// == Api Error Enum ==
/// Unified error type for the HTTP layer.
///
/// Every variant is answered with a plain-text 500; nothing is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A store operation failed while fetching records
    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] StoreError),

    /// A stored value is not a valid record
    #[error("Invalid record under '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The assembled result could not be serialized
    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// Generic message exposed to clients; details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::FetchFailed(_) | ApiError::Deserialize { .. } => "Failed to fetch data",
            ApiError::Encode(_) => "Failed to encode data",
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message(),
        )
            .into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokemon API.
pub type Result<T> = std::result::Result<T, ApiError>;
