//! API Handlers
//!
//! The single handler shared by every type route.

use std::sync::Arc;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::config::Config;
use crate::error::{ApiError, Result, StoreError};
use crate::pokemon::{fetch_by_type, PokemonType};
use crate::store::{PokemonStore, RedisStore};

/// Application state shared across all handlers.
///
/// Holds the one store client created at startup; handlers only clone the
/// `Arc`, so every request reuses the same connection.
#[derive(Clone)]
pub struct AppState {
    /// Shared record store
    pub store: Arc<dyn PokemonStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl PokemonStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState backed by Redis at the configured URL.
    pub fn from_config(config: &Config) -> std::result::Result<Self, StoreError> {
        let store = RedisStore::open(&config.redis_url)?;
        Ok(Self::new(store))
    }
}

/// Handler for `GET /<type>`
///
/// Returns every record of `pokemon_type` as a JSON array.
pub async fn list_pokemon(state: AppState, pokemon_type: PokemonType) -> Result<Response> {
    let pokemons = fetch_by_type(state.store.as_ref(), pokemon_type).await?;
    let body = serde_json::to_vec(&pokemons).map_err(ApiError::Encode)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
