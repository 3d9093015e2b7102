//! API Routes
//!
//! Configures the Axum router with one route per Pokemon type.

use axum::{extract::State, routing::any, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{list_pokemon, AppState};
use crate::pokemon::PokemonType;

/// Creates the main router with all endpoints configured.
///
/// Every entry of [`PokemonType::ALL`] gets a route at its path, bound to
/// the shared [`list_pokemon`] handler. Routes answer any method the same
/// way. Other paths fall through to the default 404.
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();

    for pokemon_type in PokemonType::ALL {
        router = router.route(
            pokemon_type.route(),
            any(move |State(state): State<AppState>| list_pokemon(state, pokemon_type)),
        );
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
