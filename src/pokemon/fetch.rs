//! Record fetch routine.

use tracing::debug;

use super::model::{key_pattern, Pokemon, PokemonType};
use crate::error::{ApiError, Result};
use crate::store::PokemonStore;

/// Loads every record stored under `pokemon:<type>:*`.
///
/// Keys are fetched one after another in the order the store listed them,
/// and the result keeps that order. The first failing key aborts the whole
/// operation; no partial list is ever returned. No matching keys yields an
/// empty list. Invalid UTF-8 in a stored value is replaced with U+FFFD
/// before decoding.
pub async fn fetch_by_type(
    store: &dyn PokemonStore,
    pokemon_type: PokemonType,
) -> Result<Vec<Pokemon>> {
    let pattern = key_pattern(pokemon_type);
    let keys = store.list_keys(&pattern).await?;
    debug!(%pokemon_type, count = keys.len(), "Listed record keys");

    let mut pokemons = Vec::with_capacity(keys.len());
    for key in keys {
        let data = store.get_value(&key).await?;
        let pokemon = serde_json::from_str(&String::from_utf8_lossy(&data)).map_err(|source| {
            ApiError::Deserialize {
                key: String::from_utf8_lossy(&key).into_owned(),
                source,
            }
        })?;
        pokemons.push(pokemon);
    }

    Ok(pokemons)
}
