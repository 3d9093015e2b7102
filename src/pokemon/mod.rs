//! Pokemon Module
//!
//! Record model, the fixed set of supported types, and the routine that
//! loads every record of one type from the store.

mod fetch;
mod model;


// Re-export public types
pub use fetch::fetch_by_type;
pub use model::{key_pattern, Pokemon, PokemonType, KEY_PREFIX};
