//! Store Module
//!
//! Read-only access to the key-value store holding serialized Pokemon records.
//! Backends implement [`PokemonStore`]; Redis in production, an in-memory map
//! for tests and local runs.

mod memory;
mod pattern;
mod redis_store;
mod traits;

pub use memory::MemoryStore;
pub use pattern::pattern_matches;
pub use redis_store::RedisStore;
pub use traits::PokemonStore;
