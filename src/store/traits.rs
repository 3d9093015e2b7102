use async_trait::async_trait;

use crate::error::StoreError;

/// Read operations the record fetch routine needs from a key-value store.
///
/// Keys and values are raw bytes; nothing is assumed about their encoding.
#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// Lists every key matching a glob-style pattern.
    ///
    /// No pagination and no ordering guarantee beyond what the backend returns.
    async fn list_keys(&self, pattern: &str) -> Result<Vec<Vec<u8>>, StoreError>;

    /// Returns the raw serialized value stored under `key`.
    ///
    /// A key that no longer exists is reported as [`StoreError::KeyFetch`].
    async fn get_value(&self, key: &[u8]) -> Result<Vec<u8>, StoreError>;
}
