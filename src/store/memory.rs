//! In-memory store implementation.
//!
//! Mirrors the read behavior of the Redis backend over an ordered map, so
//! keys are always listed in lexicographic order.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::pattern::pattern_matches;
use super::PokemonStore;
use crate::error::StoreError;

/// Thread-safe in-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given key/value pairs.
    pub fn with_records<K, V>(records: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
    {
        let entries = records
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Stores a raw value, replacing any previous value under the key.
    pub async fn insert(&self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.entries.write().await.insert(key.into(), value.into());
    }

    /// Removes a key, returning whether it existed.
    #[cfg(test)]
    pub(crate) async fn remove(&self, key: &[u8]) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl PokemonStore for MemoryStore {
    async fn list_keys(&self, pattern: &str) -> Result<Vec<Vec<u8>>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .keys()
            .filter(|key| pattern_matches(pattern, &String::from_utf8_lossy(key)))
            .cloned()
            .collect())
    }

    async fn get_value(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::KeyFetch {
                key: String::from_utf8_lossy(key).into_owned(),
                reason: "key does not exist".to_string(),
            })
    }
}
