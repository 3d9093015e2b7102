//! Redis store implementation.
//!
//! A single client is opened at startup and shared by every request. The
//! connection itself is established lazily on first use and multiplexed
//! through a [`ConnectionManager`], so the process starts even when Redis is
//! down and requests fail until it becomes reachable.

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use super::PokemonStore;
use crate::error::StoreError;

/// Redis-backed record store.
pub struct RedisStore {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
}

impl RedisStore {
    /// Creates a store for the given Redis URL (e.g. `redis://localhost:6379/0`).
    ///
    /// Only the URL is validated here; no connection is attempted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the URL cannot be parsed.
    pub fn open(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    /// Returns a handle to the shared connection, connecting on first use.
    ///
    /// A failed attempt leaves the cell empty so the next call retries.
    async fn connection(&self) -> Result<ConnectionManager, StoreError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                debug!("Connecting to Redis");
                // One attempt per request; failures surface instead of being retried
                let config = ConnectionManagerConfig::new().set_number_of_retries(0);
                self.client
                    .get_connection_manager_with_config(config)
                    .await
                    .map_err(|err| {
                        warn!(error = %err, "Redis connection failed");
                        map_redis_error(err)
                    })
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl PokemonStore for RedisStore {
    async fn list_keys(&self, pattern: &str) -> Result<Vec<Vec<u8>>, StoreError> {
        let mut conn = self.connection().await?;
        let keys: Vec<Vec<u8>> = conn.keys(pattern).await.map_err(map_redis_error)?;
        Ok(keys)
    }

    async fn get_value(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        let key_fetch = |reason: String| StoreError::KeyFetch {
            key: String::from_utf8_lossy(key).into_owned(),
            reason,
        };

        let mut conn = self
            .connection()
            .await
            .map_err(|err| key_fetch(err.to_string()))?;
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|err| key_fetch(err.to_string()))?;

        value.ok_or_else(|| key_fetch("key does not exist".to_string()))
    }
}

/// Maps Redis errors that make the store unusable to `StoreError::Unavailable`.
fn map_redis_error(err: redis::RedisError) -> StoreError {
    StoreError::Unavailable(err.to_string())
}
