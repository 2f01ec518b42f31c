use redis::{AsyncCommands, Client};

use super::{KvStore, StoreKey};
use crate::error::{AppError, AppResult};

/// Creates a Redis client for the durable store
///
/// Uses connection pooling via the connection-manager feature.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Durable store backed by Redis.
///
/// Values are persisted without TTL: this is durable preference and
/// tracking state, not a cache.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: StoreKey) -> AppResult<Option<String>> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let value: Option<String> = conn
            .get(key.to_string())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(value)
    }

    async fn set(&self, key: StoreKey, value: String) -> AppResult<()> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let _: () = conn
            .set(key.to_string(), value)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        tracing::debug!(key = %key, "store value persisted");

        Ok(())
    }

    async fn remove(&self, key: StoreKey) -> AppResult<()> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let _: () = conn
            .del(key.to_string())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(())
    }
}
