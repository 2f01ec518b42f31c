pub mod memory;
pub mod redis;

pub use memory::MemoryStore;
pub use redis::{create_redis_client, RedisStore};

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Logical keys of the durable store.
///
/// Each key holds one serialized collection or record; mutations always
/// rewrite the full value (the store offers no partial writes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Budget,
    StyleProfile,
    QuizResult,
    TrackedProducts,
    PriceAlerts,
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKey::Budget => write!(f, "budget"),
            StoreKey::StyleProfile => write!(f, "style-profile"),
            StoreKey::QuizResult => write!(f, "quiz-result"),
            StoreKey::TrackedProducts => write!(f, "tracked-products"),
            StoreKey::PriceAlerts => write!(f, "price-alerts"),
        }
    }
}

/// Generic durable key→string store.
///
/// The store itself is an external collaborator: get/set/remove by key,
/// no transactions, no locking. Services serialize their own
/// read-modify-write sequences on top of it.
#[async_trait::async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: StoreKey) -> AppResult<Option<String>>;
    async fn set(&self, key: StoreKey, value: String) -> AppResult<()>;
    async fn remove(&self, key: StoreKey) -> AppResult<()>;
}

/// Reads and deserializes a value. Corrupt payloads are an error here;
/// callers on read paths usually go through [`read_soft`] instead.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: StoreKey,
) -> AppResult<Option<T>> {
    match store.get(key).await? {
        Some(json) => {
            let value = serde_json::from_str(&json).map_err(|e| {
                AppError::Internal(format!("Store deserialization error for {}: {}", key, e))
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Serializes and persists a value. Write failures propagate: a caller
/// must never be told a write succeeded when it did not.
pub async fn set_json<T: Serialize>(
    store: &dyn KvStore,
    key: StoreKey,
    value: &T,
) -> AppResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("Store serialization error for {}: {}", key, e)))?;
    store.set(key, json).await
}

/// Read-soft policy: a failed or corrupt read degrades to "nothing stored"
/// instead of failing the operation. Losing a read is recoverable; the
/// warning keeps it visible.
pub async fn read_soft<T: DeserializeOwned>(store: &dyn KvStore, key: StoreKey) -> Option<T> {
    match get_json(store, key).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "store read failed, treating as empty");
            None
        }
    }
}
