//! In-memory [`KvStore`] implementation for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{KvStore, StoreKey};
use crate::error::{AppError, AppResult};

/// Process-local store. Contents do not survive a restart, which is fine
/// for tests; production wiring uses [`super::RedisStore`].
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: StoreKey) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(entries.get(&key.to_string()).cloned())
    }

    async fn set(&self, key: StoreKey, value: String) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: StoreKey) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        entries.remove(&key.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();

        tokio_test::block_on(async {
            assert_eq!(store.get(StoreKey::Budget).await.unwrap(), None);

            store
                .set(StoreKey::Budget, r#"{"max_budget":100.0}"#.to_string())
                .await
                .unwrap();
            assert_eq!(
                store.get(StoreKey::Budget).await.unwrap().as_deref(),
                Some(r#"{"max_budget":100.0}"#)
            );

            store.remove(StoreKey::Budget).await.unwrap();
            assert_eq!(store.get(StoreKey::Budget).await.unwrap(), None);

            // Removing an absent key is a no-op, not an error.
            store.remove(StoreKey::Budget).await.unwrap();
        });
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();

        tokio_test::block_on(async {
            store
                .set(StoreKey::StyleProfile, "a".to_string())
                .await
                .unwrap();
            store.set(StoreKey::QuizResult, "b".to_string()).await.unwrap();

            store.remove(StoreKey::StyleProfile).await.unwrap();
            assert_eq!(
                store.get(StoreKey::QuizResult).await.unwrap().as_deref(),
                Some("b")
            );
        });
    }
}
