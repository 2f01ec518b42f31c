use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::db::{read_soft, set_json, KvStore, StoreKey};
use crate::error::AppResult;
use crate::models::{QuizAnswer, QuizResult, Style, StyleProfile};

use super::quiz;

/// Maintains the persisted style profile and the latest quiz result.
///
/// The profile is created lazily on the first observed signal and removed
/// only by an explicit reset. All read-modify-write sequences are
/// serialized through an in-process mutex, so concurrent observations
/// within one process cannot lose updates.
pub struct ProfileService {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// The stored profile, or `None` while uninitialized.
    pub async fn profile(&self) -> Option<StyleProfile> {
        read_soft(self.store.as_ref(), StoreKey::StyleProfile).await
    }

    /// Records one style/category signal and stamps `last_updated`.
    pub async fn observe(
        &self,
        style: Option<Style>,
        category: Option<&str>,
    ) -> AppResult<StyleProfile> {
        let _guard = self.write_lock.lock().await;

        let now = Utc::now();
        let mut profile = read_soft(self.store.as_ref(), StoreKey::StyleProfile)
            .await
            .unwrap_or_else(|| StyleProfile::new(now));

        if let Some(style) = style {
            profile.bump_style(style);
        }
        if let Some(category) = category {
            profile.bump_category(category);
        }
        profile.last_updated = now;

        set_json(self.store.as_ref(), StoreKey::StyleProfile, &profile).await?;

        tracing::debug!(style = ?style, category = ?category, "preference signal observed");

        Ok(profile)
    }

    pub async fn top_styles(&self, n: usize) -> Vec<(Style, u32)> {
        self.profile()
            .await
            .map(|profile| profile.top_styles(n))
            .unwrap_or_default()
    }

    pub async fn top_category(&self) -> Option<(String, u32)> {
        self.profile().await.and_then(|profile| profile.top_category())
    }

    /// Classifies the answers, persists the result (overwriting any
    /// previous one) and tallies the winning style into the profile.
    pub async fn complete_quiz(&self, answers: Vec<QuizAnswer>) -> AppResult<QuizResult> {
        let style = quiz::classify(&answers);
        let now = Utc::now();
        let result = QuizResult {
            style,
            answers,
            timestamp: now,
        };

        let _guard = self.write_lock.lock().await;

        set_json(self.store.as_ref(), StoreKey::QuizResult, &result).await?;

        let mut profile = read_soft(self.store.as_ref(), StoreKey::StyleProfile)
            .await
            .unwrap_or_else(|| StyleProfile::new(now));
        profile.bump_style(style);
        profile.last_updated = now;
        set_json(self.store.as_ref(), StoreKey::StyleProfile, &profile).await?;

        tracing::info!(style = %style, answers = result.answers.len(), "quiz completed");

        Ok(result)
    }

    /// The latest stored quiz result, if any.
    pub async fn quiz_result(&self) -> Option<QuizResult> {
        read_soft(self.store.as_ref(), StoreKey::QuizResult).await
    }

    /// Clears the profile and the stored quiz result.
    ///
    /// The reset spans two keys. A failure removing the second is retried
    /// once; if it still fails the whole reset is reported as failed, so a
    /// half-cleared state never masquerades as success.
    pub async fn reset(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        self.store.remove(StoreKey::StyleProfile).await?;

        if let Err(first) = self.store.remove(StoreKey::QuizResult).await {
            tracing::warn!(error = %first, "quiz result removal failed, retrying");
            self.store.remove(StoreKey::QuizResult).await?;
        }

        tracing::info!("style profile reset");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(MemoryStore::new()))
    }

    fn answers_all(key: char) -> Vec<QuizAnswer> {
        (1..=5)
            .map(|id| QuizAnswer {
                question_id: id,
                selected_option: key,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_profile_starts_uninitialized() {
        let service = service();
        assert_eq!(service.profile().await, None);
        assert_eq!(service.top_styles(3).await, vec![]);
        assert_eq!(service.top_category().await, None);
    }

    #[tokio::test]
    async fn test_observe_initializes_and_counts() {
        let service = service();

        service.observe(Some(Style::Boho), Some("Sessel")).await.unwrap();
        service.observe(Some(Style::Boho), None).await.unwrap();
        service.observe(None, Some("Lampe")).await.unwrap();

        let profile = service.profile().await.unwrap();
        assert_eq!(profile.styles.get(&Style::Boho), Some(&2));
        assert_eq!(profile.categories.get("Sessel"), Some(&1));
        assert_eq!(profile.categories.get("Lampe"), Some(&1));

        assert_eq!(service.top_styles(1).await, vec![(Style::Boho, 2)]);
    }

    #[tokio::test]
    async fn test_complete_quiz_persists_result_and_activates_profile() {
        let service = service();

        let result = service.complete_quiz(answers_all('A')).await.unwrap();
        assert_eq!(result.style, Style::Skandinavisch);

        let stored = service.quiz_result().await.unwrap();
        assert_eq!(stored.style, Style::Skandinavisch);
        assert_eq!(stored.answers.len(), 5);

        // Quiz completion is a style signal.
        let profile = service.profile().await.unwrap();
        assert_eq!(profile.styles.get(&Style::Skandinavisch), Some(&1));
    }

    #[tokio::test]
    async fn test_quiz_result_is_overwritten() {
        let service = service();

        service.complete_quiz(answers_all('A')).await.unwrap();
        service.complete_quiz(answers_all('D')).await.unwrap();

        let stored = service.quiz_result().await.unwrap();
        assert_eq!(stored.style, Style::Boho);
    }

    #[tokio::test]
    async fn test_reset_clears_both_keys() {
        let service = service();

        service.observe(Some(Style::Industrial), Some("Regal")).await.unwrap();
        service.complete_quiz(answers_all('C')).await.unwrap();

        service.reset().await.unwrap();

        assert_eq!(service.profile().await, None);
        assert_eq!(service.quiz_result().await, None);
    }

    /// Store whose `remove` fails a configurable number of times.
    struct FlakyRemoveStore {
        inner: MemoryStore,
        failures_left: AtomicU32,
        fail_key: StoreKey,
    }

    #[async_trait::async_trait]
    impl KvStore for FlakyRemoveStore {
        async fn get(&self, key: StoreKey) -> AppResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: StoreKey, value: String) -> AppResult<()> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: StoreKey) -> AppResult<()> {
            if key == self.fail_key {
                let left = self.failures_left.load(Ordering::SeqCst);
                if left > 0 {
                    self.failures_left.store(left - 1, Ordering::SeqCst);
                    return Err(AppError::Storage("simulated remove failure".to_string()));
                }
            }
            self.inner.remove(key).await
        }
    }

    #[tokio::test]
    async fn test_reset_retries_second_removal_once() {
        let store = Arc::new(FlakyRemoveStore {
            inner: MemoryStore::new(),
            failures_left: AtomicU32::new(1),
            fail_key: StoreKey::QuizResult,
        });
        let service = ProfileService::new(store);

        service.observe(Some(Style::Boho), None).await.unwrap();
        service.complete_quiz(answers_all('D')).await.unwrap();

        // One transient failure: the retry succeeds and both keys clear.
        service.reset().await.unwrap();
        assert_eq!(service.profile().await, None);
        assert_eq!(service.quiz_result().await, None);
    }

    #[tokio::test]
    async fn test_reset_reports_failure_when_retry_fails() {
        let store = Arc::new(FlakyRemoveStore {
            inner: MemoryStore::new(),
            failures_left: AtomicU32::new(2),
            fail_key: StoreKey::QuizResult,
        });
        let service = ProfileService::new(store);

        service.complete_quiz(answers_all('D')).await.unwrap();

        // Both the removal and its retry fail: the reset reports failure
        // instead of claiming a half-cleared success.
        let result = service.reset().await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
