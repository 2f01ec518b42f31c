use std::sync::Arc;

use crate::db::{read_soft, set_json, KvStore, StoreKey};
use crate::error::{AppError, AppResult};
use crate::models::BudgetSettings;

/// Pure budget predicate. `None` or a non-positive limit means "no limit".
pub fn within_budget(price: f64, max_budget: Option<f64>) -> bool {
    match max_budget {
        None => true,
        Some(limit) if limit <= 0.0 => true,
        Some(limit) => price <= limit,
    }
}

/// Persisted global budget ceiling, last-write-wins.
pub struct BudgetService {
    store: Arc<dyn KvStore>,
}

impl BudgetService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Current settings; a failed read degrades to "no limit".
    pub async fn settings(&self) -> BudgetSettings {
        read_soft(self.store.as_ref(), StoreKey::Budget)
            .await
            .unwrap_or_default()
    }

    pub async fn set_max_budget(&self, max_budget: Option<f64>) -> AppResult<BudgetSettings> {
        if let Some(limit) = max_budget {
            // Validation precedes mutation.
            if !limit.is_finite() {
                return Err(AppError::InvalidInput(
                    "Budget must be a finite amount".to_string(),
                ));
            }
        }

        let settings = BudgetSettings { max_budget };
        set_json(self.store.as_ref(), StoreKey::Budget, &settings).await?;

        tracing::info!(max_budget = ?settings.max_budget, "budget updated");

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_no_limit_when_budget_is_absent_or_non_positive() {
        assert!(within_budget(9999.0, None));
        assert!(within_budget(9999.0, Some(0.0)));
        assert!(within_budget(9999.0, Some(-50.0)));
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(within_budget(100.0, Some(100.0)));
        assert!(within_budget(99.99, Some(100.0)));
        assert!(!within_budget(100.01, Some(100.0)));
    }

    #[tokio::test]
    async fn test_settings_default_to_no_limit() {
        let service = BudgetService::new(Arc::new(MemoryStore::new()));
        assert_eq!(service.settings().await, BudgetSettings::default());
    }

    #[tokio::test]
    async fn test_set_and_read_back() {
        let service = BudgetService::new(Arc::new(MemoryStore::new()));

        service.set_max_budget(Some(500.0)).await.unwrap();
        assert_eq!(service.settings().await.max_budget, Some(500.0));

        // Last write wins.
        service.set_max_budget(None).await.unwrap();
        assert_eq!(service.settings().await.max_budget, None);
    }

    #[tokio::test]
    async fn test_non_finite_budget_is_rejected() {
        let service = BudgetService::new(Arc::new(MemoryStore::new()));
        service.set_max_budget(Some(500.0)).await.unwrap();

        let result = service.set_max_budget(Some(f64::NAN)).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        // The rejected write must not have touched persisted state.
        assert_eq!(service.settings().await.max_budget, Some(500.0));
    }

    #[tokio::test]
    async fn test_non_positive_budget_is_stored_as_written() {
        let service = BudgetService::new(Arc::new(MemoryStore::new()));
        service.set_max_budget(Some(0.0)).await.unwrap();
        assert_eq!(service.settings().await.max_budget, Some(0.0));
        assert!(within_budget(123.0, service.settings().await.max_budget));
    }
}
