use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::{read_soft, set_json, KvStore, StoreKey};
use crate::error::{AppError, AppResult};
use crate::models::{FurnitureItem, PriceAlert, TrackedProduct};

/// Price tracking and alerting over two persisted collections.
///
/// Tracked products and price alerts are independent collections; they
/// share this service so the business rules that span both (price
/// refreshes re-deriving `triggered`) stay in one place. Every mutation
/// loads the full collection, applies the change and persists the full
/// collection back; the mutex serializes those sequences in-process.
pub struct PriceTracker {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl PriceTracker {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_tracked(&self) -> Vec<TrackedProduct> {
        read_soft(self.store.as_ref(), StoreKey::TrackedProducts)
            .await
            .unwrap_or_default()
    }

    async fn load_alerts(&self) -> Vec<PriceAlert> {
        read_soft(self.store.as_ref(), StoreKey::PriceAlerts)
            .await
            .unwrap_or_default()
    }

    // --- tracked products ---

    pub async fn tracked(&self) -> Vec<TrackedProduct> {
        self.load_tracked().await
    }

    /// Starts watching an item. Re-tracking an already-watched id is a
    /// no-op that returns the existing entry.
    pub async fn track(&self, item: &FurnitureItem) -> AppResult<TrackedProduct> {
        let _guard = self.write_lock.lock().await;

        let mut tracked = self.load_tracked().await;
        if let Some(existing) = tracked.iter().find(|t| t.id == item.id) {
            return Ok(existing.clone());
        }

        let entry = TrackedProduct::from_item(item, Utc::now());
        tracked.push(entry.clone());
        set_json(self.store.as_ref(), StoreKey::TrackedProducts, &tracked).await?;

        tracing::info!(product_id = %entry.id, price = entry.original_price, "product tracked");

        Ok(entry)
    }

    /// Stops watching; absent ids are a no-op.
    pub async fn untrack(&self, id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut tracked = self.load_tracked().await;
        let before = tracked.len();
        tracked.retain(|t| t.id != id);

        if tracked.len() != before {
            set_json(self.store.as_ref(), StoreKey::TrackedProducts, &tracked).await?;
            tracing::info!(product_id = %id, "product untracked");
        }

        Ok(())
    }

    /// Tracked entries whose current price fell below the original.
    pub async fn price_drops(&self) -> Vec<TrackedProduct> {
        self.load_tracked()
            .await
            .into_iter()
            .filter(TrackedProduct::has_price_drop)
            .collect()
    }

    /// Overwrites the current price of a tracked product and refreshes the
    /// alert for the same product, re-deriving its `triggered` flag.
    /// Unknown ids are a no-op.
    pub async fn update_price(&self, id: &str, new_price: f64) -> AppResult<()> {
        if !new_price.is_finite() || new_price < 0.0 {
            return Err(AppError::InvalidInput(
                "Price must be a non-negative number".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;

        let mut tracked = self.load_tracked().await;
        if let Some(entry) = tracked.iter_mut().find(|t| t.id == id) {
            entry.current_price = new_price;
            set_json(self.store.as_ref(), StoreKey::TrackedProducts, &tracked).await?;
            tracing::debug!(product_id = %id, price = new_price, "tracked price updated");
        }

        let mut alerts = self.load_alerts().await;
        let mut refreshed = None;
        if let Some(alert) = alerts.iter_mut().find(|a| a.product_id == id) {
            alert.set_current_price(new_price);
            refreshed = Some(alert.triggered);
        }
        if let Some(triggered) = refreshed {
            set_json(self.store.as_ref(), StoreKey::PriceAlerts, &alerts).await?;
            tracing::debug!(product_id = %id, triggered, "alert price refreshed");
        }

        Ok(())
    }

    // --- price alerts ---

    pub async fn alerts(&self) -> Vec<PriceAlert> {
        self.load_alerts().await
    }

    /// Creates an alert for a product or, if one already exists, updates
    /// its prices in place. At most one alert exists per product id.
    pub async fn add_alert(
        &self,
        product: &FurnitureItem,
        target_price: f64,
    ) -> AppResult<PriceAlert> {
        // Validation precedes mutation: no persisted state is touched for
        // a bad target.
        if !target_price.is_finite() || target_price <= 0.0 {
            return Err(AppError::InvalidInput(
                "Target price must be a positive number".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;

        let mut alerts = self.load_alerts().await;
        let alert = match alerts.iter_mut().find(|a| a.product_id == product.id) {
            Some(existing) => {
                existing.set_prices(product.price, target_price);
                existing.clone()
            }
            None => {
                let alert = PriceAlert::new(product, target_price, Utc::now());
                alerts.push(alert.clone());
                alert
            }
        };

        set_json(self.store.as_ref(), StoreKey::PriceAlerts, &alerts).await?;

        tracing::info!(
            product_id = %alert.product_id,
            target = alert.target_price,
            triggered = alert.triggered,
            "price alert saved"
        );

        Ok(alert)
    }

    /// Idempotent removal by alert id.
    pub async fn delete_alert(&self, alert_id: Uuid) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut alerts = self.load_alerts().await;
        let before = alerts.len();
        alerts.retain(|a| a.id != alert_id);

        if alerts.len() != before {
            set_json(self.store.as_ref(), StoreKey::PriceAlerts, &alerts).await?;
        }

        Ok(())
    }

    /// Idempotent removal by product id.
    pub async fn delete_alert_for_product(&self, product_id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut alerts = self.load_alerts().await;
        let before = alerts.len();
        alerts.retain(|a| a.product_id != product_id);

        if alerts.len() != before {
            set_json(self.store.as_ref(), StoreKey::PriceAlerts, &alerts).await?;
        }

        Ok(())
    }

    pub async fn alert_for_product(&self, product_id: &str) -> Option<PriceAlert> {
        self.load_alerts()
            .await
            .into_iter()
            .find(|a| a.product_id == product_id)
    }

    pub async fn triggered_alerts(&self) -> Vec<PriceAlert> {
        self.load_alerts()
            .await
            .into_iter()
            .filter(|a| a.triggered)
            .collect()
    }
}
