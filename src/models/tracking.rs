use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FurnitureItem;

/// An item the user watches for price changes, without a target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackedProduct {
    /// Catalog/product id; unique within the tracked set
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub original_price: f64,
    pub current_price: f64,
    pub shop: String,
    pub affiliate_url: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub tracked_at: DateTime<Utc>,
}

impl TrackedProduct {
    pub fn from_item(item: &FurnitureItem, now: DateTime<Utc>) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            original_price: item.price,
            current_price: item.price,
            shop: item.shop.clone(),
            affiliate_url: item.affiliate_url.clone(),
            tracked_at: now,
        }
    }

    pub fn has_price_drop(&self) -> bool {
        self.current_price < self.original_price
    }
}

/// A tracked item with an explicit target price.
///
/// `triggered` is derived state: it is recomputed on every price write,
/// never lazily on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceAlert {
    pub id: Uuid,
    /// At most one alert exists per product id
    pub product_id: String,
    pub product_name: String,
    pub product_image_url: String,
    pub shop: String,
    pub current_price: f64,
    pub target_price: f64,
    pub affiliate_url: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub triggered: bool,
}

impl PriceAlert {
    pub fn new(product: &FurnitureItem, target_price: f64, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            product_image_url: product.image_url.clone(),
            shop: product.shop.clone(),
            current_price: product.price,
            target_price,
            affiliate_url: product.affiliate_url.clone(),
            created_at: now,
            triggered: product.price <= target_price,
        }
    }

    /// Overwrites both prices and re-derives `triggered`.
    pub fn set_prices(&mut self, current_price: f64, target_price: f64) {
        self.current_price = current_price;
        self.target_price = target_price;
        self.triggered = current_price <= target_price;
    }

    /// Overwrites the current price and re-derives `triggered`.
    pub fn set_current_price(&mut self, current_price: f64) {
        self.current_price = current_price;
        self.triggered = current_price <= self.target_price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Style;

    fn item(price: f64) -> FurnitureItem {
        FurnitureItem {
            id: "f7".to_string(),
            name: "KIVIK Sofa".to_string(),
            image_url: "https://img.example.com/f7.jpg".to_string(),
            price,
            currency: "EUR".to_string(),
            affiliate_url: "https://shop.example.com/f7".to_string(),
            shop: "IKEA".to_string(),
            style: Some(Style::Skandinavisch),
            category: Some("Sofa".to_string()),
        }
    }

    #[test]
    fn test_tracked_product_starts_without_drop() {
        let tracked = TrackedProduct::from_item(&item(499.0), Utc::now());
        assert_eq!(tracked.original_price, 499.0);
        assert_eq!(tracked.current_price, 499.0);
        assert!(!tracked.has_price_drop());
    }

    #[test]
    fn test_alert_triggered_immediately_when_price_at_or_below_target() {
        let alert = PriceAlert::new(&item(80.0), 100.0, Utc::now());
        assert!(alert.triggered);

        let alert = PriceAlert::new(&item(100.0), 100.0, Utc::now());
        assert!(alert.triggered);

        let alert = PriceAlert::new(&item(120.0), 100.0, Utc::now());
        assert!(!alert.triggered);
    }

    #[test]
    fn test_set_current_price_rederives_triggered() {
        let mut alert = PriceAlert::new(&item(120.0), 100.0, Utc::now());
        assert!(!alert.triggered);

        alert.set_current_price(95.0);
        assert!(alert.triggered);

        alert.set_current_price(110.0);
        assert!(!alert.triggered);
    }

    #[test]
    fn test_set_prices_rederives_triggered() {
        let mut alert = PriceAlert::new(&item(120.0), 100.0, Utc::now());
        alert.set_prices(120.0, 150.0);
        assert!(alert.triggered);
        assert_eq!(alert.target_price, 150.0);
    }
}
