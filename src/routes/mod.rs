use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::services::providers::{FavoritesGateway, ShoppingProvider, VisionProvider};
use crate::services::{BudgetService, Catalog, PriceTracker, ProfileService};

pub mod alerts;
pub mod budget;
pub mod catalog;
pub mod discover;
pub mod favorites;
pub mod profile;
pub mod quiz;
pub mod tracking;

/// Shared application state: the engine services plus the external
/// collaborators behind their traits.
pub struct AppState {
    pub catalog: Catalog,
    pub profile: ProfileService,
    pub tracker: PriceTracker,
    pub budget: BudgetService,
    pub vision: Arc<dyn VisionProvider>,
    pub shopping: Arc<dyn ShoppingProvider>,
    pub favorites: Arc<dyn FavoritesGateway>,
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes(state))
}

/// API routes under /api/v1
fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Catalog
        .route("/items", get(catalog::list))
        .route("/items/:id", get(catalog::by_id))
        .route("/items/:id/similar", get(catalog::similar))
        // Style quiz
        .route("/quiz/questions", get(quiz::questions))
        .route("/quiz/answers", post(quiz::submit))
        .route("/quiz/result", get(quiz::result))
        // Style profile
        .route("/profile", get(profile::summary))
        .route("/profile", delete(profile::reset))
        .route("/profile/observe", post(profile::observe))
        // Budget
        .route("/budget", get(budget::settings))
        .route("/budget", put(budget::update))
        // Price tracking
        .route("/tracking", get(tracking::list))
        .route("/tracking", post(tracking::track))
        .route("/tracking/drops", get(tracking::price_drops))
        .route("/tracking/:id", delete(tracking::untrack))
        .route("/tracking/:id/price", put(tracking::update_price))
        // Price alerts
        .route("/alerts", get(alerts::list))
        .route("/alerts", post(alerts::create))
        .route("/alerts/triggered", get(alerts::triggered))
        .route("/alerts/:alert_id", delete(alerts::delete))
        .route("/alerts/product/:product_id", get(alerts::for_product))
        .route("/alerts/product/:product_id", delete(alerts::delete_for_product))
        // Photo discovery
        .route("/discover", post(discover::discover))
        // Favorites
        .route("/favorites", get(favorites::list))
        .route("/favorites", post(favorites::add))
        .route("/favorites/:id", delete(favorites::remove))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
