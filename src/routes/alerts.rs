use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{FurnitureItem, PriceAlert},
    routes::AppState,
};

/// All price alerts.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<PriceAlert>> {
    Json(state.tracker.alerts().await)
}

#[derive(Debug, Deserialize)]
pub struct CreateAlertRequest {
    pub item: FurnitureItem,
    pub target_price: f64,
}

/// Creates or updates the alert for a product (at most one per product).
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAlertRequest>,
) -> AppResult<(StatusCode, Json<PriceAlert>)> {
    let alert = state
        .tracker
        .add_alert(&request.item, request.target_price)
        .await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// Alerts whose target has been met.
pub async fn triggered(State(state): State<Arc<AppState>>) -> Json<Vec<PriceAlert>> {
    Json(state.tracker.triggered_alerts().await)
}

/// Removes an alert by its id; idempotent.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(alert_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.tracker.delete_alert(alert_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The single alert for a product, if any.
pub async fn for_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> AppResult<Json<PriceAlert>> {
    match state.tracker.alert_for_product(&product_id).await {
        Some(alert) => Ok(Json(alert)),
        None => Err(AppError::NotFound(format!(
            "No alert for product {}",
            product_id
        ))),
    }
}

/// Removes the alert for a product; idempotent.
pub async fn delete_for_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> AppResult<StatusCode> {
    state.tracker.delete_alert_for_product(&product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
