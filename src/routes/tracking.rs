use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{FurnitureItem, TrackedProduct},
    routes::AppState,
};

/// All tracked products.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<TrackedProduct>> {
    Json(state.tracker.tracked().await)
}

/// Starts watching an item. Items may come from the catalog or from a
/// shopping search, so the full item travels in the body. Re-tracking is
/// a no-op.
pub async fn track(
    State(state): State<Arc<AppState>>,
    Json(item): Json<FurnitureItem>,
) -> AppResult<(StatusCode, Json<TrackedProduct>)> {
    let entry = state.tracker.track(&item).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Stops watching; idempotent.
pub async fn untrack(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.tracker.untrack(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Tracked products whose price dropped below the tracked original.
pub async fn price_drops(State(state): State<Arc<AppState>>) -> Json<Vec<TrackedProduct>> {
    Json(state.tracker.price_drops().await)
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub price: f64,
}

/// Supplies a fresher price for a tracked product (the price source
/// itself is external).
pub async fn update_price(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePriceRequest>,
) -> AppResult<StatusCode> {
    state.tracker.update_price(&id, request.price).await?;
    Ok(StatusCode::NO_CONTENT)
}
