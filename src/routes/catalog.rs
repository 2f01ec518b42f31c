use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{FurnitureItem, Style},
    services::budget::within_budget,
    services::similarity,
    services::CatalogFilter,
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    pub style: Option<Style>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Lists catalog items matching the supplied criteria, post-filtered by
/// the global budget ceiling.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ItemsQuery>,
) -> AppResult<Json<Vec<FurnitureItem>>> {
    let filter = CatalogFilter {
        style: params.style,
        category: params.category,
        min_price: params.min_price,
        max_price: params.max_price,
    };

    let max_budget = state.budget.settings().await.max_budget;
    let items: Vec<FurnitureItem> = state
        .catalog
        .filter(&filter)
        .into_iter()
        .filter(|item| within_budget(item.price, max_budget))
        .collect();

    Ok(Json(items))
}

/// Single item lookup; absence maps to 404 at this boundary.
pub async fn by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<FurnitureItem>> {
    match state.catalog.by_id(&id) {
        Some(item) => Ok(Json(item.clone())),
        None => Err(AppError::NotFound(format!("No item with id {}", id))),
    }
}

#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    pub limit: Option<usize>,
}

const DEFAULT_SIMILAR_LIMIT: usize = 8;

/// Related products for an item's detail view.
pub async fn similar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<SimilarQuery>,
) -> AppResult<Json<Vec<FurnitureItem>>> {
    let reference = state
        .catalog
        .by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("No item with id {}", id)))?;

    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    let items = similarity::similar_items(&state.catalog, reference, limit);

    Ok(Json(items))
}
