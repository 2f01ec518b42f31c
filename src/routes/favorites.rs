use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::FurnitureItem, routes::AppState};

/// The user's favorites from the authenticated backend.
pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<FurnitureItem>>> {
    let items = state.favorites.favorites().await?;
    Ok(Json(items))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(item): Json<FurnitureItem>,
) -> AppResult<StatusCode> {
    state.favorites.add_favorite(&item).await?;
    Ok(StatusCode::CREATED)
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.favorites.remove_favorite(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
