use std::sync::Arc;

use axum::{extract::State, Json};
use base64::Engine;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    routes::AppState,
    services::search::{self, DiscoverResult, SearchFallback},
};

#[derive(Debug, Deserialize)]
pub struct DiscoverRequest {
    /// Photo bytes, base64-encoded
    pub image_base64: String,
    /// Surface shopping-provider failures instead of serving catalog
    /// matches; defaults to the catalog fallback.
    #[serde(default)]
    pub strict: bool,
}

/// Photo discovery: analyze the uploaded photo, search shops for matching
/// listings, post-filter against the budget ceiling.
pub async fn discover(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DiscoverRequest>,
) -> AppResult<Json<DiscoverResult>> {
    let image = base64::engine::general_purpose::STANDARD
        .decode(request.image_base64.as_bytes())
        .map_err(|e| AppError::InvalidInput(format!("Invalid base64 image: {}", e)))?;

    let fallback = if request.strict {
        SearchFallback::Propagate
    } else {
        SearchFallback::CatalogMatches
    };

    let max_budget = state.budget.settings().await.max_budget;
    let result = search::discover(
        state.vision.as_ref(),
        state.shopping.as_ref(),
        &state.catalog,
        max_budget,
        &image,
        fallback,
    )
    .await?;

    Ok(Json(result))
}
