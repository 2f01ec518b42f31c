use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{error::AppResult, models::BudgetSettings, routes::AppState};

/// Current global budget ceiling.
pub async fn settings(State(state): State<Arc<AppState>>) -> Json<BudgetSettings> {
    Json(state.budget.settings().await)
}

#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    pub max_budget: Option<f64>,
}

/// Overwrites the budget ceiling, last-write-wins.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateBudgetRequest>,
) -> AppResult<Json<BudgetSettings>> {
    let settings = state.budget.set_max_budget(request.max_budget).await?;
    Ok(Json(settings))
}
