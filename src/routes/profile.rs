use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{Style, StyleProfile},
    routes::AppState,
};

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    /// `None` while no signal has been observed yet
    pub profile: Option<StyleProfile>,
    pub top_styles: Vec<TopStyle>,
    pub top_category: Option<TopCategory>,
}

#[derive(Debug, Serialize)]
pub struct TopStyle {
    pub style: Style,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct TopCategory {
    pub category: String,
    pub count: u32,
}

const TOP_STYLE_COUNT: usize = 3;

/// Profile summary; an uninitialized profile is a valid outcome and
/// serves as an empty summary, not an error.
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<ProfileSummary> {
    let profile = state.profile.profile().await;
    let top_styles = state
        .profile
        .top_styles(TOP_STYLE_COUNT)
        .await
        .into_iter()
        .map(|(style, count)| TopStyle { style, count })
        .collect();
    let top_category = state
        .profile
        .top_category()
        .await
        .map(|(category, count)| TopCategory { category, count });

    Json(ProfileSummary {
        profile,
        top_styles,
        top_category,
    })
}

#[derive(Debug, Deserialize)]
pub struct ObserveRequest {
    pub style: Option<Style>,
    pub category: Option<String>,
}

/// Records a style/category signal, e.g. from a product detail view.
pub async fn observe(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ObserveRequest>,
) -> AppResult<Json<StyleProfile>> {
    let profile = state
        .profile
        .observe(request.style, request.category.as_deref())
        .await?;
    Ok(Json(profile))
}

/// Clears the profile and the stored quiz result.
pub async fn reset(State(state): State<Arc<AppState>>) -> AppResult<StatusCode> {
    state.profile.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}
