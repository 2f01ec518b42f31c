use base64::Engine;
use reqwest::Client as HttpClient;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    models::VisionAnalysis,
};

use super::VisionProvider;

/// HTTP client for the remote vision-analysis model.
///
/// Uploads the photo as base64 JSON and maps the response straight into
/// [`VisionAnalysis`]; taxonomy validation happens in the model type, not
/// here.
#[derive(Clone)]
pub struct HttpVisionProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl HttpVisionProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl VisionProvider for HttpVisionProvider {
    async fn analyze(&self, image: &[u8]) -> AppResult<VisionAnalysis> {
        if image.is_empty() {
            return Err(AppError::InvalidInput(
                "Image payload cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/v1/analyze", self.api_url);
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "image": encoded }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Vision API returned status {}: {}",
                status, body
            )));
        }

        let analysis: VisionAnalysis = response.json().await?;

        tracing::info!(
            category = ?analysis.category,
            style = ?analysis.style,
            confidence = analysis.confidence,
            "image analyzed"
        );

        Ok(analysis)
    }
}
