use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{ApiListing, FurnitureItem, SearchOutcome, VisionAnalysis},
};

use super::ShoppingProvider;

/// HTTP client for the external shopping-search service.
#[derive(Clone)]
pub struct HttpShoppingProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl HttpShoppingProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }
}

/// Builds the search query from an analysis: the model's search terms when
/// present, otherwise whatever taxonomy tags it produced.
fn build_query(analysis: &VisionAnalysis) -> String {
    if !analysis.search_terms.is_empty() {
        return analysis.search_terms.join(" ");
    }

    let mut terms = Vec::new();
    if let Some(category) = &analysis.category {
        terms.push(category.as_str());
    }
    if let Some(style) = &analysis.style {
        terms.push(style.as_str());
    }
    terms.join(" ")
}

#[async_trait::async_trait]
impl ShoppingProvider for HttpShoppingProvider {
    async fn search(&self, analysis: &VisionAnalysis) -> AppResult<SearchOutcome> {
        let query = build_query(analysis);
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Analysis produced no searchable terms".to_string(),
            ));
        }

        let url = format!("{}/v1/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str()), ("q", query.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Shopping API returned status {}: {}",
                status, body
            )));
        }

        #[derive(Deserialize)]
        struct SearchResponse {
            #[serde(default)]
            results: Vec<ApiListing>,
        }

        let search_response: SearchResponse = response.json().await?;

        // Listings convert at this boundary; unparseable style tags drop
        // to untagged items rather than failing the search.
        let items: Vec<FurnitureItem> = search_response
            .results
            .into_iter()
            .map(FurnitureItem::from)
            .collect();

        tracing::info!(query = %query, results = items.len(), "shopping search completed");

        Ok(SearchOutcome { items, query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(terms: Vec<&str>, category: Option<&str>, style: Option<&str>) -> VisionAnalysis {
        VisionAnalysis {
            category: category.map(str::to_string),
            style: style.map(str::to_string),
            colors: vec![],
            material: None,
            description: None,
            confidence: 0.9,
            search_terms: terms.into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn test_build_query_prefers_search_terms() {
        let a = analysis(vec!["sofa", "beige"], Some("Sofa"), Some("Boho"));
        assert_eq!(build_query(&a), "sofa beige");
    }

    #[test]
    fn test_build_query_falls_back_to_tags() {
        let a = analysis(vec![], Some("Sofa"), Some("Boho"));
        assert_eq!(build_query(&a), "Sofa Boho");

        let a = analysis(vec![], None, None);
        assert_eq!(build_query(&a), "");
    }
}
