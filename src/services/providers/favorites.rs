use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::FurnitureItem,
};

use super::FavoritesGateway;

/// Thin REST client for the authenticated favorites backend.
#[derive(Clone)]
pub struct RemoteFavorites {
    http_client: HttpClient,
    api_url: String,
    token: String,
}

impl RemoteFavorites {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            token,
        }
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}/v1/favorites{}", self.api_url, suffix)
    }
}

#[async_trait::async_trait]
impl FavoritesGateway for RemoteFavorites {
    async fn favorites(&self) -> AppResult<Vec<FurnitureItem>> {
        let response = self
            .http_client
            .get(self.endpoint(""))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Favorites backend returned status {}",
                response.status()
            )));
        }

        let items: Vec<FurnitureItem> = response.json().await?;
        Ok(items)
    }

    async fn add_favorite(&self, item: &FurnitureItem) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.endpoint(""))
            .bearer_auth(&self.token)
            .json(item)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Favorites backend returned status {}",
                response.status()
            )));
        }

        tracing::debug!(item_id = %item.id, "favorite added");

        Ok(())
    }

    async fn remove_favorite(&self, id: &str) -> AppResult<()> {
        let response = self
            .http_client
            .delete(self.endpoint(&format!("/{}", id)))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Favorites backend returned status {}",
                response.status()
            )));
        }

        tracing::debug!(item_id = %id, "favorite removed");

        Ok(())
    }
}
