/// External collaborator abstractions
///
/// The engine consumes three remote collaborators: the vision model that
/// analyzes room photos, the shopping search that turns an analysis into
/// purchasable listings, and the authenticated favorites backend. Each is
/// a trait here so tests and fallbacks can swap implementations; the HTTP
/// implementations are thin plumbing around them.
use crate::{
    error::AppResult,
    models::{FurnitureItem, SearchOutcome, VisionAnalysis},
};

pub mod favorites;
pub mod shopping;
pub mod vision;

pub use favorites::RemoteFavorites;
pub use shopping::HttpShoppingProvider;
pub use vision::HttpVisionProvider;

/// Remote vision model that classifies a furniture photo.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VisionProvider: Send + Sync {
    /// Analyze raw image bytes into taxonomy tags and search terms.
    async fn analyze(&self, image: &[u8]) -> AppResult<VisionAnalysis>;
}

/// Shopping search over external shop inventories.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ShoppingProvider: Send + Sync {
    /// Find purchasable listings matching a vision analysis.
    async fn search(&self, analysis: &VisionAnalysis) -> AppResult<SearchOutcome>;
}

/// Authenticated remote store for the user's favorites.
///
/// The store itself (and its auth) is external; the engine only consumes
/// this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FavoritesGateway: Send + Sync {
    async fn favorites(&self) -> AppResult<Vec<FurnitureItem>>;

    async fn add_favorite(&self, item: &FurnitureItem) -> AppResult<()>;

    async fn remove_favorite(&self, id: &str) -> AppResult<()>;
}
