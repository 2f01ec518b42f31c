use serde::Serialize;

use crate::{
    error::AppResult,
    models::{FurnitureItem, VisionAnalysis},
};

use super::budget::within_budget;
use super::catalog::{Catalog, CatalogFilter};
use super::providers::{ShoppingProvider, VisionProvider};

/// What to do when the shopping collaborator is unavailable.
///
/// A first-class strategy parameter so "collaborator down" is an input
/// test suites can exercise, not an inline default buried at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFallback {
    /// Serve matching items from the static catalog instead.
    CatalogMatches,
    /// Surface the provider error to the caller.
    Propagate,
}

/// Outcome of a photo-discovery run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscoverResult {
    pub analysis: VisionAnalysis,
    pub query: String,
    pub items: Vec<FurnitureItem>,
    /// True when the items came from the catalog fallback rather than the
    /// shopping provider.
    pub from_catalog: bool,
}

/// The photo-discovery flow: analyze the image, search shops for matching
/// listings and post-filter against the global budget ceiling.
///
/// Vision failures always propagate (without an analysis there is nothing
/// to search or fall back on); search failures follow `fallback`.
pub async fn discover(
    vision: &dyn VisionProvider,
    shopping: &dyn ShoppingProvider,
    catalog: &Catalog,
    max_budget: Option<f64>,
    image: &[u8],
    fallback: SearchFallback,
) -> AppResult<DiscoverResult> {
    let analysis = vision.analyze(image).await?;

    let (items, query, from_catalog) = match shopping.search(&analysis).await {
        Ok(outcome) => (outcome.items, outcome.query, false),
        Err(e) => match fallback {
            SearchFallback::Propagate => return Err(e),
            SearchFallback::CatalogMatches => {
                tracing::warn!(error = %e, "shopping search failed, serving catalog matches");
                let filter = CatalogFilter {
                    style: analysis.parsed_style(),
                    category: analysis.category.clone(),
                    ..Default::default()
                };
                let query = analysis.search_terms.join(" ");
                (catalog.filter(&filter), query, true)
            }
        },
    };

    let items: Vec<FurnitureItem> = items
        .into_iter()
        .filter(|item| within_budget(item.price, max_budget))
        .collect();

    tracing::info!(
        results = items.len(),
        from_catalog,
        budget = ?max_budget,
        "discovery completed"
    );

    Ok(DiscoverResult {
        analysis,
        query,
        items,
        from_catalog,
    })
}
