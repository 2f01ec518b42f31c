use serde::{Deserialize, Serialize};

use super::{FurnitureItem, Style};

/// Result of the remote vision-analysis collaborator.
///
/// All taxonomy fields are free-form strings as delivered by the model;
/// they are validated into engine types at this boundary, never deeper in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisionAnalysis {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub confidence: f32,
    #[serde(default)]
    pub search_terms: Vec<String>,
}

impl VisionAnalysis {
    /// The analysis style as an engine taxonomy tag, if it parses.
    /// Unknown styles degrade to `None` rather than failing the flow.
    pub fn parsed_style(&self) -> Option<Style> {
        self.style.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Raw listing from the shopping-search collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiListing {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub url: String,
    pub shop: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl From<ApiListing> for FurnitureItem {
    fn from(listing: ApiListing) -> Self {
        // Free-form provider style strings parse into the taxonomy or drop.
        let style = listing.style.as_deref().and_then(|s| s.parse().ok());

        FurnitureItem {
            id: listing.id,
            name: listing.name,
            image_url: listing.image_url,
            price: listing.price,
            currency: listing.currency,
            affiliate_url: listing.url,
            shop: listing.shop,
            style,
            category: listing.category,
        }
    }
}

/// Items returned by a shopping search, plus the query that produced them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchOutcome {
    pub items: Vec<FurnitureItem>,
    pub query: String,
}
