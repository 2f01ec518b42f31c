use crate::models::FurnitureItem;

use super::catalog::Catalog;

const CATEGORY_WEIGHT: u32 = 3;
const STYLE_WEIGHT: u32 = 2;
const PRICE_WEIGHT: u32 = 2;
const SHOP_WEIGHT: u32 = 1;

/// Relative price difference still counted as "similar"
const PRICE_TOLERANCE: f64 = 0.3;

/// Additive similarity score between a reference item and a candidate.
///
/// The rules are evaluated independently, not mutually exclusively.
/// Untagged fields never match: two items without a category share no
/// category signal.
pub fn similarity_score(reference: &FurnitureItem, candidate: &FurnitureItem) -> u32 {
    let mut score = 0;

    if candidate.category.is_some() && candidate.category == reference.category {
        score += CATEGORY_WEIGHT;
    }
    if candidate.style.is_some() && candidate.style == reference.style {
        score += STYLE_WEIGHT;
    }
    if reference.price > 0.0
        && (candidate.price - reference.price).abs() / reference.price <= PRICE_TOLERANCE
    {
        score += PRICE_WEIGHT;
    }
    if candidate.shop == reference.shop {
        score += SHOP_WEIGHT;
    }

    score
}

/// Ranks the catalog against `reference` and returns the top `limit`
/// candidates, excluding the reference itself.
///
/// Best-effort top-K: zero-score candidates fill the tail when nothing
/// better is available. The sort is stable, so equal-score items keep
/// catalog order and results are deterministic across runs.
pub fn similar_items(
    catalog: &Catalog,
    reference: &FurnitureItem,
    limit: usize,
) -> Vec<FurnitureItem> {
    let mut scored: Vec<(u32, &FurnitureItem)> = catalog
        .items()
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| (similarity_score(reference, candidate), candidate))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);

    scored.into_iter().map(|(_, item)| item.clone()).collect()
}
