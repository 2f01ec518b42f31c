use crate::models::{FurnitureItem, Style};

/// Criteria for catalog filtering. Absent criteria are ignored; supplied
/// ones combine as a pure conjunction with inclusive price bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub style: Option<Style>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl CatalogFilter {
    pub fn matches(&self, item: &FurnitureItem) -> bool {
        if let Some(style) = self.style {
            if item.style != Some(style) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if item.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if item.price > max {
                return false;
            }
        }
        true
    }
}

/// In-memory static furniture catalog.
///
/// Read-only reference data: there is no create/update/delete lifecycle.
/// Results preserve catalog insertion order; any ranking happens
/// downstream.
pub struct Catalog {
    items: Vec<FurnitureItem>,
}

impl Catalog {
    pub fn new(items: Vec<FurnitureItem>) -> Self {
        Self { items }
    }

    /// The built-in reference catalog.
    pub fn with_reference_items() -> Self {
        Self::new(reference_items())
    }

    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    /// Lookup by id. Absence is a valid outcome, not a fault.
    pub fn by_id(&self, id: &str) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter(&self, filter: &CatalogFilter) -> Vec<FurnitureItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }
}

fn entry(
    id: &str,
    name: &str,
    price: f64,
    shop: &str,
    style: Option<Style>,
    category: Option<&str>,
) -> FurnitureItem {
    FurnitureItem {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("https://img.moebelscout.app/{}.jpg", id),
        price,
        currency: "EUR".to_string(),
        affiliate_url: format!("https://shop.moebelscout.app/go/{}", id),
        shop: shop.to_string(),
        style,
        category: category.map(str::to_string),
    }
}

fn reference_items() -> Vec<FurnitureItem> {
    use Style::*;

    vec![
        entry("f1", "RANARP Arbeitslampe", 35.0, "IKEA", Some(Skandinavisch), Some("Lampe")),
        entry("f2", "LERHAMN Tisch", 249.0, "IKEA", Some(Skandinavisch), Some("Tisch")),
        entry("f3", "KIVIK Sofa", 599.0, "IKEA", Some(Skandinavisch), Some("Sofa")),
        entry("f4", "POÄNG Sessel", 129.0, "IKEA", Some(Skandinavisch), Some("Sessel")),
        entry("f5", "VITTSJÖ Regal", 79.0, "IKEA", Some(Industrial), Some("Regal")),
        entry("f6", "MALM Bett", 299.0, "IKEA", Some(Minimalistisch), Some("Bett")),
        entry("f7", "Loftstuhl Bruno", 189.0, "Home24", Some(Industrial), Some("Stuhl")),
        entry("f8", "Sofa Fjord", 899.0, "Home24", Some(Skandinavisch), Some("Sofa")),
        entry("f9", "Rattansessel Bahia", 259.0, "Home24", Some(Boho), Some("Sessel")),
        entry("f10", "Couchtisch Beton", 199.0, "Home24", Some(Industrial), Some("Tisch")),
        entry("f11", "Kelim Teppich Anatolia", 89.0, "Otto", Some(Boho), Some("Teppich")),
        entry("f12", "Pendelleuchte Fabrik", 59.0, "Otto", Some(Industrial), Some("Lampe")),
        entry("f13", "Lowboard Pur", 219.0, "Otto", Some(Minimalistisch), Some("Schrank")),
        entry("f14", "Makramee Wandregal", 45.0, "Otto", Some(Boho), Some("Regal")),
        entry("f15", "Beistelltisch Uno", 39.0, "Otto", None, Some("Tisch")),
        entry("f16", "Deko-Set Natur", 24.0, "Home24", Some(Boho), None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id() {
        let catalog = Catalog::with_reference_items();
        assert_eq!(catalog.by_id("f1").unwrap().name, "RANARP Arbeitslampe");
        assert_eq!(catalog.by_id("missing"), None);
    }

    #[test]
    fn test_filter_without_criteria_returns_everything() {
        let catalog = Catalog::with_reference_items();
        let all = catalog.filter(&CatalogFilter::default());
        assert_eq!(all.len(), catalog.items().len());
    }

    #[test]
    fn test_filter_by_style_and_max_price() {
        let catalog = Catalog::with_reference_items();
        let results = catalog.filter(&CatalogFilter {
            style: Some(Style::Skandinavisch),
            max_price: Some(100.0),
            ..Default::default()
        });

        // RANARP (35 EUR) qualifies; LERHAMN (249 EUR) exceeds the cap.
        assert!(results.iter().any(|i| i.name == "RANARP Arbeitslampe"));
        assert!(results.iter().all(|i| i.price <= 100.0));
        assert!(results.iter().all(|i| i.style == Some(Style::Skandinavisch)));
        assert!(!results.iter().any(|i| i.name == "LERHAMN Tisch"));
    }

    #[test]
    fn test_filter_is_a_conjunction() {
        let catalog = Catalog::with_reference_items();
        let results = catalog.filter(&CatalogFilter {
            style: Some(Style::Industrial),
            category: Some("Lampe".to_string()),
            ..Default::default()
        });

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Pendelleuchte Fabrik");
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = Catalog::with_reference_items();
        let results = catalog.filter(&CatalogFilter {
            min_price: Some(35.0),
            max_price: Some(35.0),
            ..Default::default()
        });

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "f1");
    }

    #[test]
    fn test_filter_preserves_insertion_order() {
        let catalog = Catalog::with_reference_items();
        let results = catalog.filter(&CatalogFilter {
            style: Some(Style::Boho),
            ..Default::default()
        });

        let ids: Vec<&str> = results.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["f9", "f11", "f14", "f16"]);
    }

    #[test]
    fn test_style_filter_does_not_match_untagged_items() {
        let catalog = Catalog::with_reference_items();
        for style in Style::ALL {
            let results = catalog.filter(&CatalogFilter {
                style: Some(style),
                ..Default::default()
            });
            assert!(results.iter().all(|i| i.id != "f15"));
        }
    }
}
