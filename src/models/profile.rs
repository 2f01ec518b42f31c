use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Style;

/// Running tally of observed style and category preference signals.
///
/// Created lazily on the first observed signal; the `BTreeMap` keys make
/// tie-breaks deterministic across loads (count ties resolve to key order).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleProfile {
    pub styles: BTreeMap<Style, u32>,
    pub categories: BTreeMap<String, u32>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_updated: DateTime<Utc>,
}

impl StyleProfile {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            styles: BTreeMap::new(),
            categories: BTreeMap::new(),
            last_updated: now,
        }
    }

    pub fn bump_style(&mut self, style: Style) {
        *self.styles.entry(style).or_insert(0) += 1;
    }

    pub fn bump_category(&mut self, category: &str) {
        *self.categories.entry(category.to_string()).or_insert(0) += 1;
    }

    /// Highest-count styles, descending. Count ties keep map key order.
    pub fn top_styles(&self, n: usize) -> Vec<(Style, u32)> {
        let mut entries: Vec<(Style, u32)> =
            self.styles.iter().map(|(style, count)| (*style, *count)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// The single highest-count category, if any signal has been observed.
    pub fn top_category(&self) -> Option<(String, u32)> {
        self.categories
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(category, count)| (category.clone(), *count))
    }
}
