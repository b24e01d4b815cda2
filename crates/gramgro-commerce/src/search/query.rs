//! Title search combined with the category filter.

use crate::catalog::{Catalog, Product};
use crate::search::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Shop filter state: the search box text and the selected chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Raw search box text.
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// True when neither the category nor the query narrows the list.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.query.trim().is_empty()
    }

    /// Visible products for this state, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        filter_products(catalog.products(), self.category, &self.query)
    }
}

/// Derive the visible subset of `products`.
///
/// Order is preserved. A query that is blank after trimming passes
/// everything; otherwise the untrimmed query must appear in the title,
/// ignoring case.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Product> {
    let needle = if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    };

    products
        .iter()
        .filter(|p| category.matches(p.category))
        .filter(|p| needle.as_deref().map_or(true, |n| p.title_contains(n)))
        .collect()
}
