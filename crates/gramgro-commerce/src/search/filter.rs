//! Category filter.

use crate::catalog::Category;
use serde::{Deserialize, Serialize};

/// Which categories pass the shop filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every product passes.
    #[default]
    All,
    /// Only products in this category pass.
    Only(Category),
}

/// A selectable filter chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChip {
    pub filter: CategoryFilter,
    pub label: &'static str,
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Stable key, e.g. "all" or "fashion".
    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::parse(key).map(CategoryFilter::Only)
    }

    /// Filter chips in display order: All first, then each category.
    pub fn chips() -> Vec<FilterChip> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .map(|filter| FilterChip {
                filter,
                label: filter.label(),
            })
            .collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.key().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        CategoryFilter::parse(&key).ok_or_else(|| format!("unknown category filter: {key}"))
    }
}
