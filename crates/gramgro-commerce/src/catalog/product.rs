//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Field names follow the catalog file (`categoryLabel`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title; search matches against this.
    pub title: String,
    /// Price in whole currency units.
    pub price: u64,
    pub category: Category,
    /// Label shown on the product card.
    pub category_label: String,
    /// Image URI.
    pub image: String,
    pub description: String,
}

impl Product {
    /// Create a product whose label is the category's default label.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: u64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category,
            category_label: category.label().to_string(),
            image: String::new(),
            description: String::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Price as money in the given display currency.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Case-insensitive substring match against the title.
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}
