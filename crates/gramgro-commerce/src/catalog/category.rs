//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Fashion, Category::Home];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
        }
    }

    /// Human-readable label for chips and cards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "fashion" => Some(Category::Fashion),
            "home" => Some(Category::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
