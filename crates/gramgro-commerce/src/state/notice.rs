//! Placeholder notices shown in a dialog.

use crate::catalog::Product;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A message dialog standing in for interactions the demo does not
/// implement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Product details opened from a card.
    ProductDetails {
        title: String,
        description: String,
        price: Money,
    },
    /// Checkout was requested; there is no payment integration.
    CheckoutUnavailable,
}

impl Notice {
    pub fn details(product: &Product, currency: Currency) -> Self {
        Notice::ProductDetails {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price_in(currency),
        }
    }

    /// Dialog heading.
    pub fn heading(&self) -> &str {
        match self {
            Notice::ProductDetails { title, .. } => title,
            Notice::CheckoutUnavailable => "Checkout",
        }
    }

    /// Dialog body paragraphs.
    pub fn body(&self) -> Vec<String> {
        match self {
            Notice::ProductDetails {
                description, price, ..
            } => vec![description.clone(), format!("Price: {}", price.display())],
            Notice::CheckoutUnavailable => {
                vec!["Checkout demo: integrate payment later.".to_string()]
            }
        }
    }
}
