//! Cart store and line types.

use crate::cart::{CartSummary, LineSubtotal};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// In-memory shopping cart.
///
/// Lines keep insertion order and there is at most one line per product.
/// Every operation is total: unknown ids are ignored. Deserialized carts
/// are checked against the same rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "CartRecord")]
pub struct CartStore {
    lines: Vec<CartLine>,
    /// Currency used for totals.
    pub currency: Currency,
}

impl CartStore {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line, or appends a new line that snapshots
    /// the product's title, price and image as they are right now.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_QUANTITY_PER_LINE);
            return;
        }
        self.lines.push(CartLine::snapshot(product));
    }

    /// Apply a signed delta to a line's quantity.
    ///
    /// A result of zero or less removes the line. Returns whether the cart
    /// changed.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) -> bool {
        let Some(index) = self.lines.iter().position(|l| &l.product_id == id) else {
            tracing::warn!(product_id = %id, "quantity change for product not in cart ignored");
            return false;
        };

        let current = i64::from(self.lines[index].quantity);
        let next = current.saturating_add(delta);
        if next <= 0 {
            self.lines.remove(index);
            return true;
        }

        let next = next.min(i64::from(MAX_QUANTITY_PER_LINE)) as u32;
        let line = &mut self.lines[index];
        let changed = line.quantity != next;
        line.quantity = next;
        changed
    }

    /// Remove a line. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != id);
        let removed = self.lines.len() < len_before;
        if !removed {
            tracing::warn!(product_id = %id, "remove for product not in cart ignored");
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units (sum of quantities).
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price × quantity over all lines, recomputed on every call.
    ///
    /// Saturates instead of overflowing; use [`CartStore::summary`] for a
    /// checked total.
    pub fn total(&self) -> Money {
        let amount = self
            .lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.price.saturating_mul(u64::from(l.quantity))));
        Money::new(amount, self.currency)
    }

    /// Checked per-line and overall totals.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|l| {
                let subtotal = l.unit_price(self.currency).try_multiply(u64::from(l.quantity))?;
                Some(LineSubtotal {
                    product_id: l.product_id.clone(),
                    quantity: l.quantity,
                    subtotal,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(CommerceError::Overflow)?;

        let total = Money::try_sum(lines.iter().map(|l| &l.subtotal), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartSummary {
            item_count: self.count(),
            total,
            lines,
        })
    }
}

/// Unchecked serialized form of a [`CartStore`].
#[derive(Deserialize)]
struct CartRecord {
    lines: Vec<CartLine>,
    #[serde(default)]
    currency: Currency,
}

impl TryFrom<CartRecord> for CartStore {
    type Error = CommerceError;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for line in &record.lines {
            if line.quantity == 0 || line.quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::InvalidCart(format!(
                    "quantity {} for {} is out of range",
                    line.quantity, line.product_id
                )));
            }
            if !seen.insert(&line.product_id) {
                return Err(CommerceError::InvalidCart(format!(
                    "more than one line for {}",
                    line.product_id
                )));
            }
        }
        Ok(Self {
            lines: record.lines,
            currency: record.currency,
        })
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    /// Title at the time the line was created.
    pub title: String,
    /// Unit price at the time the line was created.
    pub price: u64,
    pub image: String,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn phone() -> Product {
        Product::new("p-1", "Smartphone X", 1000, Category::Electronics).with_image("x.jpg")
    }

    fn lamp() -> Product {
        Product::new("p-2", "Desk Lamp", 250, Category::Home)
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());
        cart.add(&phone());

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_snapshots_product() {
        let mut cart = CartStore::new(Currency::INR);
        let mut product = phone();
        cart.add(&product);

        product.price = 5;
        product.title = "Renamed".to_string();
        cart.add(&product);

        let line = cart.line(&ProductId::new("p-1")).unwrap();
        assert_eq!(line.price, 1000);
        assert_eq!(line.title, "Smartphone X");
        assert_eq!(line.image, "x.jpg");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&lamp());
        cart.add(&phone());
        cart.add(&lamp());

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["p-2", "p-1"]);
    }

    #[test]
    fn test_change_quantity() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());

        assert!(cart.change_quantity(&ProductId::new("p-1"), 3));
        assert_eq!(cart.count(), 4);
        assert!(cart.change_quantity(&ProductId::new("p-1"), -1));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());
        cart.add(&phone());

        assert!(cart.change_quantity(&ProductId::new("p-1"), -2));
        assert!(!cart.contains(&ProductId::new("p-1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_below_zero_removes_line() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());

        assert!(cart.change_quantity(&ProductId::new("p-1"), -10));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());
        let before = cart.clone();

        assert!(!cart.change_quantity(&ProductId::new("nope"), 1));
        assert!(!cart.remove(&ProductId::new("nope")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());
        cart.add(&lamp());

        assert!(cart.remove(&ProductId::new("p-1")));
        assert_eq!(cart.lines().len(), 1);
        assert!(cart.contains(&ProductId::new("p-2")));
    }

    #[test]
    fn test_quantity_saturates_at_limit() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());
        cart.change_quantity(&ProductId::new("p-1"), i64::MAX);
        assert_eq!(cart.lines()[0].quantity, MAX_QUANTITY_PER_LINE);

        cart.add(&phone());
        assert_eq!(cart.lines()[0].quantity, MAX_QUANTITY_PER_LINE);
        assert!(!cart.change_quantity(&ProductId::new("p-1"), 1));
    }

    #[test]
    fn test_total() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());
        cart.add(&phone());
        cart.add(&lamp());

        assert_eq!(cart.total(), Money::new(2250, Currency::INR));
        let summary = cart.summary().unwrap();
        assert_eq!(summary.total, cart.total());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.lines[0].subtotal.amount, 2000);
    }

    #[test]
    fn test_summary_reports_overflow() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&Product::new("big", "Big", u64::MAX, Category::Home));
        cart.add(&Product::new("big", "Big", u64::MAX, Category::Home));

        assert!(matches!(cart.summary(), Err(CommerceError::Overflow)));
        assert_eq!(cart.total().amount, u64::MAX);
    }

    fn line_json(id: &str, quantity: u32) -> String {
        format!(
            r#"{{"productId":"{}","title":"T","price":10,"image":"","quantity":{}}}"#,
            id, quantity
        )
    }

    #[test]
    fn test_deserialize_valid_cart() {
        let json = format!(
            r#"{{"lines":[{},{}],"currency":"INR"}}"#,
            line_json("a", 2),
            line_json("b", 1)
        );
        let cart: CartStore = serde_json::from_str(&json).unwrap();
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total().amount, 30);
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let json = format!(r#"{{"lines":[{}]}}"#, line_json("p", 0));
        let err = serde_json::from_str::<CartStore>(&json).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_lines() {
        let json = format!(r#"{{"lines":[{},{}]}}"#, line_json("p", 1), line_json("p", 3));
        let err = serde_json::from_str::<CartStore>(&json).unwrap_err();
        assert!(err.to_string().contains("more than one line for p"));
    }

    #[test]
    fn test_serialized_cart_reloads() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(&phone());
        cart.add(&lamp());
        cart.add(&phone());

        let json = serde_json::to_string(&cart).unwrap();
        let reloaded: CartStore = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, cart);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add(&phone());
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }
}
