//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Checked totals for a cart at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSubtotal>,
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSubtotal {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price × quantity.
    pub subtotal: Money,
}
