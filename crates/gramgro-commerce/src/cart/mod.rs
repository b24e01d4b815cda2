//! Shopping cart module.
//!
//! Contains the cart store, its lines, and pricing summaries.

mod cart;
mod pricing;

pub use cart::{CartLine, CartStore, MAX_QUANTITY_PER_LINE};
pub use pricing::{CartSummary, LineSubtotal};
