//! Search module.
//!
//! Category filtering and title search over the catalog.

mod filter;
mod query;

pub use filter::{CategoryFilter, FilterChip};
pub use query::{filter_products, FilterState};
