//! Product catalog module.
//!
//! Contains the product record, categories, and the immutable catalog
//! loaded once at startup.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::Category;
pub use product::Product;
