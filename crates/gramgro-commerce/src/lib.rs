//! Catalog, cart and storefront state for the GramGro storefront.
//!
//! This crate holds everything the storefront UI renders from:
//!
//! - **Catalog**: immutable product list loaded once at startup
//! - **Search**: category chips and case-insensitive title search
//! - **Cart**: line items keyed by product, with derived count and total
//! - **State**: the active view, drawer, loader and notices, driven by a
//!   single reducer
//!
//! # Example
//!
//! ```rust
//! use gramgro_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut state = AppState::new(catalog, Currency::INR);
//!
//! state.dispatch(Action::Navigate(View::Shop));
//! state.dispatch(Action::SetQuery("phone".to_string()));
//! let id = state.visible_products()[0].id.clone();
//! state.dispatch(Action::AddToCart(id));
//!
//! assert_eq!(state.cart_count(), 1);
//! println!("Total: {}", state.cart_total());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod state;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{CartLine, CartStore, CartSummary, LineSubtotal, MAX_QUANTITY_PER_LINE};

    // Search
    pub use crate::search::{filter_products, CategoryFilter, FilterChip, FilterState};

    // State
    pub use crate::state::{Action, AppState, Notice, Router, View};
}
