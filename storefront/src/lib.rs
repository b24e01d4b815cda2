//! GramGro storefront
//!
//! Client-side rendered Leptos app over `gramgro-commerce`:
//! - Home, Shop and About views switched in place
//! - Category chips and live title search
//! - Cart drawer with quantity controls and running total
//! - Session logging to the browser console

mod app;
mod store;

pub use app::App;
pub use store::{use_store, Store};
