//! Storefront application state.
//!
//! All UI state lives in [`AppState`] and changes only through
//! [`AppState::dispatch`].

mod action;
mod app;
mod notice;
mod view;

pub use action::Action;
pub use app::AppState;
pub use notice::Notice;
pub use view::{Router, View};
