//! The three storefront views and the router that selects one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Shop,
    About,
}

impl View {
    /// Navigation order.
    pub const ALL: [View; 3] = [View::Home, View::Shop, View::About];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Shop => "shop",
            View::About => "about",
        }
    }

    /// Capitalised nav label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Shop => "Shop",
            View::About => "About",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the active view. No history, no guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Router {
    current: View,
}

impl Router {
    pub fn current(&self) -> View {
        self.current
    }

    pub fn is_active(&self, view: View) -> bool {
        self.current == view
    }

    /// Switch to `view` unconditionally. Returns whether the view changed.
    pub fn navigate(&mut self, view: View) -> bool {
        let changed = self.current != view;
        self.current = view;
        changed
    }
}
