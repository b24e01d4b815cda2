//! Actions accepted by the state reducer.

use crate::ids::ProductId;
use crate::search::CategoryFilter;
use crate::state::View;
use serde::{Deserialize, Serialize};

/// A user or timer event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    Navigate(View),
    /// Search box text changed.
    SetQuery(String),
    SetCategory(CategoryFilter),
    AddToCart(ProductId),
    /// Signed quantity delta for a cart line.
    ChangeQuantity(ProductId, i64),
    RemoveFromCart(ProductId),
    ClearCart,
    ToggleDrawer,
    OpenDrawer,
    CloseDrawer,
    /// Startup loader delay elapsed.
    LoadingFinished,
    ShowDetails(ProductId),
    Checkout,
    DismissNotice,
}

impl Action {
    /// Short snake_case name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::SetQuery(_) => "set_query",
            Action::SetCategory(_) => "set_category",
            Action::AddToCart(_) => "add_to_cart",
            Action::ChangeQuantity(..) => "change_quantity",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::ClearCart => "clear_cart",
            Action::ToggleDrawer => "toggle_drawer",
            Action::OpenDrawer => "open_drawer",
            Action::CloseDrawer => "close_drawer",
            Action::LoadingFinished => "loading_finished",
            Action::ShowDetails(_) => "show_details",
            Action::Checkout => "checkout",
            Action::DismissNotice => "dismiss_notice",
        }
    }

    /// Product the action refers to, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            Action::AddToCart(id)
            | Action::ChangeQuantity(id, _)
            | Action::RemoveFromCart(id)
            | Action::ShowDetails(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Action::ChangeQuantity(ProductId::new("p-1"), -1)).unwrap();
        assert_eq!(json["type"], "change_quantity");
        assert_eq!(json["payload"][0], "p-1");
        assert_eq!(json["payload"][1], -1);

        let json = serde_json::to_value(Action::Checkout).unwrap();
        assert_eq!(json["type"], "checkout");
    }

    #[test]
    fn test_product_id() {
        assert_eq!(
            Action::AddToCart(ProductId::new("p-2")).product_id().map(ProductId::as_str),
            Some("p-2")
        );
        assert!(Action::ToggleDrawer.product_id().is_none());
    }
}
