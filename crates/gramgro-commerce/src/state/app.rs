//! The storefront state and its reducer.

use crate::cart::CartStore;
use crate::catalog::{Catalog, Product};
use crate::config::StorefrontConfig;
use crate::money::{Currency, Money};
use crate::search::FilterState;
use crate::state::{Action, Notice, Router, View};

/// Everything the presentation layer renders from.
///
/// Fields are read through accessors and changed only by
/// [`AppState::dispatch`]. Derived values are computed on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    catalog: Catalog,
    currency: Currency,
    router: Router,
    filter: FilterState,
    cart: CartStore,
    drawer_open: bool,
    loading: bool,
    notice: Option<Notice>,
}

impl AppState {
    /// Initial state: home view, no filter, empty cart, drawer closed,
    /// loader showing.
    pub fn new(catalog: Catalog, currency: Currency) -> Self {
        Self {
            catalog,
            currency,
            router: Router::default(),
            filter: FilterState::default(),
            cart: CartStore::new(currency),
            drawer_open: false,
            loading: true,
            notice: None,
        }
    }

    pub fn from_config(catalog: Catalog, config: &StorefrontConfig) -> Self {
        Self::new(catalog, config.display.currency)
    }

    /// Apply an action. Returns whether anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Navigate(view) => self.router.navigate(view),
            Action::SetQuery(query) => replace(&mut self.filter.query, query),
            Action::SetCategory(category) => replace(&mut self.filter.category, category),
            Action::AddToCart(id) => match self.catalog.get(&id) {
                Some(product) => {
                    let before = self.cart.count();
                    self.cart.add(product);
                    self.cart.count() != before
                }
                None => {
                    tracing::warn!(product_id = %id, "add for unknown product ignored");
                    false
                }
            },
            Action::ChangeQuantity(id, delta) => self.cart.change_quantity(&id, delta),
            Action::RemoveFromCart(id) => self.cart.remove(&id),
            Action::ClearCart => {
                let had_lines = !self.cart.is_empty();
                self.cart.clear();
                had_lines
            }
            Action::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                true
            }
            Action::OpenDrawer => replace(&mut self.drawer_open, true),
            Action::CloseDrawer => replace(&mut self.drawer_open, false),
            Action::LoadingFinished => replace(&mut self.loading, false),
            Action::ShowDetails(id) => match self.catalog.get(&id) {
                Some(product) => {
                    self.notice = Some(Notice::details(product, self.currency));
                    true
                }
                None => {
                    tracing::warn!(product_id = %id, "details for unknown product ignored");
                    false
                }
            },
            Action::Checkout => replace(&mut self.notice, Some(Notice::CheckoutUnavailable)),
            Action::DismissNotice => self.notice.take().is_some(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn view(&self) -> View {
        self.router.current()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Products matching the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;
    use crate::search::CategoryFilter;

    fn state() -> AppState {
        let catalog = Catalog::new(vec![
            Product::new("p-1", "Smartphone X", 1000, Category::Electronics),
            Product::new("p-2", "Desk Lamp", 250, Category::Home),
        ])
        .unwrap();
        AppState::new(catalog, Currency::INR)
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.view(), View::Home);
        assert!(state.loading());
        assert!(!state.drawer_open());
        assert!(state.notice().is_none());
        assert_eq!(state.visible_products().len(), 2);
        assert_eq!(state.cart_count(), 0);
    }

    #[test]
    fn test_navigate() {
        let mut state = state();
        assert!(state.dispatch(Action::Navigate(View::Shop)));
        assert_eq!(state.view(), View::Shop);
        assert!(!state.dispatch(Action::Navigate(View::Shop)));
    }

    #[test]
    fn test_filter_actions() {
        let mut state = state();
        state.dispatch(Action::SetCategory(CategoryFilter::Only(Category::Home)));
        assert_eq!(state.visible_products()[0].title, "Desk Lamp");

        state.dispatch(Action::SetQuery("phone".to_string()));
        assert!(state.visible_products().is_empty());

        state.dispatch(Action::SetCategory(CategoryFilter::All));
        assert_eq!(state.visible_products()[0].title, "Smartphone X");
        assert_eq!(state.catalog().len(), 2);
    }

    #[test]
    fn test_cart_actions() {
        let mut state = state();
        let phone = ProductId::new("p-1");

        assert!(state.dispatch(Action::AddToCart(phone.clone())));
        assert!(state.dispatch(Action::AddToCart(phone.clone())));
        assert!(state.dispatch(Action::AddToCart(ProductId::new("p-2"))));
        assert_eq!(state.cart_count(), 3);
        assert_eq!(state.cart_total().amount, 2250);

        assert!(state.dispatch(Action::ChangeQuantity(phone.clone(), -2)));
        assert!(!state.cart().contains(&phone));
        assert_eq!(state.cart_total().amount, 250);

        assert!(state.dispatch(Action::RemoveFromCart(ProductId::new("p-2"))));
        assert!(state.cart().is_empty());
        assert!(!state.dispatch(Action::ClearCart));
    }

    #[test]
    fn test_unknown_product_is_noop() {
        let mut state = state();
        let before = state.clone();
        assert!(!state.dispatch(Action::AddToCart(ProductId::new("ghost"))));
        assert!(!state.dispatch(Action::ShowDetails(ProductId::new("ghost"))));
        assert!(!state.dispatch(Action::RemoveFromCart(ProductId::new("ghost"))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_drawer() {
        let mut state = state();
        state.dispatch(Action::ToggleDrawer);
        assert!(state.drawer_open());
        state.dispatch(Action::ToggleDrawer);
        assert!(!state.drawer_open());

        assert!(state.dispatch(Action::OpenDrawer));
        assert!(!state.dispatch(Action::OpenDrawer));
        assert!(state.dispatch(Action::CloseDrawer));
        assert!(!state.drawer_open());
    }

    #[test]
    fn test_loading_finishes_once() {
        let mut state = state();
        assert!(state.dispatch(Action::LoadingFinished));
        assert!(!state.loading());
        assert!(!state.dispatch(Action::LoadingFinished));
    }

    #[test]
    fn test_checkout_keeps_cart() {
        let mut state = state();
        state.dispatch(Action::AddToCart(ProductId::new("p-1")));
        state.dispatch(Action::Checkout);

        assert_eq!(state.notice(), Some(&Notice::CheckoutUnavailable));
        assert_eq!(state.cart_count(), 1);

        assert!(state.dispatch(Action::DismissNotice));
        assert!(state.notice().is_none());
        assert!(!state.dispatch(Action::DismissNotice));
    }

    #[test]
    fn test_show_details() {
        let mut state = state();
        state.dispatch(Action::ShowDetails(ProductId::new("p-2")));
        assert_eq!(state.notice().map(Notice::heading), Some("Desk Lamp"));
    }

    #[test]
    fn test_from_config_uses_currency() {
        let mut config = StorefrontConfig::default();
        config.display.currency = Currency::USD;
        let state = AppState::from_config(Catalog::default(), &config);
        assert_eq!(state.cart_total(), Money::zero(Currency::USD));
        assert!(state.visible_products().is_empty());
    }
}
