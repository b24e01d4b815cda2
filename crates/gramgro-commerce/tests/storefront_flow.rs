//! End-to-end reducer tests against the bundled catalog.

use gramgro_commerce::prelude::*;

fn fresh_state() -> AppState {
    AppState::new(Catalog::builtin().unwrap(), Currency::INR)
}

fn expected_total(cart: &CartStore) -> u64 {
    cart.lines()
        .iter()
        .map(|l| l.price * u64::from(l.quantity))
        .sum()
}

#[test]
fn shopping_session() {
    let mut state = fresh_state();
    state.dispatch(Action::LoadingFinished);
    state.dispatch(Action::Navigate(View::Shop));
    state.dispatch(Action::SetCategory(Category::Electronics.into()));

    let electronics: Vec<_> = state.visible_products().iter().map(|p| p.id.clone()).collect();
    assert!(!electronics.is_empty());
    assert!(state
        .visible_products()
        .iter()
        .all(|p| p.category == Category::Electronics));

    for id in &electronics {
        state.dispatch(Action::AddToCart(id.clone()));
    }
    state.dispatch(Action::AddToCart(electronics[0].clone()));
    state.dispatch(Action::ToggleDrawer);

    assert!(state.drawer_open());
    assert_eq!(state.cart_count(), electronics.len() as u64 + 1);
    assert_eq!(state.cart().line(&electronics[0]).map(|l| l.quantity), Some(2));
    assert_eq!(state.cart_total().amount, expected_total(state.cart()));

    state.dispatch(Action::Checkout);
    assert_eq!(state.notice(), Some(&Notice::CheckoutUnavailable));
    assert_eq!(state.cart_count(), electronics.len() as u64 + 1);
}

#[test]
fn category_filter_keeps_catalog_order() {
    let mut state = fresh_state();
    state.dispatch(Action::SetCategory(Category::Electronics.into()));

    let expected: Vec<_> = state
        .catalog()
        .iter()
        .filter(|p| p.category == Category::Electronics)
        .map(|p| p.id.clone())
        .collect();
    let visible: Vec<_> = state.visible_products().iter().map(|p| p.id.clone()).collect();
    assert_eq!(visible, expected);
}

#[test]
fn phone_search_finds_only_the_smartphone() {
    let catalog = Catalog::new(vec![
        Product::new("a", "Smartphone X", 49999, Category::Electronics),
        Product::new("b", "Desk Lamp", 1899, Category::Home),
    ])
    .unwrap();
    let mut state = AppState::new(catalog, Currency::INR);
    state.dispatch(Action::SetQuery("Phone".to_string()));

    let titles: Vec<_> = state.visible_products().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Smartphone X"]);
}

#[test]
fn removing_unknown_id_leaves_cart_unchanged() {
    let mut state = fresh_state();
    let first = state.catalog().products()[0].id.clone();
    state.dispatch(Action::AddToCart(first));

    let before = state.cart().clone();
    assert!(!state.dispatch(Action::RemoveFromCart(ProductId::new("missing"))));
    assert_eq!(state.cart(), &before);
}

#[test]
fn decrementing_by_full_quantity_removes_line() {
    let mut state = fresh_state();
    let id = state.catalog().products()[1].id.clone();
    for _ in 0..3 {
        state.dispatch(Action::AddToCart(id.clone()));
    }

    state.dispatch(Action::ChangeQuantity(id.clone(), -3));
    assert!(!state.cart().contains(&id));
    assert_eq!(state.cart_count(), 0);
}

#[test]
fn total_matches_lines_after_mixed_operations() {
    let mut state = fresh_state();
    let ids: Vec<_> = state.catalog().iter().map(|p| p.id.clone()).collect();

    // Deterministic linear congruential sequence of operations.
    let mut seed: u64 = 0x5eed;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let id = ids[(seed >> 33) as usize % ids.len()].clone();
        let action = match (seed >> 20) % 4 {
            0 | 1 => Action::AddToCart(id),
            2 => Action::ChangeQuantity(id, ((seed >> 8) % 5) as i64 - 2),
            _ => Action::RemoveFromCart(id),
        };
        state.dispatch(action);

        let cart = state.cart();
        assert_eq!(state.cart_total().amount, expected_total(cart));
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));

        let mut seen = std::collections::HashSet::new();
        assert!(cart.lines().iter().all(|l| seen.insert(l.product_id.clone())));
    }
}

#[test]
fn config_drives_initial_state() {
    let config = StorefrontConfig::from_toml_str("[display]\ncurrency = \"USD\"").unwrap();
    let state = AppState::from_config(Catalog::builtin().unwrap(), &config);
    assert_eq!(state.currency(), Currency::USD);
    assert!(state.cart_total().display().starts_with('$'));
}
