//! Application components.

use std::time::Duration;

use gramgro_commerce::prelude::*;
use gramgro_observability::install_tracing;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_meta::*;

use crate::store::{console_logger, load_catalog, load_config, use_store, Store};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (config, config_error) = load_config();
    let logger = console_logger(&config);
    if install_tracing(logger.clone()).is_err() {
        logger.debug("tracing subscriber already installed");
    }
    if let Some(e) = config_error {
        logger.error_with("config rejected, using defaults", &[("error", &e)]);
    }

    let catalog = load_catalog(&logger);
    let store = Store::new(AppState::from_config(catalog, &config), logger);
    provide_context(store);
    provide_context(config.clone());

    // Hide the loader once the delay elapses. If the timer cannot be
    // scheduled the loader is hidden immediately.
    let delay = Duration::from_millis(config.loader.delay_ms);
    match set_timeout_with_handle(move || store.dispatch(Action::LoadingFinished), delay) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => store.dispatch(Action::LoadingFinished),
    }

    let view = Memo::new(move |_| store.with(|s| s.view()));

    view! {
        <Title text=config.store.name.clone()/>
        <Meta name="description" content=config.store.tagline.clone()/>

        <Loader/>
        <Header/>
        <main>
            {move || match view.get() {
                View::Home => view! { <HomeView/> }.into_any(),
                View::Shop => view! { <ShopView/> }.into_any(),
                View::About => view! { <AboutView/> }.into_any(),
            }}
        </main>
        <Footer/>
        <CartDrawer/>
        <NoticeDialog/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Loader() -> impl IntoView {
    let store = use_store();

    view! {
        <Show when=move || store.with(|s| s.loading())>
            <div class="loader" aria-label="Loading">
                <div class="loader-ring"></div>
            </div>
        </Show>
    }
}

#[component]
fn Header() -> impl IntoView {
    let store = use_store();
    let config = expect_context::<StorefrontConfig>();
    let current = Memo::new(move |_| store.with(|s| s.view()));
    let count = Memo::new(move |_| store.with(|s| s.cart_count()));

    view! {
        <header class="site-header">
            <a
                href="#"
                class="brand"
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    store.dispatch(Action::Navigate(View::Home));
                }
            >
                {config.store.name}
            </a>
            <nav>
                {View::ALL
                    .into_iter()
                    .map(|target| {
                        view! {
                            <a
                                href=format!("#{}", target.as_str())
                                class="nav-link"
                                class:active=move || current.get() == target
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    store.dispatch(Action::Navigate(target));
                                }
                            >
                                {target.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <input
                type="search"
                class="search"
                placeholder="Search products"
                prop:value=move || store.with(|s| s.filter().query.clone())
                on:input=move |ev| store.dispatch(Action::SetQuery(event_target_value(&ev)))
            />
            <button
                class="cart-button"
                aria-label="Open cart"
                on:click=move |_| store.dispatch(Action::ToggleDrawer)
            >
                "Cart"
                <span class="badge">{move || count.get().to_string()}</span>
            </button>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer>
            <p>"© " {year.to_string()} " " {config.store.name} ". All rights reserved."</p>
        </footer>
    }
}

// ============================================================================
// Views
// ============================================================================

/// Landing view with the hero banner.
#[component]
fn HomeView() -> impl IntoView {
    let store = use_store();
    let config = expect_context::<StorefrontConfig>();

    view! {
        <section class="view hero">
            <h1>{config.store.tagline}</h1>
            <p>{config.store.subtitle}</p>
            <div class="hero-actions">
                <button class="btn" on:click=move |_| store.dispatch(Action::Navigate(View::Shop))>
                    "Shop now"
                </button>
                <button
                    class="btn btn-ghost"
                    on:click=move |_| store.dispatch(Action::Navigate(View::About))
                >
                    "Learn more"
                </button>
            </div>
        </section>
    }
}

#[component]
fn ShopView() -> impl IntoView {
    let store = use_store();
    let products = Memo::new(move |_| {
        store.with(|s| s.visible_products().into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <section class="view shop">
            <h2>"Featured products"</h2>
            <Filters/>
            <Show
                when=move || products.with(|p| !p.is_empty())
                fallback=|| view! { <p class="empty">"No products match your search."</p> }
            >
                <div class="products">
                    <For
                        each=move || products.get()
                        key=|p: &Product| p.id.clone()
                        children=|product: Product| view! { <ProductCard product=product/> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn AboutView() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();

    view! {
        <section class="view about">
            <h2>"About " {config.store.name}</h2>
            <p>{config.store.about}</p>
        </section>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn Filters() -> impl IntoView {
    let store = use_store();
    let active = Memo::new(move |_| store.with(|s| s.filter().category));

    view! {
        <div class="filters" role="group" aria-label="Categories">
            {CategoryFilter::chips()
                .into_iter()
                .map(|chip| {
                    view! {
                        <button
                            class="chip"
                            class:active=move || active.get() == chip.filter
                            on:click=move |_| store.dispatch(Action::SetCategory(chip.filter))
                        >
                            {chip.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = use_store();
    let loaded = RwSignal::new(false);
    let price = product.price_in(store.currency()).display();
    let details_id = product.id.clone();
    let add_id = product.id.clone();

    view! {
        <article class="product-card">
            <div class="media" class:skeleton=move || !loaded.get()>
                <img
                    src=product.image
                    alt=product.title.clone()
                    loading="lazy"
                    class:loaded=move || loaded.get()
                    on:load=move |_| loaded.set(true)
                />
            </div>
            <div class="product-info">
                <h3>{product.title}</h3>
                <p class="category">{product.category_label}</p>
                <p class="price">{price}</p>
                <div class="card-actions">
                    <button
                        class="btn btn-ghost"
                        on:click=move |_| store.dispatch(Action::ShowDetails(details_id.clone()))
                    >
                        "Details"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| store.dispatch(Action::AddToCart(add_id.clone()))
                    >
                        "Add to cart"
                    </button>
                </div>
            </div>
        </article>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartDrawer() -> impl IntoView {
    let store = use_store();
    let open = Memo::new(move |_| store.with(|s| s.drawer_open()));
    let lines = Memo::new(move |_| store.with(|s| s.cart().lines().to_vec()));
    let total = Memo::new(move |_| store.with(|s| s.cart_total()));

    view! {
        <aside class="cart-drawer" class:open=move || open.get() aria-hidden=move || (!open.get()).to_string()>
            <div class="drawer-header">
                <h2>"Your cart"</h2>
                <button
                    class="icon-button"
                    aria-label="Close cart"
                    on:click=move |_| store.dispatch(Action::CloseDrawer)
                >
                    "×"
                </button>
            </div>
            <div class="drawer-body">
                {move || {
                    let lines = lines.get();
                    if lines.is_empty() {
                        view! { <p class="empty">"Your cart is empty."</p> }.into_any()
                    } else {
                        lines
                            .into_iter()
                            .map(|line| view! { <CartRow line=line/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <div class="drawer-footer">
                <p class="total">"Total: " {move || total.get().display()}</p>
                <button class="btn" on:click=move |_| store.dispatch(Action::Checkout)>
                    "Checkout"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let store = use_store();
    let price = line.unit_price(store.currency()).display();
    let dec_id = line.product_id.clone();
    let inc_id = line.product_id.clone();
    let remove_id = line.product_id.clone();

    view! {
        <div class="cart-row">
            <img src=line.image alt=line.title.clone()/>
            <div class="cart-row-info">
                <strong>{line.title}</strong>
                <span class="price">{price}</span>
            </div>
            <div class="qty">
                <button
                    aria-label="Decrease quantity"
                    on:click=move |_| store.dispatch(Action::ChangeQuantity(dec_id.clone(), -1))
                >
                    "−"
                </button>
                <span>{line.quantity.to_string()}</span>
                <button
                    aria-label="Increase quantity"
                    on:click=move |_| store.dispatch(Action::ChangeQuantity(inc_id.clone(), 1))
                >
                    "+"
                </button>
            </div>
            <button
                class="link-button"
                on:click=move |_| store.dispatch(Action::RemoveFromCart(remove_id.clone()))
            >
                "Remove"
            </button>
        </div>
    }
}

// ============================================================================
// Notices
// ============================================================================

/// Modal for product details and checkout messages.
#[component]
fn NoticeDialog() -> impl IntoView {
    let store = use_store();
    let notice = Memo::new(move |_| store.with(|s| s.notice().cloned()));

    move || {
        notice.get().map(|notice| {
            let paragraphs = notice
                .body()
                .into_iter()
                .map(|text| view! { <p>{text}</p> })
                .collect_view();

            view! {
                <div class="notice-backdrop" on:click=move |_| store.dispatch(Action::DismissNotice)>
                    <div
                        class="notice"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                    >
                        <h3>{notice.heading().to_string()}</h3>
                        {paragraphs}
                        <button class="btn" on:click=move |_| store.dispatch(Action::DismissNotice)>
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
