use crate::domain::a003_cart::use_cart;
use crate::shared::icons::icon;
use crate::shared::site::{is_nav_active, COMPANY_SHORT, MAIN_NAV};
use contracts::domain::a001_product::categories;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
fn Logo() -> impl IntoView {
    view! {
        <a href="/" class="logo">
            <span class="logo__mark">"Q"</span>
            <span class="logo__text">
                <span class="logo__name">{COMPANY_SHORT}</span>
                <span class="logo__tagline">"Construction"</span>
            </span>
        </a>
    }
}

/// "Products" entry with a hover dropdown listing every category
#[component]
fn ProductsMenu(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let items = categories()
        .iter()
        .map(|c| {
            let label = if c.is_all() { "All Products".to_string() } else { c.name.clone() };
            view! {
                <li><a class="nav-dropdown__item" href=c.href()>{label}</a></li>
            }
        })
        .collect_view();

    view! {
        <div class="nav-dropdown">
            <a
                href="/products"
                class=move || if active.get() { "nav__link nav__link--active" } else { "nav__link" }
            >
                "Products"
                {icon("chevron-down")}
            </a>
            <ul class="nav-dropdown__menu">{items}</ul>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let cart = use_cart();
    let mobile_open = RwSignal::new(false);

    let pathname = location.pathname;
    let is_active = move |href: &'static str| is_nav_active(href, &pathname.get());

    let desktop_links = MAIN_NAV
        .iter()
        .map(|item| {
            let href = item.href;
            if href == "/products" {
                view! { <ProductsMenu active=Signal::derive(move || is_active(href)) /> }.into_any()
            } else {
                view! {
                    <a
                        href=href
                        class=move || if is_active(href) { "nav__link nav__link--active" } else { "nav__link" }
                    >
                        {item.label}
                    </a>
                }
                .into_any()
            }
        })
        .collect_view();

    let mobile_links = move || {
        MAIN_NAV
            .iter()
            .map(|item| {
                let href = item.href;
                view! {
                    <a
                        href=href
                        class=move || if is_active(href) { "mobile-nav__link mobile-nav__link--active" } else { "mobile-nav__link" }
                        on:click=move |_| mobile_open.set(false)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <nav class="container site-header__bar">
                <Logo />

                <div class="nav">{desktop_links}</div>

                <div class="site-header__actions">
                    <a href="/cart" class="cart-link" aria-label="Cart">
                        {icon("cart")}
                        <span class="cart-link__count">{move || cart.total_items()}</span>
                    </a>
                    <a href="/contact" class="button button--primary site-header__cta">"Request Quote"</a>
                    <button
                        type="button"
                        class="site-header__menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || if mobile_open.get() { icon("close") } else { icon("menu") }}
                    </button>
                </div>
            </nav>

            <Show when=move || mobile_open.get()>
                <div class="mobile-nav">
                    <div class="container">
                        {mobile_links()}
                        <a
                            href="/contact"
                            class="button button--primary mobile-nav__cta"
                            on:click=move |_| mobile_open.set(false)
                        >
                            "Request Quote"
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
