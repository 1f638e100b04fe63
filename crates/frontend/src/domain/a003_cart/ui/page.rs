use crate::domain::a003_cart::{use_cart, CartContext};
use crate::shared::icons::icon;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="container section empty-state">
            <div class="empty-state__icon">{icon("cart")}</div>
            <h1>"Your Cart is Empty"</h1>
            <p>"Browse our products and add items to your cart"</p>
            <a class="button button--primary" href="/products">
                "Browse Products"
                {icon("arrow-right")}
            </a>
        </div>
    }
}

#[component]
fn CartLineRow(cart: CartContext, product: &'static Product, quantity: u32) -> impl IntoView {
    let id = product.id.as_str();

    view! {
        <div class="cart-line">
            <div class="cart-line__media">
                <img src=product.image.as_str() alt=product.name.as_str() />
            </div>
            <div class="cart-line__body">
                <div class="cart-line__top">
                    <div>
                        <a class="cart-line__name" href=product.detail_href()>{product.name.as_str()}</a>
                        <p class="cart-line__category">{product.category.as_str()}</p>
                    </div>
                    <button
                        type="button"
                        class="cart-line__remove"
                        aria-label="Remove"
                        on:click=move |_| cart.remove(id)
                    >
                        {icon("trash")}
                    </button>
                </div>
                <div class="cart-line__bottom">
                    <div class="quantity">
                        <button
                            type="button"
                            aria-label="Decrease"
                            on:click=move |_| cart.update_quantity(id, -1)
                        >
                            {icon("minus")}
                        </button>
                        <span class="quantity__value">{quantity}</span>
                        <button
                            type="button"
                            aria-label="Increase"
                            on:click=move |_| cart.update_quantity(id, 1)
                        >
                            {icon("plus")}
                        </button>
                    </div>
                    <span class="cart-line__size">{product.specs.size.clone().unwrap_or_default()}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OrderSummary(cart: CartContext) -> impl IntoView {
    view! {
        <div class="card-panel order-summary">
            <h2>"Order Summary"</h2>
            <dl class="order-summary__rows">
                <div><dt>"Items"</dt><dd>{move || cart.total_items()}</dd></div>
                <div><dt>"Subtotal"</dt><dd>"Request Quote"</dd></div>
                <div><dt>"Delivery"</dt><dd>"TBD"</dd></div>
                <div class="order-summary__total"><dt>"Total"</dt><dd>"Quote Required"</dd></div>
            </dl>
            <a class="button button--primary button--block" href="/contact?cart=1">
                "Request Quote"
                {icon("arrow-right")}
            </a>
            <a class="button button--outline button--block" href="/products">"Continue Shopping"</a>
            <p class="order-summary__note">"Our team will contact you with pricing and availability"</p>
        </div>
    }
}

/// `/cart`: quote cart with quantity controls
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <Show when=move || !cart.is_empty() fallback=|| view! { <EmptyCart /> }>
            <div class="container section">
                <div class="cart-page__header">
                    <h1>"Shopping Cart"</h1>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| cart.clear()>
                        "Clear Cart"
                    </Button>
                </div>
                <div class="cart-page__grid">
                    <div class="cart-page__lines">
                        {move || {
                            cart.lines()
                                .into_iter()
                                .map(|(product, quantity)| view! {
                                    <CartLineRow cart=cart product=product quantity=quantity />
                                })
                                .collect_view()
                        }}
                    </div>
                    <OrderSummary cart=cart />
                </div>
            </div>
        </Show>
    }
}
