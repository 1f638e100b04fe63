use crate::domain::a003_cart::use_cart;
use crate::layout::use_notices;
use crate::shared::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::shared::icons::icon;
use crate::shared::site::PHONE;
use contracts::domain::a001_product::{find_product, related_products, Product};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

const RELATED_LIMIT: usize = 4;

const APPLICATIONS: [&str; 4] = [
    "Residential construction",
    "Commercial buildings",
    "Industrial facilities",
    "Renovation projects",
];

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="container section empty-state">
            <h1>"Product Not Found"</h1>
            <p>"The product you're looking for doesn't exist."</p>
            <a class="button button--primary" href="/products">"Back to Products"</a>
        </div>
    }
}

#[component]
fn SpecTable(product: &'static Product) -> impl IntoView {
    let rows = product
        .specs
        .rows()
        .into_iter()
        .map(|(label, value)| view! {
            <tr>
                <td class="spec-table__label">{label}</td>
                <td class="spec-table__value">{value}</td>
            </tr>
        })
        .collect_view();

    view! {
        <table class="spec-table">
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn RelatedProducts(product: &'static Product) -> impl IntoView {
    let related = related_products(product, RELATED_LIMIT);
    (!related.is_empty()).then(|| {
        let tiles = related
            .into_iter()
            .map(|p| view! {
                <a class="related-tile" href=p.detail_href()>
                    <div class="related-tile__media">
                        <img src=p.image.as_str() alt=p.name.as_str() loading="lazy" />
                    </div>
                    <h3>{p.name.as_str()}</h3>
                    <p>{p.category.as_str()}</p>
                </a>
            })
            .collect_view();
        view! {
            <section class="related">
                <h2>"Related Products"</h2>
                <div class="related__grid">{tiles}</div>
            </section>
        }
    })
}

#[component]
fn ProductDetails(product: &'static Product) -> impl IntoView {
    let cart = use_cart();
    let notices = use_notices();

    let add_to_cart = move |_: leptos::ev::MouseEvent| {
        cart.add(&product.id, 1);
        log::info!("added {} to cart", product.id);
        notices.success("Added to cart", format!("{} was added to your cart.", product.name));
    };

    let crumbs = vec![
        Crumb::link("Home", "/"),
        Crumb::link("Products", "/products"),
        Crumb::link(product.category.clone(), format!("/products?category={}", product.category_slug)),
        Crumb::current(product.name.clone()),
    ];

    view! {
        <div class="breadcrumbs-bar">
            <div class="container"><Breadcrumbs crumbs=crumbs /></div>
        </div>

        <div class="container section">
            <div class="product-detail">
                <div class="product-detail__media">
                    <img src=product.image.as_str() alt=product.name.as_str() />
                    {product.featured.then(|| view! {
                        <span class="product-card__badge product-card__badge--left">
                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>"Featured"</Badge>
                        </span>
                    })}
                </div>

                <div class="product-detail__info">
                    <span class="product-card__category">{product.category.as_str()}</span>
                    <h1>{product.name.as_str()}</h1>

                    {if product.in_stock {
                        view! {
                            <div class="stock stock--in">{icon("circle-check")}<span>"In Stock"</span></div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="stock stock--out"><span class="stock__dot"></span><span>"Out of Stock"</span></div>
                        }.into_any()
                    }}

                    <p class="product-detail__description">{product.description.as_str()}</p>

                    <h2>"Technical Specifications"</h2>
                    <SpecTable product=product />

                    <h2>"Common Applications"</h2>
                    <ul class="check-list">
                        {APPLICATIONS
                            .iter()
                            .map(|a| view! { <li>{icon("check")}{*a}</li> })
                            .collect_view()}
                    </ul>

                    <div class="product-detail__actions">
                    <Flex gap=FlexGap::Medium>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=!product.in_stock
                            on_click=add_to_cart
                        >
                            {icon("cart")}
                            "Add to Cart"
                        </Button>
                        <a class="button button--outline" href=product.quote_href()>
                            {icon("file-text")}
                            "Request Quote"
                        </a>
                    </Flex>
                    </div>

                    <div class="help-box">
                        {icon("phone")}
                        <div>
                            <p class="help-box__title">"Need help choosing?"</p>
                            <p>{format!("Call us at {}", PHONE)}</p>
                        </div>
                    </div>
                </div>
            </div>

            <RelatedProducts product=product />
        </div>
    }
}

/// `/products/:id`
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let product = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| find_product(&id)));

    move || match product.get() {
        Some(product) => view! { <ProductDetails product=product /> }.into_any(),
        None => {
            let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
            log::warn!("unknown product id: {}", id);
            view! { <ProductNotFound /> }.into_any()
        }
    }
}
