use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Catalog tile used on the home page and the products page
#[component]
pub fn ProductCard(
    product: &'static Product,
    #[prop(optional)] delay_ms: u32,
    /// Horizontal layout for the list view
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let class = if wide { "product-card product-card--wide" } else { "product-card" };

    let spec_chips = [product.specs.size.as_deref(), product.specs.material.as_deref()]
        .into_iter()
        .flatten()
        .map(|chip| view! { <span class="product-card__chip">{chip}</span> })
        .collect_view();

    view! {
        <CardAnimated class=class delay_ms=delay_ms>
            <div class="product-card__media">
                <img src=product.image.as_str() alt=product.name.as_str() loading="lazy" />
                {product.featured.then(|| view! {
                    <span class="product-card__badge product-card__badge--left">
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>"Featured"</Badge>
                    </span>
                })}
                {(!product.in_stock).then(|| view! {
                    <span class="product-card__badge product-card__badge--right">
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Out of Stock"</Badge>
                    </span>
                })}
            </div>
            <div class="product-card__body">
                <span class="product-card__category">{product.category.as_str()}</span>
                <h3 class="product-card__title">
                    <a href=product.detail_href()>{product.name.as_str()}</a>
                </h3>
                <p class="product-card__description">{product.description.as_str()}</p>
                <div class="product-card__chips">{spec_chips}</div>
                <div class="product-card__actions">
                    <a class="button button--primary button--small" href=product.detail_href()>"View Details"</a>
                    <a
                        class="button button--outline button--small"
                        href=product.quote_href()
                        title="Request a quote"
                    >
                        {icon("file-text")}
                    </a>
                </div>
            </div>
        </CardAnimated>
    }
}
