use crate::domain::a001_product::ui::card::ProductCard;
use crate::shared::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::icons::icon;
use contracts::domain::a001_product::{categories, find_category, products, ProductFilter};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thaw::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

/// Heading for the selected category; unknown slugs fall back to "Products"
fn page_title(slug: &str) -> String {
    match find_category(slug) {
        Some(c) if c.is_all() => "All Products".to_string(),
        Some(c) => c.name.clone(),
        None => "Products".to_string(),
    }
}

/// `/products`: category chips (`?category=`), search and the result grid
#[component]
pub fn ProductsPage() -> impl IntoView {
    let query_map = use_query_map();
    let search = RwSignal::new(String::new());
    let view_mode = RwSignal::new(ViewMode::Grid);

    let filter = Memo::new(move |_| {
        let category = query_map.with(|q| q.get("category"));
        ProductFilter::new(category, search.get())
    });
    let results = Memo::new(move |_| filter.with(|f| f.apply_catalog()));
    let slug = Memo::new(move |_| filter.with(|f| f.category_slug().to_string()));

    let crumbs = Signal::derive(move || {
        let mut crumbs = vec![Crumb::link("Home", "/")];
        let slug = slug.get();
        match find_category(&slug).filter(|c| !c.is_all()) {
            Some(c) => {
                crumbs.push(Crumb::link("Products", "/products"));
                crumbs.push(Crumb::current(c.name.clone()));
            }
            None => crumbs.push(Crumb::current("Products")),
        }
        crumbs
    });

    let chips = move || {
        categories()
            .iter()
            .map(|c| {
                let chip_slug = c.slug.clone();
                let class = move || {
                    if slug.get() == chip_slug {
                        "chip chip--active"
                    } else {
                        "chip"
                    }
                };
                view! { <a class=class href=c.href()>{c.name.clone()}</a> }
            })
            .collect_view()
    };

    let toggle_class = move |mode: ViewMode| {
        move || {
            if view_mode.get() == mode {
                "view-toggle__button view-toggle__button--active"
            } else {
                "view-toggle__button"
            }
        }
    };

    view! {
        <div class="breadcrumbs-bar">
            <div class="container"><Breadcrumbs crumbs=crumbs /></div>
        </div>

        <div class="container section">
            <div class="products-page__header">
                <h1>{move || page_title(&slug.get())}</h1>
                <p>"Browse our complete selection of construction materials"</p>
            </div>

            <div class="products-page__toolbar">
                <div class="products-page__chips">{chips}</div>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=search placeholder="Search products..." />
                    </div>
                    <div class="view-toggle">
                        <button
                            type="button"
                            class=toggle_class(ViewMode::Grid)
                            aria-label="Grid view"
                            on:click=move |_| view_mode.set(ViewMode::Grid)
                        >
                            {icon("grid")}
                        </button>
                        <button
                            type="button"
                            class=toggle_class(ViewMode::List)
                            aria-label="List view"
                            on:click=move |_| view_mode.set(ViewMode::List)
                        >
                            {icon("list")}
                        </button>
                    </div>
                </Flex>
            </div>

            <p class="products-page__count">
                {move || format!("Showing {} of {} products", results.with(|r| r.len()), products().len())}
            </p>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <p>"No products found"</p>
                        <a
                            class="button button--outline"
                            href="/products"
                            on:click=move |_| search.set(String::new())
                        >
                            "Clear Filters"
                        </a>
                    </div>
                }
            >
                <div class=move || match view_mode.get() {
                    ViewMode::Grid => "product-grid",
                    ViewMode::List => "product-list",
                }>
                    {move || {
                        let wide = view_mode.get() == ViewMode::List;
                        results
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, product)| view! {
                                <ProductCard product=product delay_ms=stagger_delay(i) wide=wide />
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("all"), "All Products");
        assert_eq!(page_title("plywood"), "Plywood");
        assert_eq!(page_title("unknown"), "Products");
    }
}
