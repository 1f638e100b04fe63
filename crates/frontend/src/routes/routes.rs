use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a001_product::ui::list::ProductsPage;
use crate::domain::a002_quote_request::ui::ContactPage;
use crate::domain::a003_cart::ui::CartPage;
use crate::layout::SiteShell;
use crate::pages::{AboutPage, HomePage, NotFoundPage, ServicesPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <SiteShell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/services") view=ServicesPage />
                </Routes>
            </SiteShell>
        </Router>
    }
}
