use crate::domain::a003_cart::CartContext;
use crate::layout::NoticeService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Cart survives navigation but not a page reload
    provide_context(CartContext::new());

    provide_context(NoticeService::new());

    view! {
        <AppRoutes />
    }
}
