use crate::shared::client_log;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use thaw::*;

fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

/// Fallback for every unknown route. Reports the visited path once per change.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        client_log::report(
            "not_found",
            format!("404 Error: User attempted to access non-existent route: {}", pathname.get()),
        );
    });

    view! {
        <div class="container not-found">
            <div class="not-found__code">"404"</div>
            <h1>"Page Not Found"</h1>
            <p>
                "The page you're looking for doesn't exist or has been moved. "
                "Let's get you back on track."
            </p>
            <div class="not-found__actions">
                <a class="button button--primary" href="/">
                    {icon("home")}
                    "Go Home"
                </a>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| go_back()>
                    {icon("arrow-left")}
                    "Go Back"
                </Button>
            </div>
        </div>
    }
}
