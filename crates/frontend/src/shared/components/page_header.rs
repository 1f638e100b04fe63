use leptos::prelude::*;

/// Banner at the top of a content page
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Small label above the title
    #[prop(optional, into)]
    eyebrow: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                {move || eyebrow.get().map(|e| view! { <span class="page-header__eyebrow">{e}</span> })}
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
        </section>
    }
}
