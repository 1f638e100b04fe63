use crate::shared::icons::icon;
use leptos::prelude::*;

/// One breadcrumb; the last crumb is rendered without a link
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[component]
pub fn Breadcrumbs(#[prop(into)] crumbs: Signal<Vec<Crumb>>) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            {move || {
                crumbs
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let separator = (i > 0).then(|| view! {
                            <span class="breadcrumbs__separator">{icon("chevron-right")}</span>
                        });
                        let item = match crumb.href {
                            Some(href) => view! {
                                <a class="breadcrumbs__link" href=href>{crumb.label}</a>
                            }.into_any(),
                            None => view! {
                                <span class="breadcrumbs__current">{crumb.label}</span>
                            }.into_any(),
                        };
                        view! { {separator} {item} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
