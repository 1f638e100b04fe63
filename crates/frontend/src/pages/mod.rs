pub mod about;
pub mod home;
pub mod not_found;
pub mod services;

pub use about::AboutPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Icon tile with a title and a short description, shared by the home and about grids
#[component]
pub(crate) fn FeatureTile(
    icon_name: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-tile">
            <div class="feature-tile__icon">{icon(icon_name)}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
