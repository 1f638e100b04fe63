use crate::shared::icons::icon;
use crate::shared::site::{
    NavLink, ADDRESS, COMPANY_NAME, COMPANY_SHORT, EMAIL, FACEBOOK_URL, FOOTER_COMPANY,
    FOOTER_SERVICES, HOURS, PHONE,
};
use contracts::domain::a001_product::categories;
use leptos::prelude::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
fn LinkColumn(title: &'static str, links: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="site-footer__column">
            <h3 class="site-footer__heading">{title}</h3>
            <ul class="site-footer__links">
                {links
                    .into_iter()
                    .map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn nav_pairs(links: &[NavLink]) -> Vec<(String, String)> {
    links
        .iter()
        .map(|l| (l.label.to_string(), l.href.to_string()))
        .collect()
}

#[component]
pub fn Footer() -> impl IntoView {
    let product_links: Vec<(String, String)> = categories()
        .iter()
        .filter(|c| !c.is_all())
        .take(6)
        .map(|c| (c.name.clone(), c.href()))
        .collect();

    let contact_row = |name: &'static str, text: &'static str| {
        view! {
            <div class="site-footer__contact-row">
                <span class="site-footer__contact-icon">{icon(name)}</span>
                <span>{text}</span>
            </div>
        }
    };

    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div class="site-footer__about">
                    <a href="/" class="logo logo--inverted">
                        <span class="logo__mark">"Q"</span>
                        <span class="logo__text">
                            <span class="logo__name">{COMPANY_SHORT}</span>
                            <span class="logo__tagline">"Construction"</span>
                        </span>
                    </a>
                    <p class="site-footer__blurb">
                        "Your trusted partner for quality construction materials. Serving contractors, builders, and homeowners with reliable products and exceptional service."
                    </p>
                    {contact_row("phone", PHONE)}
                    {contact_row("mail", EMAIL)}
                    {contact_row("map-pin", ADDRESS)}
                    {contact_row("clock", HOURS)}
                </div>

                <LinkColumn title="Products" links=product_links />
                <LinkColumn title="Services" links=nav_pairs(&FOOTER_SERVICES) />
                <LinkColumn title="Company" links=nav_pairs(&FOOTER_COMPANY) />
            </div>

            <div class="site-footer__bottom">
                <div class="container site-footer__bottom-bar">
                    <p>{format!("© {} {}. All rights reserved.", current_year(), COMPANY_NAME)}</p>
                    <div class="site-footer__social">
                        <a href=FACEBOOK_URL target="_blank" rel="noopener" aria-label="Facebook">{icon("facebook")}</a>
                        <a href="#" aria-label="Instagram">{icon("instagram")}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
