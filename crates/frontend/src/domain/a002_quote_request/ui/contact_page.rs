use super::form::{ContactQuery, QuoteForm, QuoteFormVm};
use crate::domain::a003_cart::use_cart;
use crate::layout::use_notices;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::site::{ADDRESS, EMAIL, MAP_EMBED_URL, PHONE, PHONE_HREF};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
fn InfoItem(icon_name: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="contact-info__item">
            <div class="contact-info__icon">{icon(icon_name)}</div>
            <div>
                <h3 class="contact-info__title">{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <aside class="contact-info">
            <h2>"Get in Touch"</h2>
            <InfoItem icon_name="phone" title="Phone">
                <p><a href=PHONE_HREF>{PHONE}</a></p>
            </InfoItem>
            <InfoItem icon_name="mail" title="Email">
                <p><a href=format!("mailto:{}", EMAIL)>{EMAIL}</a></p>
            </InfoItem>
            <InfoItem icon_name="map-pin" title="Address">
                <p>"Manggahan, " {ADDRESS}</p>
                <p>"Philippines 4107"</p>
            </InfoItem>
            <InfoItem icon_name="clock" title="Business Hours">
                <p>"Monday - Friday: 8:00 AM - 5:00 PM"</p>
                <p>"Saturday - Sunday: Closed"</p>
            </InfoItem>
        </aside>
    }
}

/// `/contact`: contact details and the quote request form.
///
/// `?product=<id>` or `?cart=1` pre-fill subject and message.
#[component]
pub fn ContactPage() -> impl IntoView {
    let location = use_location();
    let cart = use_cart();
    let notices = use_notices();

    let query = Memo::new(move |_| ContactQuery::parse(&location.search.get()));

    let initial = query.with_untracked(|q| q.initial_fields(&cart.snapshot()));
    let vm = QuoteFormVm::new(initial, notices);

    // Same page, new query string: refresh the pre-filled fields only
    Effect::new(move |prev: Option<()>| {
        let q = query.get();
        if prev.is_some() {
            vm.prefill(&q.initial_fields(&cart.snapshot()));
        }
    });

    let is_quote = Signal::derive(move || query.with(|q| q.is_quote(&cart.snapshot())));

    view! {
        <PageHeader
            title="Contact Us"
            subtitle="Get in touch with our team for quotes, inquiries, or any questions"
        />

        <section class="section">
            <div class="container contact-layout">
                <ContactInfo />
                <div class="contact-layout__form card-panel">
                    <QuoteForm vm=vm is_quote=is_quote />
                </div>
            </div>
        </section>

        <section class="contact-map">
            <iframe
                title="Location map"
                src=MAP_EMBED_URL
                width="100%"
                height="400"
                style="border: 0;"
                {..::leptos::tachys::html::attribute::loading("lazy")}
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        </section>
    }
}
