pub mod footer;
pub mod header;
pub mod notice_service;

pub use notice_service::{use_notices, NoticeHost, NoticeService};

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page frame: header, routed content, footer and the notice stack
#[component]
pub fn SiteShell(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Header />
            <main class="site__main">{children()}</main>
            <Footer />
            <NoticeHost />
        </div>
    }
}
