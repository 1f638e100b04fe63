use super::FeatureTile;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::icons::icon;
use crate::shared::site::COMPANY_NAME;
use leptos::prelude::*;

struct CategoryTile {
    name: &'static str,
    description: &'static str,
    image: &'static str,
    href: &'static str,
}

const CATEGORY_TILES: [CategoryTile; 6] = [
    CategoryTile {
        name: "Roofing",
        description: "Tilespan, Ribtype & Corrugated",
        image: "/tilespan1.jpg",
        href: "/products?category=roofing",
    },
    CategoryTile {
        name: "Steel Deck",
        description: "Premium steel deck panels",
        image: "/steeldeck1.png",
        href: "/products?category=steel-deck",
    },
    CategoryTile {
        name: "Ficem Board",
        description: "Durable fiber cement boards",
        image: "/ficem3.jpg",
        href: "/products?category=ficem-board",
    },
    CategoryTile {
        name: "Gypsum Board",
        description: "Quality drywall solutions",
        image: "/gypsum4.jpg",
        href: "/products?category=gypsum-board",
    },
    CategoryTile {
        name: "C Purlins",
        description: "Structural steel purlins",
        image: "/cpur2.jpg",
        href: "/products?category=c-purlins",
    },
    CategoryTile {
        name: "Plywood",
        description: "Marine & ordinary plywood",
        image: "/plywood1.jpg",
        href: "/products?category=plywood",
    },
];

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "shield",
        "Quality Guaranteed",
        "All materials meet industry standards with warranty support",
    ),
    (
        "truck",
        "Fast Delivery",
        "Reliable delivery service across Metro Manila and nearby provinces",
    ),
    (
        "award",
        "5 Years Experience",
        "Trusted by contractors and builders since 2021",
    ),
    (
        "clock",
        "Always Available",
        "Large inventory ready for immediate pickup or delivery",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("5+", "Years Experience"),
    ("400+", "Projects Served"),
    ("80+", "Regular Clients"),
    ("99%", "Satisfaction Rate"),
];

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop">
                <img src="/hero-construction.jpg" alt="QJWC Construction warehouse" />
            </div>
            <div class="container hero__content">
                <div class="hero__eyebrow">
                    {icon("circle-check")}
                    "Trusted Construction Supply Partner"
                </div>
                <h1>{format!("{} – Your Trusted Construction Supply Partner", COMPANY_NAME)}</h1>
                <p>
                    "Quality materials, reliable service, and competitive pricing. "
                    "Serving contractors, builders, and homeowners with excellence for over 5 years."
                </p>
                <div class="hero__actions">
                    <a class="button button--hero" href="/products">
                        "View Products"
                        {icon("arrow-right")}
                    </a>
                    <a class="button button--hero-outline" href="/contact">"Request a Quote"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Categories() -> impl IntoView {
    let tiles = CATEGORY_TILES
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            let style = format!("animation-delay: {}ms;", stagger_delay(i));
            view! {
                <a class="category-tile" href=tile.href style=style>
                    <div class="category-tile__media">
                        <img src=tile.image alt=tile.name />
                    </div>
                    <div class="category-tile__caption">
                        <h3>{tile.name}</h3>
                        <p>{tile.description}</p>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="section section--surface">
            <div class="container">
                <div class="section__intro">
                    <h2>"Browse Our Product Categories"</h2>
                    <p>
                        "From roofing to structural materials, we carry everything you need for your construction projects"
                    </p>
                </div>
                <div class="category-grid">{tiles}</div>
                <div class="section__more">
                    <a class="button button--primary" href="/products">
                        "View All Products"
                        {icon("arrow-right")}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section__intro">
                    <h2>{format!("Why Choose {}", COMPANY_NAME)}</h2>
                    <p>"We're committed to providing the best products and service to our customers"</p>
                </div>
                <div class="tile-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon_name, title, description)| view! {
                            <FeatureTile icon_name=icon_name title=title description=description />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container stats__grid">
                {STATS
                    .into_iter()
                    .map(|(value, label)| view! {
                        <div class="stats__item">
                            <div class="stats__value">{value}</div>
                            <div class="stats__label">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="cta-box">
                    <h2>"Ready to Start Your Project?"</h2>
                    <p>
                        "Contact us today for a free quote. Our team is ready to help you find "
                        "the right materials for your construction needs."
                    </p>
                    <div class="cta-box__actions">
                        <a class="button button--primary" href="/contact">
                            "Request a Quote"
                            {icon("arrow-right")}
                        </a>
                        <a class="button button--outline" href="/products">"Browse Products"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Categories />
        <Features />
        <Stats />
        <CallToAction />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::find_category;

    #[test]
    fn test_category_tiles_link_to_known_categories() {
        for tile in &CATEGORY_TILES {
            let slug = tile
                .href
                .strip_prefix("/products?category=")
                .expect("tile links to a category filter");
            assert!(find_category(slug).is_some(), "unknown category {slug}");
        }
    }
}
