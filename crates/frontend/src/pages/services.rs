use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "package",
        title: "Bulk Purchasing",
        description: "Get significant discounts on large volume orders. Perfect for contractors and construction companies with ongoing projects.",
        features: [
            "Volume-based pricing tiers",
            "Flexible payment terms",
            "Reserved inventory for regular customers",
            "Priority order processing",
        ],
    },
    Service {
        icon: "users",
        title: "Contractor Pricing",
        description: "Exclusive pricing programs for licensed contractors and construction professionals.",
        features: [
            "Special contractor discounts",
            "Monthly credit accounts",
            "Dedicated account manager",
            "Project-based quotations",
        ],
    },
    Service {
        icon: "search",
        title: "Material Sourcing",
        description: "Can't find what you need? Our team can source specialized materials from our network of suppliers.",
        features: [
            "Access to wide supplier network",
            "Special order capabilities",
            "Competitive pricing on sourced items",
            "Quality assurance guarantee",
        ],
    },
    Service {
        icon: "truck",
        title: "Delivery Services",
        description: "Reliable delivery services across Metro Manila and nearby provinces with flexible scheduling.",
        features: [
            "All items are made to order, 2-3 days process only",
            "Scheduled delivery options",
            "Careful handling of materials",
            "Real-time delivery tracking",
        ],
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let cards = SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| {
            view! {
                <CardAnimated delay_ms=stagger_delay(i) class="service-card">
                    <div class="feature-tile__icon">{icon(service.icon)}</div>
                    <h2>{service.title}</h2>
                    <p class="service-card__description">{service.description}</p>
                    <ul class="check-list">
                        {service
                            .features
                            .into_iter()
                            .map(|feature| view! {
                                <li>{icon("circle-check")}<span>{feature}</span></li>
                            })
                            .collect_view()}
                    </ul>
                </CardAnimated>
            }
        })
        .collect_view();

    view! {
        <PageHeader
            title="Our Services"
            subtitle="Comprehensive construction supply solutions tailored to your project needs"
        />
        <section class="section">
            <div class="container service-grid">{cards}</div>
        </section>
        <section class="section section--muted">
            <div class="container section__intro">
                <h2>"Need a Custom Solution?"</h2>
                <p>
                    "Contact our team to discuss your specific project requirements. "
                    "We're here to help you find the right materials and services."
                </p>
                <a class="button button--primary" href="/contact">
                    "Contact Us"
                    {icon("arrow-right")}
                </a>
            </div>
        </section>
    }
}
