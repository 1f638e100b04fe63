use super::FeatureTile;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::site::COMPANY_NAME;
use leptos::prelude::*;

const VALUES: [(&str, &str, &str); 4] = [
    (
        "shield",
        "Quality Assurance",
        "Every product we sell meets strict quality standards. We work only with trusted manufacturers and suppliers.",
    ),
    (
        "users",
        "Customer Focus",
        "Your success is our success. We go above and beyond to ensure you get the right materials for your project.",
    ),
    (
        "target",
        "Reliability",
        "When we say we'll deliver, we deliver. Our customers trust us because we keep our promises.",
    ),
    (
        "award",
        "Expertise",
        "With over 5 years in the industry, our team has the knowledge to help you make informed decisions.",
    ),
];

const MILESTONES: [(&str, &str); 6] = [
    ("2021", "QJWC Construction founded in Metro Manila"),
    ("2022", "Introduced online ordering and digital services"),
    ("2023", "Launched contractor partnership program"),
    ("2024", "Opened second distribution center"),
    ("2025", "Expanded warehouse capacity to serve more customers"),
    ("2026", "Celebrating 5 years of excellence"),
];

const STORY: [&str; 3] = [
    "QJWC Construction started with a simple vision: to be the most trusted construction supply \
     partner in the Philippines. Founded in 2021, we began as a small building materials store \
     serving local contractors.",
    "Since then we've grown into one of Cavite's leading construction supply companies, serving \
     contractors, builders, and homeowners. Our success is built on our commitment to quality \
     products, competitive pricing, and exceptional customer service.",
    "Today, we carry a comprehensive range of construction materials from roofing to structural \
     steel, all carefully selected from trusted manufacturers. Our team of experienced \
     professionals is dedicated to helping you find the right materials for every project.",
];

#[component]
fn Story() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container split">
                <div>
                    <h2>"Our Story"</h2>
                    <div class="prose">
                        {STORY.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                    </div>
                </div>
                <div class="story-media">
                    <img
                        src="https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=600&h=450&fit=crop"
                        alt="QJWC Construction warehouse"
                    />
                    <div class="story-media__badge">
                        <strong>"5+"</strong>
                        <span>"Years of Excellence"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="section__intro">
                    <h2>"Our Journey"</h2>
                    <p>"Key milestones in our 5-year journey"</p>
                </div>
                <ol class="timeline">
                    {MILESTONES
                        .into_iter()
                        .map(|(year, event)| view! {
                            <li class="timeline__item">
                                <span class="timeline__dot">{icon("check")}</span>
                                <div class="timeline__year">{year}</div>
                                <div class="timeline__event">{event}</div>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageHeader
            title=format!("About {}", COMPANY_NAME)
            subtitle="Building trust through quality materials and exceptional service since 2021"
        />
        <Story />
        <section class="section section--muted">
            <div class="container">
                <div class="section__intro">
                    <h2>"Our Values"</h2>
                    <p>"The principles that guide everything we do"</p>
                </div>
                <div class="tile-grid">
                    {VALUES
                        .into_iter()
                        .map(|(icon_name, title, description)| view! {
                            <FeatureTile icon_name=icon_name title=title description=description />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
        <Timeline />
        <section class="section section--hero">
            <div class="container section__intro">
                <h2>"Ready to Partner With Us?"</h2>
                <p>
                    {format!(
                        "Join thousands of satisfied customers who trust {} for their building material needs.",
                        COMPANY_NAME,
                    )}
                </p>
                <div class="cta-box__actions">
                    <a class="button button--hero-outline" href="/products">"Browse Products"</a>
                    <a class="button button--light" href="/contact">
                        "Contact Us"
                        {icon("arrow-right")}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_are_chronological() {
        let years: Vec<u32> = MILESTONES
            .iter()
            .map(|(year, _)| year.parse().unwrap())
            .collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }
}
