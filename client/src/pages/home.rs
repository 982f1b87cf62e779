//! Public landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders both collections from `localStorage`. The first visit seeds the
//! default records and writes them back; after that whatever the admin saved
//! is shown as-is. Storage is read in an effect, so the server render and the
//! first client render show the empty grids until hydration completes.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use content::PublicContent;
use leptos::prelude::*;

use crate::app::SITE_NAME;
use crate::components::floor_plan_card::FloorPlanCard;
use crate::components::nav_menu::NavMenu;
use crate::components::project_card::ProjectCard;
use crate::state::site::SiteState;
use crate::util::storage;

pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const CONTACT_EMAIL: &str = "info@svwtdevelopers.com";
pub const CONTACT_ADDRESS: [&str; 2] = ["123 Construction Lane", "Mumbai, Maharashtra 400001"];

/// Title and blurb of each About Us card.
pub const ABOUT_CARDS: [(&str, &str); 3] = [
    (
        "Excellence",
        "Committed to delivering high-quality construction projects that exceed client expectations.",
    ),
    ("Innovation", "Using modern techniques and sustainable practices in all our developments."),
    ("Trust", "Building relationships based on transparency, reliability, and quality."),
];

/// `tel:` link for a displayed phone number.
#[must_use]
pub fn tel_href(display: &str) -> String {
    let digits: String = display.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}

#[must_use]
pub fn copyright_line(year: u16) -> String {
    format!("© {year} {SITE_NAME}. All rights reserved.")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let site = RwSignal::new(SiteState::default());

    Effect::new(move || {
        let (content, errors) = PublicContent::load(&storage::content_store());
        site.set(SiteState::loaded_from(content, &errors));
    });

    let projects = move || site.with(|s| s.content.projects.clone());
    let floor_plans = move || site.with(|s| s.content.floor_plans.clone());

    view! {
        <div class="site">
            <NavMenu/>

            <section class="hero">
                <div class="hero__inner">
                    <h2 class="hero__title">{SITE_NAME}</h2>
                    <p class="hero__tagline">
                        "Building Excellence, Delivering Dreams. Quality construction and development projects across residential and commercial sectors."
                    </p>
                    <a class="btn btn--primary btn--large" href="#projects">
                        "View Our Projects"
                    </a>
                </div>
            </section>

            <Show when=move || site.with(|s| !s.unreadable.is_empty())>
                <p class="site__notice">"Some content could not be loaded."</p>
            </Show>

            <section id="projects" class="section section--light">
                <h2 class="section__title">"Our Projects"</h2>
                <p class="section__subtitle">"Showcasing our completed and ongoing developments"</p>
                <Show
                    when=move || site.with(|s| !s.content.projects.is_empty())
                    fallback=|| view! { <p class="section__empty">"No projects to display yet."</p> }
                >
                    <div class="card-grid card-grid--two">
                        {move || {
                            projects()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>

            <section id="floor-plans" class="section section--dark">
                <h2 class="section__title">"Floor Plans"</h2>
                <p class="section__subtitle">"Explore our thoughtfully designed floor plans"</p>
                <Show
                    when=move || site.with(|s| !s.content.floor_plans.is_empty())
                    fallback=|| view! { <p class="section__empty">"No floor plans available yet."</p> }
                >
                    <div class="card-grid card-grid--three">
                        {move || {
                            floor_plans()
                                .into_iter()
                                .map(|plan| view! { <FloorPlanCard plan=plan/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>

            <section id="contact" class="section section--muted">
                <h2 class="section__title section__title--center">"Contact Us"</h2>
                <div class="card-grid card-grid--three">
                    <div class="info-card">
                        <h3>"Call Now"</h3>
                        <a href=tel_href(CONTACT_PHONE)>{CONTACT_PHONE}</a>
                    </div>
                    <div class="info-card">
                        <h3>"Email Us"</h3>
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </div>
                    <div class="info-card">
                        <h3>"Visit Us"</h3>
                        <p>{CONTACT_ADDRESS[0]} <br/> {CONTACT_ADDRESS[1]}</p>
                    </div>
                </div>
            </section>

            <section class="section section--dark">
                <h2 class="section__title">"About Us"</h2>
                <div class="card-grid card-grid--three">
                    {ABOUT_CARDS
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <div class="info-card info-card--left">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <footer class="site-footer">
                <p>{copyright_line(2025)}</p>
            </footer>
        </div>
    }
}
