//! Public card for one floor plan.

use content::FloorPlan;
use leptos::prelude::*;

use crate::util::image::display_src;

#[component]
pub fn FloorPlanCard(plan: FloorPlan) -> impl IntoView {
    let FloorPlan { title, description, image, area, bedrooms, .. } = plan;
    let src = display_src(&image).to_owned();
    let alt = title.clone();

    view! {
        <article class="plan-card">
            <div class="plan-card__image">
                <img src=src alt=alt loading="lazy"/>
            </div>
            <div class="plan-card__body">
                <div class="plan-card__head">
                    <h3 class="plan-card__title">{title}</h3>
                    <span class="badge badge--gold">{bedrooms}</span>
                </div>
                <p class="plan-card__description">{description}</p>
                <p class="plan-card__area">{area}</p>
            </div>
        </article>
    }
}
