//! Public card for one project.

use content::Project;
use leptos::prelude::*;

use crate::util::image::display_src;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project { title, description, image, category, .. } = project;
    let src = display_src(&image).to_owned();
    let alt = title.clone();

    view! {
        <article class="project-card">
            <div class="project-card__image">
                <img src=src alt=alt loading="lazy"/>
            </div>
            <div class="project-card__body">
                <div class="project-card__head">
                    <h3 class="project-card__title">{title}</h3>
                    <span class="badge badge--category">{category.as_str()}</span>
                </div>
                <p class="project-card__description">{description}</p>
            </div>
        </article>
    }
}
