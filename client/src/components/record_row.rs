//! Admin list row with edit and delete actions.
//!
//! DESIGN
//! ======
//! Shared by both collections; the caller supplies the badges (category for
//! projects, bedrooms and area for floor plans) and the action callbacks.

use leptos::prelude::*;

use crate::util::image::display_src;

#[component]
pub fn RecordRow(
    title: String,
    description: String,
    image: String,
    badges: Vec<String>,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let src = display_src(&image).to_owned();
    let alt = title.clone();

    view! {
        <div class="record-row">
            <div class="record-row__thumb">
                <img src=src alt=alt/>
            </div>
            <div class="record-row__body">
                <h3 class="record-row__title">{title}</h3>
                <div class="record-row__badges">
                    {badges.into_iter().map(|b| view! { <span class="badge">{b}</span> }).collect::<Vec<_>>()}
                </div>
                <p class="record-row__description">{description}</p>
                <div class="record-row__actions">
                    <button class="btn btn--small btn--outline" on:click=move |_| on_edit.run(())>
                        "Edit"
                    </button>
                    <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
