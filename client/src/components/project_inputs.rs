//! Draft inputs for the project form.

use content::{Category, ProjectFields};
use leptos::prelude::*;

use crate::components::image_input::ImageInput;
use crate::state::admin::AdminState;

#[component]
pub fn ProjectInputs(admin: RwSignal<AdminState>) -> impl IntoView {
    let read = move |get: fn(&ProjectFields) -> String| admin.with(|s| get(s.dashboard.projects.form()));
    let write = move |set: fn(&mut ProjectFields, String), value: String| {
        admin.update(|s| set(s.dashboard.projects.form_mut(), value));
    };
    let on_image = Callback::new(move |data_url: String| write(|f, v| f.image = v, data_url));

    view! {
        <label class="form__label">
            "Project Title"
            <input
                class="form__input"
                type="text"
                placeholder="Enter project title"
                prop:value=move || read(|f| f.title.clone())
                on:input=move |ev| write(|f, v| f.title = v, event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Description"
            <textarea
                class="form__input"
                rows="3"
                placeholder="Enter project description"
                prop:value=move || read(|f| f.description.clone())
                on:input=move |ev| write(|f, v| f.description = v, event_target_value(&ev))
            ></textarea>
        </label>
        <label class="form__label">
            "Category"
            <select
                class="form__input"
                prop:value=move || read(|f| f.category.as_str().to_owned())
                on:change=move |ev| {
                    if let Some(category) = Category::parse(&event_target_value(&ev)) {
                        admin.update(|s| s.dashboard.projects.form_mut().category = category);
                    }
                }
            >
                {Category::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
        <ImageInput label="Project Image" on_load=on_image/>
    }
}
