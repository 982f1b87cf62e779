//! Draft inputs for the floor plan form.

use content::FloorPlanFields;
use leptos::prelude::*;

use crate::components::image_input::ImageInput;
use crate::state::admin::AdminState;

#[component]
pub fn FloorPlanInputs(admin: RwSignal<AdminState>) -> impl IntoView {
    let read = move |get: fn(&FloorPlanFields) -> String| admin.with(|s| get(s.dashboard.floor_plans.form()));
    let write = move |set: fn(&mut FloorPlanFields, String), value: String| {
        admin.update(|s| set(s.dashboard.floor_plans.form_mut(), value));
    };
    let on_image = Callback::new(move |data_url: String| write(|f, v| f.image = v, data_url));

    view! {
        <label class="form__label">
            "Floor Plan Title"
            <input
                class="form__input"
                type="text"
                placeholder="e.g., 2 BHK Premium"
                prop:value=move || read(|f| f.title.clone())
                on:input=move |ev| write(|f, v| f.title = v, event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Description"
            <textarea
                class="form__input"
                rows="3"
                placeholder="Enter floor plan description"
                prop:value=move || read(|f| f.description.clone())
                on:input=move |ev| write(|f, v| f.description = v, event_target_value(&ev))
            ></textarea>
        </label>
        <label class="form__label">
            "Area"
            <input
                class="form__input"
                type="text"
                placeholder="e.g., 1200 sq.ft"
                prop:value=move || read(|f| f.area.clone())
                on:input=move |ev| write(|f, v| f.area = v, event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Bedrooms"
            <input
                class="form__input"
                type="text"
                placeholder="e.g., 2 BHK"
                prop:value=move || read(|f| f.bedrooms.clone())
                on:input=move |ev| write(|f, v| f.bedrooms = v, event_target_value(&ev))
            />
        </label>
        <ImageInput label="Floor Plan Image" on_load=on_image/>
    }
}
