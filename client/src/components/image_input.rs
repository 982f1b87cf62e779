//! File picker that converts the chosen image to a data URL.

use leptos::prelude::*;

#[component]
pub fn ImageInput(label: &'static str, on_load: Callback<String>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            crate::util::image::read_first_file_as_data_url(&input, move |data_url| on_load.run(data_url));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, on_load);
        }
    };

    view! {
        <label class="form__label">
            {label}
            <input class="form__input form__input--file" type="file" accept="image/*" on:change=on_change/>
        </label>
    }
}
