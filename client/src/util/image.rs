//! Image upload and display helpers.
//!
//! Uploaded files are embedded in the record as data URLs; there is no
//! upload endpoint and no size limit.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Shown when a record has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// `src` to render for a stored image value.
#[must_use]
pub fn display_src(image: &str) -> &str {
    if image.trim().is_empty() { PLACEHOLDER_IMAGE } else { image }
}

/// Read the first file selected in `input` and hand its data URL to `on_load`.
///
/// Does nothing when no file is selected. Read failures are logged.
#[cfg(feature = "hydrate")]
pub fn read_first_file_as_data_url(input: &web_sys::HtmlInputElement, on_load: impl FnOnce(String) + 'static) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    let Ok(reader) = web_sys::FileReader::new() else {
        log::warn!("image: FileReader unavailable");
        return;
    };

    let done_reader = reader.clone();
    let on_loadend = Closure::once_into_js(move |_ev: web_sys::ProgressEvent| {
        match done_reader.result().ok().and_then(|v| v.as_string()) {
            Some(data_url) => on_load(data_url),
            None => log::warn!("image: read produced no data URL"),
        }
    });
    reader.set_onloadend(Some(on_loadend.unchecked_ref()));

    if let Err(err) = reader.read_as_data_url(&file) {
        log::warn!("image: read failed: {err:?}");
    }
}
