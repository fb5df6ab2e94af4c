//! Browser helpers: form serialization and file previews

use krishi_core::FormPayload;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Collect every named text field of `form`, like `new FormData(form)`.
///
/// Non-string entries (file inputs) are skipped.
pub fn form_payload(form: &web_sys::HtmlFormElement) -> FormPayload {
    let mut payload = FormPayload::new();

    let data = match web_sys::FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to read form: {:?}", e);
            return payload;
        }
    };

    let entries = match js_sys::try_iter(&data) {
        Ok(Some(entries)) => entries,
        _ => return payload,
    };

    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            payload.insert(name, value);
        }
    }
    payload
}

/// Read `file` as a data URL and hand it to `on_done` (`None` on failure).
pub fn read_data_url(file: web_sys::File, on_done: impl FnOnce(Option<String>) + 'static) {
    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            warn!("FileReader unavailable: {:?}", e);
            on_done(None);
            return;
        }
    };

    let target = reader.clone();
    let onload = Closure::once_into_js(move |_ev: web_sys::ProgressEvent| {
        on_done(target.result().ok().and_then(|v| v.as_string()));
    });
    reader.set_onload(Some(onload.unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(&file) {
        warn!("Failed to read {}: {:?}", file.name(), e);
    }
}
