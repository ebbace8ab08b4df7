//! Thin wrappers over the browser globals the viewer touches: `fetch`, the
//! location query and history, and the console.
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

/// The page's `window`.
///
/// # Panics
/// Outside a browser, where there is no `window`.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("viewer must run in a browser window")
}

/// Best human-readable text for a thrown JS value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// `GET` a URL.
///
/// # Errors
/// Network failures, or a resolved value that is not a `Response`.
#[allow(clippy::future_not_send)]
pub async fn fetch(url: &str) -> Result<Response, JsValue> {
    JsFuture::from(window().fetch_with_str(url))
        .await?
        .dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// When the body was already consumed or the stream fails.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<JsValue, JsValue> {
    JsFuture::from(response.text()?).await
}

/// `location.search` with its leading `?`, or empty.
///
/// # Errors
/// When the location is not readable.
pub fn location_search() -> Result<String, JsValue> {
    window().location().search()
}

/// Replace the current history entry's query without navigating. An empty
/// `query` removes it.
///
/// # Errors
/// When the history API rejects the URL.
pub fn replace_query(query: &str) -> Result<(), JsValue> {
    let win = window();
    let path = win.location().pathname()?;
    win.history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&format!("{path}{query}")))
}
