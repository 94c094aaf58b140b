use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Storage, Window};

/// Browser-side failures. None of these reach the player: callers log them
/// and continue with fallback values.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("failed to register `{event}` listener: {message}")]
    Listener {
        event: &'static str,
        message: String,
    },
    #[error("media query `{query}` failed: {message}")]
    MediaQuery {
        query: &'static str,
        message: String,
    },
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
