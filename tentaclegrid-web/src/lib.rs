#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod listeners;
pub mod logging;
pub mod probe;
pub mod shell;
pub mod store;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    // Ensure <html lang, dir> match the saved locale before first paint
    crate::i18n::set_lang(crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
