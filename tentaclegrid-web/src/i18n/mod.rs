//! Interface text in English, Spanish, French and Arabic.
mod active;
mod locales;
mod render;

pub use active::{current_lang, is_rtl, set_lang};
pub use locales::{LocaleMeta, find_locale, locales};
pub use render::{t, tr};
