//! The active locale and its parsed strings.
use std::cell::RefCell;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::locales::{ENGLISH, LocaleMeta, find_locale, parse_strings};

#[cfg(target_arch = "wasm32")]
const LOCALE_STORAGE_KEY: &str = "tentaclegrid.locale";

static ENGLISH_STRINGS: Lazy<Value> = Lazy::new(|| parse_strings(ENGLISH.code).unwrap_or_default());

struct ActiveLocale {
    meta: LocaleMeta,
    strings: Value,
}

impl ActiveLocale {
    fn load(code: &str) -> Option<Self> {
        let meta = find_locale(code)?;
        let strings = parse_strings(meta.code)?;
        Some(Self { meta, strings })
    }

    fn english() -> Self {
        Self {
            meta: ENGLISH,
            strings: ENGLISH_STRINGS.clone(),
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<ActiveLocale> = RefCell::new(
        stored_code()
            .and_then(|code| ActiveLocale::load(&code))
            .unwrap_or_else(ActiveLocale::english),
    );
}

fn string_at<'a>(doc: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(doc, |node, part| node.get(part))?
        .as_str()
}

/// Look `key` up in the active locale, then in English.
pub(super) fn lookup(key: &str) -> Option<String> {
    ACTIVE.with(|active| {
        let active = active.borrow();
        string_at(&active.strings, key)
            .or_else(|| string_at(&ENGLISH_STRINGS, key))
            .map(str::to_string)
    })
}

/// Switch the active locale. Unknown codes are ignored.
///
/// In the browser this also sets `<html lang dir>` and remembers the choice.
pub fn set_lang(code: &str) {
    let Some(next) = ActiveLocale::load(code) else {
        log::warn!("ignoring unknown locale `{code}`");
        return;
    };
    #[cfg(target_arch = "wasm32")]
    publish(next.meta);
    ACTIVE.with(|active| *active.borrow_mut() = next);
}

#[must_use]
pub fn current_lang() -> &'static str {
    ACTIVE.with(|active| active.borrow().meta.code)
}

#[must_use]
pub fn is_rtl() -> bool {
    ACTIVE.with(|active| active.borrow().meta.rtl)
}

#[cfg(target_arch = "wasm32")]
fn stored_code() -> Option<String> {
    crate::dom::local_storage()
        .ok()?
        .get_item(LOCALE_STORAGE_KEY)
        .ok()
        .flatten()
}

#[cfg(not(target_arch = "wasm32"))]
const fn stored_code() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn publish(meta: LocaleMeta) {
    if let Some(root) = crate::dom::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("lang", meta.code);
        let _ = root.set_attribute("dir", if meta.rtl { "rtl" } else { "ltr" });
    }
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, meta.code);
    }
}
