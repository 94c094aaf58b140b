use std::collections::BTreeMap;

use super::active::lookup;

fn interpolate(mut text: String, args: &BTreeMap<&str, &str>) -> String {
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

/// Text for `key` in the active locale, falling back to English and then to
/// the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Like [`t`], replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let Some(text) = lookup(key) else {
        return key.to_string();
    };
    match args {
        Some(args) => interpolate(text, args),
        None => text,
    }
}
