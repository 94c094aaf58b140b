use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

pub const ENGLISH: LocaleMeta = LocaleMeta {
    code: "en",
    name: "English",
    rtl: false,
};

/// Supported locales, each with its embedded string table.
const LOCALES: &[(LocaleMeta, &str)] = &[
    (ENGLISH, include_str!("../../i18n/en.json")),
    (
        LocaleMeta {
            code: "es",
            name: "Español",
            rtl: false,
        },
        include_str!("../../i18n/es.json"),
    ),
    (
        LocaleMeta {
            code: "fr",
            name: "Français",
            rtl: false,
        },
        include_str!("../../i18n/fr.json"),
    ),
    (
        LocaleMeta {
            code: "ar",
            name: "العربية",
            rtl: true,
        },
        include_str!("../../i18n/ar.json"),
    ),
];

/// Supported locales in display order.
pub fn locales() -> impl Iterator<Item = LocaleMeta> {
    LOCALES.iter().map(|(meta, _)| *meta)
}

#[must_use]
pub fn find_locale(code: &str) -> Option<LocaleMeta> {
    locales().find(|meta| meta.code == code)
}

/// Parse the string table shipped for `code`.
pub(super) fn parse_strings(code: &str) -> Option<Value> {
    let (_, raw) = LOCALES.iter().find(|(meta, _)| meta.code == code)?;
    serde_json::from_str(raw)
        .map_err(|err| log::warn!("locale `{code}` unreadable: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_carries_notice_copy() {
        for meta in locales() {
            let strings = parse_strings(meta.code).expect("table parses");
            for key in ["title", "body"] {
                assert!(
                    strings["orientation"][key].is_string(),
                    "{} is missing orientation.{key}",
                    meta.code
                );
            }
        }
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(find_locale("en"), Some(ENGLISH));
        assert!(find_locale("ar").is_some_and(|meta| meta.rtl));
        assert!(find_locale("xx").is_none());
        assert!(parse_strings("xx").is_none());
    }
}
