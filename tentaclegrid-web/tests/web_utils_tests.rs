use std::collections::BTreeMap;

use tentaclegrid_game::{DeviceProfile, EnvironmentSnapshot};
use tentaclegrid_web::components::game_stage::{CELL_SIZE_PX, canvas_size, css_size};
use tentaclegrid_web::i18n;

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert!(!i18n::is_rtl());

    let mut vars = BTreeMap::new();
    vars.insert("columns", "100");
    vars.insert("rows", "50");
    let label = i18n::tr("stage.label", Some(&vars));
    assert!(label.contains("100"));
    assert!(label.contains("50"));
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let codes: Vec<_> = i18n::locales().map(|m| m.code).collect();
    assert_eq!(codes, ["en", "es", "fr", "ar"]);
    assert!(i18n::find_locale("ar").is_some_and(|m| m.rtl));
    assert_eq!(i18n::find_locale("es").map(|m| m.name), Some("Español"));
    i18n::set_lang("ar");
    assert!(i18n::is_rtl());
    i18n::set_lang("en");
}

#[test]
fn canvas_backing_store_uses_profile_scale() {
    let profile = DeviceProfile::resolve(&EnvironmentSnapshot::mobile(false, 2.0));
    assert_eq!(css_size(&profile), (70 * CELL_SIZE_PX, 35 * CELL_SIZE_PX));
    let (w, h) = canvas_size(&profile);
    assert_eq!(w, 70 * CELL_SIZE_PX * 2);
    assert_eq!(h, 35 * CELL_SIZE_PX * 2);
}
