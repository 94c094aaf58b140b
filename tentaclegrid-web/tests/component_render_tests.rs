use futures::executor::block_on;
use tentaclegrid_game::EnvironmentSnapshot;
use tentaclegrid_web::app::{self, App};
use tentaclegrid_web::components::adaptive_shell::AdaptiveShell;
use tentaclegrid_web::components::rotate_notice::RotateNotice;
use tentaclegrid_web::probe::ProbeHandle;
use tentaclegrid_web::shell::use_device_profile;
use yew::prelude::*;
use yew::LocalServerRenderer;

#[function_component(ProfileReadout)]
fn profile_readout() -> Html {
    let profile = use_device_profile();
    html! {
        <p id="readout">
            { format!(
                "{}x{} budget={} scale={}",
                profile.grid_columns, profile.grid_rows, profile.max_concurrent_effects, profile.render_scale
            ) }
        </p>
    }
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    probe: ProbeHandle,
}

#[function_component(ShellHarness)]
fn shell_harness(props: &HarnessProps) -> Html {
    html! {
        <AdaptiveShell probe={props.probe.clone()}>
            <ProfileReadout />
        </AdaptiveShell>
    }
}

fn render_shell(snapshot: EnvironmentSnapshot) -> String {
    tentaclegrid_web::i18n::set_lang("en");
    let props = HarnessProps {
        probe: ProbeHandle::fixed(snapshot),
    };
    block_on(LocalServerRenderer::<ShellHarness>::with_props(props).render())
}

#[test]
fn phone_in_portrait_shows_only_the_rotate_notice() {
    let html = render_shell(EnvironmentSnapshot::mobile(true, 3.0));
    assert!(html.contains("rotate-notice"), "notice should render: {html}");
    assert!(html.contains("Rotate your device"), "copy should render: {html}");
    assert!(!html.contains("readout"), "wrapped content must not render: {html}");
}

#[test]
fn phone_in_landscape_renders_wrapped_content_with_mobile_profile() {
    let html = render_shell(EnvironmentSnapshot::mobile(false, 3.0));
    assert!(!html.contains("rotate-notice"), "notice should be absent: {html}");
    assert!(html.contains("70x35 budget=10 scale=3"), "mobile profile: {html}");
}

#[test]
fn desktop_is_never_gated() {
    for portrait in [false, true] {
        let snapshot = EnvironmentSnapshot {
            is_portrait: portrait,
            ..EnvironmentSnapshot::desktop(900, 1400)
        };
        let html = render_shell(snapshot);
        assert!(!html.contains("rotate-notice"), "portrait={portrait}: {html}");
        assert!(html.contains("100x50 budget=30 scale=1"), "desktop profile: {html}");
    }
}

#[test]
fn readout_outside_shell_uses_desktop_fallback() {
    let html = block_on(LocalServerRenderer::<ProfileReadout>::new().render());
    assert!(html.contains("100x50 budget=30"), "{html}");
}

#[test]
fn rotate_notice_is_an_accessible_dialog() {
    tentaclegrid_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<RotateNotice>::new().render());
    assert!(html.contains("role=\"alertdialog\""), "{html}");
    assert!(html.contains("aria-modal=\"true\""), "{html}");
    assert!(html.contains("landscape"), "{html}");
}

#[test]
fn rotate_notice_follows_language() {
    tentaclegrid_web::i18n::set_lang("es");
    let html = block_on(LocalServerRenderer::<RotateNotice>::new().render());
    tentaclegrid_web::i18n::set_lang("en");
    assert!(html.contains("Gira tu dispositivo"), "{html}");
}

#[test]
fn app_renders_stage_with_profile_budget() {
    tentaclegrid_web::i18n::set_lang("en");
    let props = app::Props {
        probe: ProbeHandle::fixed(EnvironmentSnapshot::mobile(false, 2.0)),
    };
    let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
    assert!(html.contains("game-stage"), "{html}");
    assert!(html.contains("data-max-tentacles=\"10\""), "{html}");
    assert!(html.contains("data-render-scale=\"2\""), "{html}");
    assert!(html.contains("data-grid-columns=\"70\""), "{html}");
    assert!(html.contains("data-grid-rows=\"35\""), "{html}");
    assert!(html.contains("width=\"1120\""), "{html}");
    assert!(!html.contains("data-grid-columns=\"100\""), "{html}");
}

#[test]
fn app_renders_desktop_stage_from_one_tier() {
    tentaclegrid_web::i18n::set_lang("en");
    let props = app::Props {
        probe: ProbeHandle::fixed(EnvironmentSnapshot::desktop(1920, 1080)),
    };
    let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
    assert!(html.contains("data-grid-columns=\"100\""), "{html}");
    assert!(html.contains("data-grid-rows=\"50\""), "{html}");
    assert!(html.contains("data-max-tentacles=\"30\""), "{html}");
    assert!(html.contains("data-simulation-speed=\"1\""), "{html}");
}

#[test]
fn app_blocks_phone_in_portrait() {
    tentaclegrid_web::i18n::set_lang("en");
    let props = app::Props {
        probe: ProbeHandle::fixed(EnvironmentSnapshot::mobile(true, 2.0)),
    };
    let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
    assert!(html.contains("rotate-notice"), "{html}");
    assert!(!html.contains("game-stage"), "{html}");
}
