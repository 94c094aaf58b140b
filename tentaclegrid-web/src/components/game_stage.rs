use std::collections::BTreeMap;

use crate::i18n;
use crate::shell::use_device_profile;
use crate::store::GameStoreContext;
use tentaclegrid_game::{DeviceProfile, constants::DEFAULT_SIMULATION_SPEED};
use yew::prelude::*;

/// Edge length of one grid cell in CSS pixels.
pub const CELL_SIZE_PX: u32 = 8;

/// CSS size of the simulation canvas for the profile's grid.
#[must_use]
pub const fn css_size(profile: &DeviceProfile) -> (u32, u32) {
    (
        profile.grid_columns * CELL_SIZE_PX,
        profile.grid_rows * CELL_SIZE_PX,
    )
}

/// Backing-store size of the simulation canvas, scaled by the render scale.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn canvas_size(profile: &DeviceProfile) -> (u32, u32) {
    let (width, height) = css_size(profile);
    let scale = |px: u32| (f64::from(px) * profile.render_scale).round() as u32;
    (scale(width), scale(height))
}

/// Mount point for the simulation renderer.
///
/// Grid and budget come straight from the resolved profile; the store only
/// contributes run controls.
#[function_component(GameStage)]
pub fn game_stage() -> Html {
    let profile = use_device_profile();
    let store = use_context::<GameStoreContext>();
    let (speed, paused) = store.as_ref().map_or((DEFAULT_SIMULATION_SPEED, false), |store| {
        (store.simulation_speed, store.is_paused)
    });
    let (css_width, css_height) = css_size(&profile);
    let (width, height) = canvas_size(&profile);

    let label = {
        let columns = profile.grid_columns.to_string();
        let rows = profile.grid_rows.to_string();
        let mut vars = BTreeMap::new();
        vars.insert("columns", columns.as_str());
        vars.insert("rows", rows.as_str());
        i18n::tr("stage.label", Some(&vars))
    };

    html! {
        <main id="main" role="main" class="game-stage"
            data-grid-columns={profile.grid_columns.to_string()}
            data-grid-rows={profile.grid_rows.to_string()}
            data-max-tentacles={profile.max_concurrent_effects.to_string()}
            data-render-scale={profile.render_scale.to_string()}
            data-simulation-speed={speed.to_string()}
            data-paused={paused.to_string()}>
            <canvas
                class="grid-canvas"
                aria-label={label}
                width={width.to_string()}
                height={height.to_string()}
                style={format!("width:{css_width}px;height:{css_height}px")}
            ></canvas>
        </main>
    }
}
