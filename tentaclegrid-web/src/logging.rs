//! Browser console logging through `console_log`.
use log::Level;

/// Level installed by [`init`]: debug builds are chattier.
#[must_use]
pub const fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Route `log` records to the browser console. Later calls are no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_log::init_with_level(default_level()).ok();
}
