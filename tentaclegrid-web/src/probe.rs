//! Browser-backed environment probe.
use std::fmt;
use std::rc::Rc;

use tentaclegrid_game::{EnvironmentProbe, EnvironmentSnapshot, FixedProbe, HostSignals};

#[cfg(target_arch = "wasm32")]
use crate::dom::{self, HostError};
#[cfg(target_arch = "wasm32")]
use tentaclegrid_game::constants::PORTRAIT_MEDIA_QUERY;

/// Read user-agent, viewport, pixel ratio and orientation from `window`.
///
/// Anything the browser refuses to provide is reported as `None` and logged;
/// outside a browser every signal is missing.
#[must_use]
pub fn read_host_signals() -> HostSignals {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = dom::window() else {
            log::warn!("{}", HostError::NoWindow);
            return HostSignals::default();
        };
        let portrait = portrait_query(&window).unwrap_or_else(|err| {
            log::warn!("{err}");
            None
        });
        HostSignals {
            user_agent: window.navigator().user_agent().ok(),
            viewport_width: window.inner_width().ok().and_then(|v| v.as_f64()),
            viewport_height: window.inner_height().ok().and_then(|v| v.as_f64()),
            device_pixel_ratio: Some(window.device_pixel_ratio()),
            portrait,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        HostSignals::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn portrait_query(window: &web_sys::Window) -> Result<Option<bool>, HostError> {
    window
        .match_media(PORTRAIT_MEDIA_QUERY)
        .map(|list| list.map(|mql| mql.matches()))
        .map_err(|err| HostError::MediaQuery {
            query: PORTRAIT_MEDIA_QUERY,
            message: dom::js_error_message(&err),
        })
}

/// Probe reading the live browser environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserProbe;

impl EnvironmentProbe for BrowserProbe {
    fn read(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot::from_signals(&read_host_signals())
    }
}

/// Shared, cheaply clonable probe suitable for component props.
///
/// Two handles are equal when they share the same probe instance.
#[derive(Clone)]
pub struct ProbeHandle(Rc<dyn EnvironmentProbe>);

impl ProbeHandle {
    #[must_use]
    pub fn new(probe: impl EnvironmentProbe + 'static) -> Self {
        Self(Rc::new(probe))
    }

    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserProbe)
    }

    #[must_use]
    pub fn fixed(snapshot: EnvironmentSnapshot) -> Self {
        Self::new(FixedProbe::new(snapshot))
    }
}

impl Default for ProbeHandle {
    fn default() -> Self {
        Self::browser()
    }
}

impl PartialEq for ProbeHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ProbeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProbeHandle").field(&self.0.read()).finish()
    }
}

impl EnvironmentProbe for ProbeHandle {
    fn read(&self) -> EnvironmentSnapshot {
        self.0.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_probe_fails_open_outside_browser() {
        let snapshot = BrowserProbe.read();
        assert_eq!(snapshot, EnvironmentSnapshot::default());
        assert!(!snapshot.is_portrait);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = ProbeHandle::fixed(EnvironmentSnapshot::mobile(true, 2.0));
        let b = a.clone();
        let c = ProbeHandle::fixed(EnvironmentSnapshot::mobile(true, 2.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.read(), c.read());
    }
}
