//! Environment sensing: raw host signals and the snapshot derived from them.
use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_PIXEL_RATIO, FALLBACK_PORTRAIT};
use crate::user_agent::UserAgentTraits;

/// Raw readings taken from the host at one instant.
///
/// Every field is optional: a host that lacks an API reports `None` and the
/// snapshot substitutes its documented default instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostSignals {
    pub user_agent: Option<String>,
    pub viewport_width: Option<f64>,
    pub viewport_height: Option<f64>,
    pub device_pixel_ratio: Option<f64>,
    pub portrait: Option<bool>,
}

/// Immutable record of environment facts. Recreated on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    pub is_mobile_user_agent: bool,
    pub is_safari_engine: bool,
    pub is_portrait: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Device pixel ratio for mobile devices; always `1.0` on desktop.
    pub pixel_ratio: f64,
}

impl Default for EnvironmentSnapshot {
    fn default() -> Self {
        Self {
            is_mobile_user_agent: false,
            is_safari_engine: false,
            is_portrait: FALLBACK_PORTRAIT,
            viewport_width: 0,
            viewport_height: 0,
            pixel_ratio: FALLBACK_PIXEL_RATIO,
        }
    }
}

impl EnvironmentSnapshot {
    /// Build a snapshot from raw host readings, applying fallbacks for
    /// anything the host could not provide.
    #[must_use]
    pub fn from_signals(signals: &HostSignals) -> Self {
        let traits = signals
            .user_agent
            .as_deref()
            .map(UserAgentTraits::classify)
            .unwrap_or_default();
        let pixel_ratio = if traits.is_mobile {
            sanitize_pixel_ratio(signals.device_pixel_ratio)
        } else {
            FALLBACK_PIXEL_RATIO
        };
        Self {
            is_mobile_user_agent: traits.is_mobile,
            is_safari_engine: traits.is_safari,
            is_portrait: signals.portrait.unwrap_or(FALLBACK_PORTRAIT),
            viewport_width: viewport_dimension(signals.viewport_width),
            viewport_height: viewport_dimension(signals.viewport_height),
            pixel_ratio,
        }
    }

    /// A desktop snapshot with the given viewport.
    #[must_use]
    pub fn desktop(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Self::default()
        }
    }

    /// A mobile snapshot in the given orientation.
    #[must_use]
    pub fn mobile(is_portrait: bool, pixel_ratio: f64) -> Self {
        let (viewport_width, viewport_height) = if is_portrait { (390, 844) } else { (844, 390) };
        Self {
            is_mobile_user_agent: true,
            is_safari_engine: false,
            is_portrait,
            viewport_width,
            viewport_height,
            pixel_ratio: sanitize_pixel_ratio(Some(pixel_ratio)),
        }
    }

    #[must_use]
    pub const fn with_safari(mut self, is_safari_engine: bool) -> Self {
        self.is_safari_engine = is_safari_engine;
        self
    }
}

fn sanitize_pixel_ratio(ratio: Option<f64>) -> f64 {
    match ratio {
        Some(value) if value.is_finite() => value.max(FALLBACK_PIXEL_RATIO),
        _ => FALLBACK_PIXEL_RATIO,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn viewport_dimension(value: Option<f64>) -> u32 {
    match value {
        Some(px) if px.is_finite() && px > 0.0 => px.round().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}

/// Capability that senses the host environment.
///
/// Production wiring reads the browser; tests inject a fixed snapshot.
pub trait EnvironmentProbe {
    /// Take a fresh reading. Must be cheap and side-effect free.
    fn read(&self) -> EnvironmentSnapshot;
}

/// Probe that always reports the snapshot it holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedProbe {
    snapshot: EnvironmentSnapshot,
}

impl FixedProbe {
    #[must_use]
    pub const fn new(snapshot: EnvironmentSnapshot) -> Self {
        Self { snapshot }
    }

    /// Swap the reported environment, simulating a device change.
    pub const fn set(&mut self, snapshot: EnvironmentSnapshot) {
        self.snapshot = snapshot;
    }
}

impl EnvironmentProbe for FixedProbe {
    fn read(&self) -> EnvironmentSnapshot {
        self.snapshot
    }
}
