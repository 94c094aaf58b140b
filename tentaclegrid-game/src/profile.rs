//! Device profile resolution
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DESKTOP_GRID_COLUMNS, DESKTOP_GRID_ROWS, DESKTOP_MAX_EFFECTS, FALLBACK_PIXEL_RATIO,
    MOBILE_GRID_COLUMNS, MOBILE_GRID_ROWS, MOBILE_MAX_EFFECTS,
};
use crate::environment::EnvironmentSnapshot;

const DEFAULT_PROFILE_DATA: &str =
    include_str!("../../tentaclegrid-web/static/assets/data/device_profiles.json");

static STATIC_TABLE: Lazy<ProfileTable> = Lazy::new(ProfileTable::load_from_static);

/// Which tier of the profile table a snapshot selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    #[must_use]
    pub const fn of(snapshot: &EnvironmentSnapshot) -> Self {
        if snapshot.is_mobile_user_agent {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

/// Grid and effect budget for one device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTier {
    pub grid_columns: u32,
    pub grid_rows: u32,
    pub max_concurrent_effects: u32,
}

impl ProfileTier {
    #[must_use]
    pub const fn desktop() -> Self {
        Self {
            grid_columns: DESKTOP_GRID_COLUMNS,
            grid_rows: DESKTOP_GRID_ROWS,
            max_concurrent_effects: DESKTOP_MAX_EFFECTS,
        }
    }

    #[must_use]
    pub const fn mobile() -> Self {
        Self {
            grid_columns: MOBILE_GRID_COLUMNS,
            grid_rows: MOBILE_GRID_ROWS,
            max_concurrent_effects: MOBILE_MAX_EFFECTS,
        }
    }
}

fn default_desktop_tier() -> ProfileTier {
    ProfileTier::desktop()
}

fn default_mobile_tier() -> ProfileTier {
    ProfileTier::mobile()
}

/// The two-row table mapping device class to tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTable {
    #[serde(default = "default_desktop_tier")]
    pub desktop: ProfileTier,
    #[serde(default = "default_mobile_tier")]
    pub mobile: ProfileTier,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ProfileTable {
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            desktop: ProfileTier::desktop(),
            mobile: ProfileTier::mobile(),
        }
    }

    /// Parse a table from JSON. Tiers left out of the document keep their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a tier has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the table shipped with the web assets, falling back to the
    /// built-in constants if it cannot be parsed.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_PROFILE_DATA).unwrap_or_else(|err| {
            log::warn!("device profile table unreadable, using defaults: {err}");
            Self::default_config()
        })
    }

    /// Shared instance of [`ProfileTable::load_from_static`], parsed once.
    #[must_use]
    pub fn shared() -> &'static Self {
        &STATIC_TABLE
    }

    #[must_use]
    pub const fn tier(&self, class: DeviceClass) -> ProfileTier {
        match class {
            DeviceClass::Desktop => self.desktop,
            DeviceClass::Mobile => self.mobile,
        }
    }
}

/// Adaptation parameters handed to the simulation and the UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub grid_columns: u32,
    pub grid_rows: u32,
    /// Ceiling on simultaneously active tentacles.
    pub max_concurrent_effects: u32,
    pub render_scale: f64,
    /// Playability gate; false only for a mobile device held in portrait.
    pub is_playable: bool,
}

impl DeviceProfile {
    /// Resolve against the shipped table, the same one the shell uses.
    #[must_use]
    pub fn resolve(snapshot: &EnvironmentSnapshot) -> Self {
        resolve_with(ProfileTable::shared(), snapshot)
    }

    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        !self.is_playable
    }
}

/// Map a snapshot onto a profile using `table`. Total and pure.
#[must_use]
pub fn resolve_with(table: &ProfileTable, snapshot: &EnvironmentSnapshot) -> DeviceProfile {
    let class = DeviceClass::of(snapshot);
    let tier = table.tier(class);
    let render_scale = match class {
        DeviceClass::Mobile => snapshot.pixel_ratio,
        DeviceClass::Desktop => FALLBACK_PIXEL_RATIO,
    };
    DeviceProfile {
        grid_columns: tier.grid_columns,
        grid_rows: tier.grid_rows,
        max_concurrent_effects: tier.max_concurrent_effects,
        render_scale,
        is_playable: is_playable(snapshot),
    }
}

/// The gate: blocked exactly when a mobile device is in portrait.
#[must_use]
pub const fn is_playable(snapshot: &EnvironmentSnapshot) -> bool {
    !(snapshot.is_mobile_user_agent && snapshot.is_portrait)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_truth_table() {
        for (mobile, portrait, playable) in [
            (false, false, true),
            (false, true, true),
            (true, false, true),
            (true, true, false),
        ] {
            let snapshot = EnvironmentSnapshot {
                is_mobile_user_agent: mobile,
                is_portrait: portrait,
                ..EnvironmentSnapshot::default()
            };
            assert_eq!(
                DeviceProfile::resolve(&snapshot).is_playable,
                playable,
                "mobile={mobile} portrait={portrait}"
            );
        }
    }

    #[test]
    fn desktop_render_scale_is_one_even_with_odd_snapshot() {
        let snapshot = EnvironmentSnapshot {
            pixel_ratio: 2.0,
            ..EnvironmentSnapshot::desktop(1920, 1080)
        };
        let profile = DeviceProfile::resolve(&snapshot);
        assert!((profile.render_scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn static_table_matches_constants() {
        assert_eq!(ProfileTable::load_from_static(), ProfileTable::default_config());
        assert_eq!(*ProfileTable::shared(), ProfileTable::default_config());
    }

    #[test]
    fn partial_json_keeps_default_tiers() {
        let table = ProfileTable::from_json(
            r#"{"mobile":{"grid_columns":60,"grid_rows":30,"max_concurrent_effects":8}}"#,
        )
        .expect("partial table parses");
        assert_eq!(table.desktop, ProfileTier::desktop());
        assert_eq!(table.mobile.grid_columns, 60);

        let snapshot = EnvironmentSnapshot::mobile(false, 2.0);
        let profile = resolve_with(&table, &snapshot);
        assert_eq!(profile.grid_rows, 30);
        assert_eq!(profile.max_concurrent_effects, 8);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ProfileTable::from_json("{\"desktop\": 5}").is_err());
        assert!(ProfileTable::from_json("not json").is_err());
    }

    #[test]
    fn device_class_labels() {
        assert_eq!(DeviceClass::Desktop.label(), "desktop");
        assert_eq!(DeviceClass::Mobile.label(), "mobile");
    }
}
