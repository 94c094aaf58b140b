//! User-agent fixtures with the classification each one must produce.
use serde::Serialize;
use tentaclegrid_game::{DeviceProfile, EnvironmentSnapshot, HostSignals};

pub const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const DESKTOP_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15";
pub const DESKTOP_FIREFOX: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";
pub const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Mobile/15E148 Safari/604.1";
pub const IPHONE_CHROME: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/124.0.6367.88 Mobile/15E148 Safari/604.1";
pub const IPAD_SAFARI: &str = "Mozilla/5.0 (iPad; CPU OS 17_4_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Mobile/15E148 Safari/604.1";
pub const IPOD_SAFARI: &str = "Mozilla/5.0 (iPod touch; CPU iPhone OS 15_8 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.6 Mobile/15E148 Safari/604.1";
pub const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
pub const ANDROID_WEBVIEW: &str = "Mozilla/5.0 (Linux; Android 13; SM-A536B; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/116.0.0.0 Mobile Safari/537.36";

#[derive(Debug, Clone, Copy)]
pub struct UserAgentFixture {
    pub key: &'static str,
    pub user_agent: &'static str,
    pub expect_mobile: bool,
    pub expect_safari: bool,
}

const fn fixture(
    key: &'static str,
    user_agent: &'static str,
    expect_mobile: bool,
    expect_safari: bool,
) -> UserAgentFixture {
    UserAgentFixture {
        key,
        user_agent,
        expect_mobile,
        expect_safari,
    }
}

pub const FIXTURES: &[UserAgentFixture] = &[
    fixture("desktop-chrome", DESKTOP_CHROME, false, false),
    fixture("desktop-safari", DESKTOP_SAFARI, false, true),
    fixture("desktop-firefox", DESKTOP_FIREFOX, false, false),
    fixture("iphone-safari", IPHONE_SAFARI, true, true),
    // CriOS carries no "chrome" token, so the Safari rule accepts it.
    fixture("iphone-chrome", IPHONE_CHROME, true, true),
    fixture("ipad-safari", IPAD_SAFARI, true, true),
    fixture("ipod-safari", IPOD_SAFARI, true, true),
    fixture("android-chrome", ANDROID_CHROME, true, false),
    fixture("android-webview", ANDROID_WEBVIEW, true, false),
];

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResult {
    pub key: String,
    pub user_agent: String,
    pub snapshot: EnvironmentSnapshot,
    pub profile: DeviceProfile,
    pub passed: bool,
    pub failures: Vec<String>,
}

/// Build a snapshot as the browser probe would for this user agent.
#[must_use]
pub fn snapshot_for(user_agent: &str, portrait: bool, pixel_ratio: f64) -> EnvironmentSnapshot {
    let (width, height) = if portrait {
        (390.0, 844.0)
    } else {
        (844.0, 390.0)
    };
    EnvironmentSnapshot::from_signals(&HostSignals {
        user_agent: Some(user_agent.to_string()),
        viewport_width: Some(width),
        viewport_height: Some(height),
        device_pixel_ratio: Some(pixel_ratio),
        portrait: Some(portrait),
    })
}

#[must_use]
pub fn run_fixture(fixture: &UserAgentFixture) -> CatalogResult {
    let snapshot = snapshot_for(fixture.user_agent, false, 2.0);
    let profile = DeviceProfile::resolve(&snapshot);
    let mut failures = Vec::new();

    if snapshot.is_mobile_user_agent != fixture.expect_mobile {
        failures.push(format!(
            "mobile: expected {}, got {}",
            fixture.expect_mobile, snapshot.is_mobile_user_agent
        ));
    }
    if snapshot.is_safari_engine != fixture.expect_safari {
        failures.push(format!(
            "safari: expected {}, got {}",
            fixture.expect_safari, snapshot.is_safari_engine
        ));
    }
    let expected_dims = if fixture.expect_mobile {
        (70, 35, 10)
    } else {
        (100, 50, 30)
    };
    let dims = (
        profile.grid_columns,
        profile.grid_rows,
        profile.max_concurrent_effects,
    );
    if dims != expected_dims {
        failures.push(format!("profile: expected {expected_dims:?}, got {dims:?}"));
    }
    let portrait = DeviceProfile::resolve(&snapshot_for(fixture.user_agent, true, 2.0));
    if portrait.is_playable == fixture.expect_mobile {
        failures.push(format!(
            "portrait gate: expected playable={}, got {}",
            !fixture.expect_mobile, portrait.is_playable
        ));
    }

    log::debug!("{}: {} failure(s)", fixture.key, failures.len());
    CatalogResult {
        key: fixture.key.to_string(),
        user_agent: fixture.user_agent.to_string(),
        snapshot,
        profile,
        passed: failures.is_empty(),
        failures,
    }
}

#[must_use]
pub fn run_catalog() -> Vec<CatalogResult> {
    FIXTURES.iter().map(run_fixture).collect()
}
