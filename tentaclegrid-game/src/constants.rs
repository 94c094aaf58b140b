//! Centralized tuning constants for device adaptation.
//!
//! The two profile tiers are fixed values. Keeping them together means the
//! grid and effect budgets only change through reviewed code edits, with the
//! static JSON table mirroring them for the web build.

// Desktop tier -------------------------------------------------------------
pub const DESKTOP_GRID_COLUMNS: u32 = 100;
pub const DESKTOP_GRID_ROWS: u32 = 50;
pub const DESKTOP_MAX_EFFECTS: u32 = 30;

// Mobile tier --------------------------------------------------------------
pub const MOBILE_GRID_COLUMNS: u32 = 70;
pub const MOBILE_GRID_ROWS: u32 = 35;
pub const MOBILE_MAX_EFFECTS: u32 = 10;

// User-agent tokens (matched case-insensitively) ----------------------------
pub const MOBILE_UA_TOKENS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];
pub const SAFARI_UA_TOKEN: &str = "safari";
pub const SAFARI_VETO_TOKENS: [&str; 2] = ["chrome", "android"];

// Host signal fallbacks ----------------------------------------------------
pub const FALLBACK_PIXEL_RATIO: f64 = 1.0;
pub const FALLBACK_PORTRAIT: bool = false;
pub const PORTRAIT_MEDIA_QUERY: &str = "(orientation: portrait)";

// DOM event names ----------------------------------------------------------
pub const RESIZE_EVENT: &str = "resize";
pub const ORIENTATION_CHANGE_EVENT: &str = "orientationchange";

// Store defaults -----------------------------------------------------------
pub const DEFAULT_SIMULATION_SPEED: u32 = 1;
