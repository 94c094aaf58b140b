//! Tentacle Grid device adaptation
//!
//! Platform-agnostic core of the Tentacle Grid presentation layer. It senses
//! the host environment through an injected probe, resolves the grid and
//! effect budget for the device, and tracks the playability gate across the
//! shell lifecycle. No browser dependencies live here.

pub mod constants;
pub mod environment;
pub mod profile;
pub mod shell;
pub mod store;
pub mod user_agent;

// Re-export commonly used types
pub use environment::{EnvironmentProbe, EnvironmentSnapshot, FixedProbe, HostSignals};
pub use profile::{
    DeviceClass, DeviceProfile, ProfileTable, ProfileTier, is_playable, resolve_with,
};
pub use shell::{
    HostEvent, Lifecycle, ShellController, ShellEvent, ShellState, ShellStep, ShellTransition,
    ShellView,
};
pub use store::{
    GameSettings, GameStatus, GameStoreState, PlayerSummary, SettingsPatch, StoreCommand,
    TurnPhase,
};
pub use user_agent::{UserAgentTraits, is_mobile_user_agent, is_safari_engine};
