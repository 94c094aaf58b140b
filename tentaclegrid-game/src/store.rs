//! Read/command surface of the game state store.
//!
//! The simulation engine owns the rules; this module only holds the state the
//! presentation layer reads and the three commands it may issue.
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SIMULATION_SPEED;
use crate::profile::{DeviceProfile, ProfileTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Setup,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Deploy,
    Extend,
    Resolve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: u8,
    pub name: String,
    pub color: String,
    pub territory: u32,
    pub active_tentacles: u32,
    #[serde(default)]
    pub eliminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub grid_columns: u32,
    pub grid_rows: u32,
    pub max_tentacles: u32,
    pub player_count: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        let tier = ProfileTier::desktop();
        Self {
            grid_columns: tier.grid_columns,
            grid_rows: tier.grid_rows,
            max_tentacles: tier.max_concurrent_effects,
            player_count: 2,
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub grid_columns: Option<u32>,
    pub grid_rows: Option<u32>,
    pub max_tentacles: Option<u32>,
    pub player_count: Option<u8>,
}

impl SettingsPatch {
    /// Settings that follow the device profile: grid size and tentacle budget.
    #[must_use]
    pub const fn from_profile(profile: &DeviceProfile) -> Self {
        Self {
            grid_columns: Some(profile.grid_columns),
            grid_rows: Some(profile.grid_rows),
            max_tentacles: Some(profile.max_concurrent_effects),
            player_count: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.grid_columns.is_none()
            && self.grid_rows.is_none()
            && self.max_tentacles.is_none()
            && self.player_count.is_none()
    }
}

impl GameSettings {
    #[must_use]
    pub fn merged(self, patch: SettingsPatch) -> Self {
        Self {
            grid_columns: patch.grid_columns.unwrap_or(self.grid_columns),
            grid_rows: patch.grid_rows.unwrap_or(self.grid_rows),
            max_tentacles: patch.max_tentacles.unwrap_or(self.max_tentacles),
            player_count: patch.player_count.unwrap_or(self.player_count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreCommand {
    TogglePause,
    SetSimulationSpeed(u32),
    UpdateSettings(SettingsPatch),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStoreState {
    pub game_state: GameStatus,
    pub turn: u32,
    pub phase: TurnPhase,
    pub simulation_speed: u32,
    pub is_paused: bool,
    pub players: Vec<PlayerSummary>,
    pub settings: GameSettings,
}

impl Default for GameStoreState {
    fn default() -> Self {
        Self {
            game_state: GameStatus::Setup,
            turn: 0,
            phase: TurnPhase::Deploy,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
            is_paused: false,
            players: Vec::new(),
            settings: GameSettings::default(),
        }
    }
}

impl GameStoreState {
    /// Apply a command, returning the next state.
    #[must_use]
    pub fn reduce(&self, command: StoreCommand) -> Self {
        let mut next = self.clone();
        next.apply(command);
        next
    }

    pub fn apply(&mut self, command: StoreCommand) {
        match command {
            StoreCommand::TogglePause => self.is_paused = !self.is_paused,
            StoreCommand::SetSimulationSpeed(speed) => self.simulation_speed = speed,
            StoreCommand::UpdateSettings(patch) if patch.is_empty() => {}
            StoreCommand::UpdateSettings(patch) => {
                self.settings = self.settings.merged(patch);
            }
        }
    }

    #[must_use]
    pub fn active_players(&self) -> usize {
        self.players.iter().filter(|p| !p.eliminated).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentSnapshot;

    #[test]
    fn toggle_pause_flips_flag() {
        let state = GameStoreState::default();
        let paused = state.reduce(StoreCommand::TogglePause);
        assert!(paused.is_paused);
        assert!(!paused.reduce(StoreCommand::TogglePause).is_paused);
    }

    #[test]
    fn speed_is_stored_verbatim() {
        let state = GameStoreState::default().reduce(StoreCommand::SetSimulationSpeed(4));
        assert_eq!(state.simulation_speed, 4);
    }

    #[test]
    fn profile_patch_only_touches_profile_fields() {
        let mut state = GameStoreState::default();
        state.settings.player_count = 4;
        let profile = DeviceProfile::resolve(&EnvironmentSnapshot::mobile(false, 2.0));
        state.apply(StoreCommand::UpdateSettings(SettingsPatch::from_profile(
            &profile,
        )));
        assert_eq!(state.settings.grid_columns, 70);
        assert_eq!(state.settings.grid_rows, 35);
        assert_eq!(state.settings.max_tentacles, 10);
        assert_eq!(state.settings.player_count, 4);
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = SettingsPatch::default();
        assert!(patch.is_empty());
        let state = GameStoreState::default();
        assert_eq!(state.reduce(StoreCommand::UpdateSettings(patch)), state);
    }

    #[test]
    fn active_players_skips_eliminated() {
        let mut state = GameStoreState::default();
        state.players = vec![
            PlayerSummary {
                id: 1,
                name: "Red".into(),
                color: "#e0245e".into(),
                territory: 12,
                active_tentacles: 3,
                eliminated: false,
            },
            PlayerSummary {
                id: 2,
                name: "Blue".into(),
                color: "#1da1f2".into(),
                territory: 0,
                active_tentacles: 0,
                eliminated: true,
            },
        ];
        assert_eq!(state.active_players(), 1);
    }
}
