//! Adaptive shell lifecycle.
//!
//! The shell is a small event-driven state machine. A mount takes the first
//! reading, each host notification re-reads and re-resolves, and an unmount
//! is terminal: later notifications are ignored. The visible part is two
//! states, `Blocked` and `Unblocked`, selected only by the playability gate.
use serde::{Deserialize, Serialize};

use crate::constants::{ORIENTATION_CHANGE_EVENT, RESIZE_EVENT};
use crate::environment::{EnvironmentProbe, EnvironmentSnapshot};
use crate::profile::{DeviceProfile, ProfileTable, resolve_with};

/// Host notifications the shell subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostEvent {
    Resize,
    OrientationChange,
}

impl HostEvent {
    pub const ALL: [Self; 2] = [Self::Resize, Self::OrientationChange];

    /// DOM event name used when registering the listener.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Resize => RESIZE_EVENT,
            Self::OrientationChange => ORIENTATION_CHANGE_EVENT,
        }
    }
}

/// What the shell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellView {
    /// Full-viewport rotate notice; wrapped content is not rendered.
    Blocked,
    Unblocked,
}

impl ShellView {
    #[must_use]
    pub const fn for_profile(profile: &DeviceProfile) -> Self {
        if profile.is_blocked() {
            Self::Blocked
        } else {
            Self::Unblocked
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Unblocked => "unblocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Idle,
    /// Mounted with both listeners attached.
    Listening,
    Unmounted,
}

/// Inputs to [`ShellState::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellEvent {
    Mount(EnvironmentSnapshot),
    Environment(HostEvent, EnvironmentSnapshot),
    Unmount,
}

/// A visible change: the view flipped, the profile changed, or both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellTransition {
    /// `None` for the initial resolution on mount.
    pub from: Option<ShellView>,
    pub to: ShellView,
    pub profile: DeviceProfile,
    pub profile_changed: bool,
}

impl ShellTransition {
    #[must_use]
    pub fn gate_changed(&self) -> bool {
        self.from != Some(self.to)
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellStep {
    pub state: ShellState,
    pub transition: Option<ShellTransition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    lifecycle: Lifecycle,
    profile: Option<DeviceProfile>,
    table: ProfileTable,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(*ProfileTable::shared())
    }
}

impl ShellState {
    #[must_use]
    pub const fn new(table: ProfileTable) -> Self {
        Self {
            lifecycle: Lifecycle::Idle,
            profile: None,
            table,
        }
    }

    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Most recently resolved profile. Survives unmount for inspection.
    #[must_use]
    pub const fn profile(&self) -> Option<&DeviceProfile> {
        self.profile.as_ref()
    }

    /// Current view, only while mounted.
    #[must_use]
    pub fn view(&self) -> Option<ShellView> {
        match self.lifecycle {
            Lifecycle::Listening => self.profile.as_ref().map(ShellView::for_profile),
            Lifecycle::Idle | Lifecycle::Unmounted => None,
        }
    }

    #[must_use]
    pub fn apply(&self, event: ShellEvent) -> ShellStep {
        match (self.lifecycle, event) {
            (Lifecycle::Idle, ShellEvent::Mount(snapshot)) => self.resolve_into(&snapshot),
            (Lifecycle::Listening, ShellEvent::Environment(kind, snapshot)) => {
                log::debug!("shell re-resolving after {}", kind.event_name());
                self.resolve_into(&snapshot)
            }
            (Lifecycle::Idle | Lifecycle::Listening, ShellEvent::Unmount) => ShellStep {
                state: Self {
                    lifecycle: Lifecycle::Unmounted,
                    ..self.clone()
                },
                transition: None,
            },
            (lifecycle, ignored) => {
                log::debug!("shell ignoring {ignored:?} while {lifecycle:?}");
                self.unchanged()
            }
        }
    }

    fn resolve_into(&self, snapshot: &EnvironmentSnapshot) -> ShellStep {
        let profile = resolve_with(&self.table, snapshot);
        let from = self.view();
        let to = ShellView::for_profile(&profile);
        let profile_changed = self.profile.as_ref() != Some(&profile);
        let state = Self {
            lifecycle: Lifecycle::Listening,
            profile: Some(profile),
            table: self.table,
        };
        if from == Some(to) && !profile_changed {
            return ShellStep {
                state,
                transition: None,
            };
        }
        if from != Some(to) {
            log::info!("shell gate now {}", to.label());
        }
        ShellStep {
            state,
            transition: Some(ShellTransition {
                from,
                to,
                profile,
                profile_changed,
            }),
        }
    }

    fn unchanged(&self) -> ShellStep {
        ShellStep {
            state: self.clone(),
            transition: None,
        }
    }
}

/// Drives a [`ShellState`] from an injected probe, for hosts that deliver
/// notifications by calling [`ShellController::handle`].
#[derive(Debug)]
pub struct ShellController<P: EnvironmentProbe> {
    probe: P,
    state: ShellState,
}

impl<P: EnvironmentProbe> ShellController<P> {
    #[must_use]
    pub fn new(probe: P) -> Self {
        Self::with_table(probe, *ProfileTable::shared())
    }

    #[must_use]
    pub const fn with_table(probe: P, table: ProfileTable) -> Self {
        Self {
            probe,
            state: ShellState::new(table),
        }
    }

    /// Take the initial reading and start listening.
    pub fn mount(&mut self) -> Option<ShellTransition> {
        let snapshot = self.probe.read();
        self.step(ShellEvent::Mount(snapshot))
    }

    /// Deliver a host notification. No-op unless mounted.
    pub fn handle(&mut self, event: HostEvent) -> Option<ShellTransition> {
        if self.state.lifecycle() != Lifecycle::Listening {
            return None;
        }
        let snapshot = self.probe.read();
        self.step(ShellEvent::Environment(event, snapshot))
    }

    pub fn unmount(&mut self) {
        let _ = self.step(ShellEvent::Unmount);
    }

    #[must_use]
    pub const fn state(&self) -> &ShellState {
        &self.state
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&DeviceProfile> {
        self.state.profile()
    }

    #[must_use]
    pub fn view(&self) -> Option<ShellView> {
        self.state.view()
    }

    pub const fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    fn step(&mut self, event: ShellEvent) -> Option<ShellTransition> {
        let ShellStep { state, transition } = self.state.apply(event);
        self.state = state;
        transition
    }
}
