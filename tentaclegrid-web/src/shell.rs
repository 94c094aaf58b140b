//! Yew wiring for the adaptive shell state machine.
use std::rc::Rc;

use tentaclegrid_game::{
    DeviceProfile, EnvironmentProbe, EnvironmentSnapshot, HostEvent, ShellEvent, ShellState,
    ShellView,
};
use yew::prelude::*;

use crate::listeners::WindowListeners;
use crate::probe::ProbeHandle;

/// Reducer wrapper so the shell state can live in `use_reducer`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellReducer(ShellState);

impl ShellReducer {
    /// State after the initial reading, as taken during mount.
    #[must_use]
    pub fn mounted(snapshot: EnvironmentSnapshot) -> Self {
        Self(ShellState::default().apply(ShellEvent::Mount(snapshot)).state)
    }

    #[must_use]
    pub fn view(&self) -> Option<ShellView> {
        self.0.view()
    }

    /// Current profile, or the fail-open default if none was resolved.
    #[must_use]
    pub fn profile(&self) -> DeviceProfile {
        self.0
            .profile()
            .copied()
            .unwrap_or_else(fallback_profile)
    }
}

impl Reducible for ShellReducer {
    type Action = ShellEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let step = self.0.apply(action);
        if step.transition.is_none() && step.state == self.0 {
            return self;
        }
        Rc::new(Self(step.state))
    }
}

fn fallback_profile() -> DeviceProfile {
    DeviceProfile::resolve(&EnvironmentSnapshot::default())
}

/// Attach both window listeners, then take one fresh reading so a change
/// between the first render and registration is not lost.
///
/// Returns `None`, after logging, when the browser refuses the listeners;
/// the shell then keeps its first reading.
pub fn start_listening<F>(probe: &ProbeHandle, dispatch: F) -> Option<WindowListeners>
where
    F: Fn(ShellEvent) + Clone + 'static,
{
    let on_event = {
        let probe = probe.clone();
        let dispatch = dispatch.clone();
        move |kind: HostEvent| dispatch(ShellEvent::Environment(kind, probe.read()))
    };
    match WindowListeners::attach(on_event) {
        Ok(guard) => {
            dispatch(ShellEvent::Environment(HostEvent::Resize, probe.read()));
            Some(guard)
        }
        Err(err) => {
            log::warn!("shell running without live updates: {err}");
            None
        }
    }
}

/// Mount the shell: read once, resolve, and keep both window listeners
/// attached for as long as the calling component lives.
#[hook]
pub fn use_adaptive_shell(probe: &ProbeHandle) -> UseReducerHandle<ShellReducer> {
    let shell = {
        let probe = probe.clone();
        use_reducer(move || ShellReducer::mounted(probe.read()))
    };
    {
        let dispatcher = shell.dispatcher();
        use_effect_with(probe.clone(), move |probe| {
            let guard = start_listening(probe, move |event| dispatcher.dispatch(event));
            move || drop(guard)
        });
    }
    shell
}

/// Latest profile published by the nearest `AdaptiveShell`.
///
/// Outside a shell this falls back to the desktop profile.
#[hook]
pub fn use_device_profile() -> DeviceProfile {
    use_context::<DeviceProfile>().unwrap_or_else(fallback_profile)
}
