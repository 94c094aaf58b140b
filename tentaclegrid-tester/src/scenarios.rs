use serde::Serialize;
use tentaclegrid_game::{EnvironmentSnapshot, FixedProbe, HostEvent, ShellController, ShellView};

#[derive(Debug, Clone, Copy)]
pub enum StepAction {
    Mount,
    Deliver(HostEvent),
    Unmount,
}

impl StepAction {
    fn label(self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::Deliver(event) => event.event_name(),
            Self::Unmount => "unmount",
        }
    }
}

/// One host interaction and the shell state it must leave behind.
#[derive(Debug, Clone)]
pub struct ScenarioStep {
    /// Environment the probe reports from this step on.
    pub environment: Option<EnvironmentSnapshot>,
    pub action: StepAction,
    pub expect_view: Option<ShellView>,
    pub expect_transition: bool,
    pub expect_columns: Option<u32>,
}

impl ScenarioStep {
    fn new(action: StepAction, expect_view: Option<ShellView>, expect_transition: bool) -> Self {
        Self {
            environment: None,
            action,
            expect_view,
            expect_transition,
            expect_columns: None,
        }
    }

    fn after(mut self, environment: EnvironmentSnapshot) -> Self {
        self.environment = Some(environment);
        self
    }

    const fn columns(mut self, columns: u32) -> Self {
        self.expect_columns = Some(columns);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub initial: EnvironmentSnapshot,
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub steps_run: usize,
    pub transitions: usize,
    pub passed: bool,
    pub failures: Vec<String>,
}

const SCENARIOS: &[(&str, &str)] = &[
    (
        "iphone-rotation",
        "Phone rotates portrait to landscape and back",
    ),
    (
        "desktop-resize",
        "Desktop window resizes and goes tall; never gated",
    ),
    (
        "unmount-silences-events",
        "Host events after unmount change nothing",
    ),
    (
        "tablet-pixel-ratio",
        "Mobile render scale tracks the device pixel ratio",
    ),
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<Scenario> {
    let &(key, name) = SCENARIOS.iter().find(|(candidate, _)| *candidate == key)?;
    let (initial, steps) = match key {
        "iphone-rotation" => iphone_rotation(),
        "desktop-resize" => desktop_resize(),
        "unmount-silences-events" => unmount_silences_events(),
        "tablet-pixel-ratio" => tablet_pixel_ratio(),
        _ => return None,
    };
    Some(Scenario {
        key,
        name,
        initial,
        steps,
    })
}

fn iphone_rotation() -> (EnvironmentSnapshot, Vec<ScenarioStep>) {
    let portrait = EnvironmentSnapshot::mobile(true, 3.0).with_safari(true);
    let landscape = EnvironmentSnapshot::mobile(false, 3.0).with_safari(true);
    let steps = vec![
        ScenarioStep::new(StepAction::Mount, Some(ShellView::Blocked), true).columns(70),
        ScenarioStep::new(
            StepAction::Deliver(HostEvent::OrientationChange),
            Some(ShellView::Unblocked),
            true,
        )
        .after(landscape),
        ScenarioStep::new(
            StepAction::Deliver(HostEvent::Resize),
            Some(ShellView::Unblocked),
            false,
        ),
        ScenarioStep::new(
            StepAction::Deliver(HostEvent::OrientationChange),
            Some(ShellView::Blocked),
            true,
        )
        .after(portrait),
        ScenarioStep::new(StepAction::Unmount, None, false),
    ];
    (portrait, steps)
}

fn desktop_resize() -> (EnvironmentSnapshot, Vec<ScenarioStep>) {
    let steps = vec![
        ScenarioStep::new(StepAction::Mount, Some(ShellView::Unblocked), true).columns(100),
        ScenarioStep::new(
            StepAction::Deliver(HostEvent::Resize),
            Some(ShellView::Unblocked),
            false,
        )
        .after(EnvironmentSnapshot::desktop(1024, 768)),
        ScenarioStep::new(
            StepAction::Deliver(HostEvent::OrientationChange),
            Some(ShellView::Unblocked),
            false,
        )
        .after(EnvironmentSnapshot {
            is_portrait: true,
            ..EnvironmentSnapshot::desktop(600, 1200)
        })
        .columns(100),
    ];
    (EnvironmentSnapshot::desktop(1920, 1080), steps)
}

fn unmount_silences_events() -> (EnvironmentSnapshot, Vec<ScenarioStep>) {
    let steps = vec![
        ScenarioStep::new(StepAction::Mount, Some(ShellView::Unblocked), true),
        ScenarioStep::new(StepAction::Unmount, None, false),
        ScenarioStep::new(StepAction::Deliver(HostEvent::OrientationChange), None, false)
            .after(EnvironmentSnapshot::mobile(true, 2.0)),
        ScenarioStep::new(StepAction::Deliver(HostEvent::Resize), None, false),
    ];
    (EnvironmentSnapshot::mobile(false, 2.0), steps)
}

fn tablet_pixel_ratio() -> (EnvironmentSnapshot, Vec<ScenarioStep>) {
    // Same class and gate, so only the profile moves.
    let steps = vec![
        ScenarioStep::new(StepAction::Mount, Some(ShellView::Unblocked), true).columns(70),
        ScenarioStep::new(
            StepAction::Deliver(HostEvent::Resize),
            Some(ShellView::Unblocked),
            true,
        )
        .after(EnvironmentSnapshot::mobile(false, 2.0)),
        ScenarioStep::new(
            StepAction::Deliver(HostEvent::Resize),
            Some(ShellView::Unblocked),
            false,
        ),
    ];
    (EnvironmentSnapshot::mobile(false, 1.0), steps)
}

#[must_use]
pub fn run_scenario(scenario: &Scenario) -> ScenarioResult {
    let mut controller = ShellController::new(FixedProbe::new(scenario.initial));
    let mut failures = Vec::new();
    let mut transitions = 0;

    for (index, step) in scenario.steps.iter().enumerate() {
        if let Some(environment) = step.environment {
            controller.probe_mut().set(environment);
        }
        let transition = match step.action {
            StepAction::Mount => controller.mount(),
            StepAction::Deliver(event) => controller.handle(event),
            StepAction::Unmount => {
                controller.unmount();
                None
            }
        };
        let label = format!("step {} ({})", index + 1, step.action.label());

        if let Some(transition) = &transition {
            transitions += 1;
            log::debug!(
                "{}: {label} -> {} (profile changed: {})",
                scenario.key,
                transition.to.label(),
                transition.profile_changed
            );
        }
        if transition.is_some() != step.expect_transition {
            failures.push(format!(
                "{label}: expected transition={}, got {}",
                step.expect_transition,
                transition.is_some()
            ));
        }
        let view = controller.view();
        if view != step.expect_view {
            failures.push(format!(
                "{label}: expected view {:?}, got {view:?}",
                step.expect_view
            ));
        }
        if let Some(columns) = step.expect_columns {
            let actual = controller.profile().map(|profile| profile.grid_columns);
            if actual != Some(columns) {
                failures.push(format!("{label}: expected {columns} columns, got {actual:?}"));
            }
        }
    }

    ScenarioResult {
        scenario_name: scenario.name.to_string(),
        steps_run: scenario.steps.len(),
        transitions,
        passed: failures.is_empty(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).expect("listed scenario");
            assert_eq!(scenario.key, key);
            assert!(!scenario.steps.is_empty());
        }
        assert!(get_scenario("smoke").is_none());
    }

    #[test]
    fn built_in_scenarios_pass() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).expect("listed scenario");
            let result = run_scenario(&scenario);
            assert!(result.passed, "{key}: {:?}", result.failures);
        }
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let mut scenario = get_scenario("iphone-rotation").expect("scenario");
        scenario.steps[0].expect_view = Some(ShellView::Unblocked);
        let result = run_scenario(&scenario);
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].contains("step 1 (mount)"));
    }

    #[test]
    fn rotation_counts_transitions() {
        let scenario = get_scenario("iphone-rotation").expect("scenario");
        let result = run_scenario(&scenario);
        assert_eq!(result.transitions, 3);
    }
}
