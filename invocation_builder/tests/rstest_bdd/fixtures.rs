//! Shared fixtures for the behavioural scenarios.

use invocation_builder::InvocationBuilder;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state carrying the builder between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct InvocationState {
    pub builder: Slot<InvocationBuilder<'static>>,
}

/// Creates an empty scenario state.
#[fixture]
pub fn invocation_state() -> InvocationState {
    InvocationState::default()
}
