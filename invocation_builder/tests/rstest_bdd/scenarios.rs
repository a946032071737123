//! Binds the invocation builder feature file to the step registry.

use crate::fixtures::{InvocationState, invocation_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/invocation_builder.feature",
    fixtures = [invocation_state: InvocationState]
);
