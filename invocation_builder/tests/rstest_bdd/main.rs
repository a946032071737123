//! `rstest-bdd` behavioural suite for the invocation builder.
//!
//! Fixtures and steps live in sibling modules; [`scenarios`] binds the
//! feature file under `tests/features` to them.

mod fixtures;
mod scenarios;
mod steps;
