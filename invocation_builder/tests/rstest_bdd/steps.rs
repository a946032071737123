//! Step definitions driving an [`InvocationBuilder`] through scenarios.

use anyhow::{Result, anyhow, ensure};
use invocation_builder::InvocationBuilder;
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{split_invocation, unquote};

use crate::fixtures::InvocationState;

fn update<F>(invocation_state: &InvocationState, f: F)
where
    F: FnOnce(&mut InvocationBuilder<'static>),
{
    let mut builder = invocation_state.builder.take().unwrap_or_default();
    f(&mut builder);
    invocation_state.builder.set(builder);
}

fn current(invocation_state: &InvocationState) -> Result<InvocationBuilder<'static>> {
    invocation_state
        .builder
        .get()
        .ok_or_else(|| anyhow!("no invocation builder in scenario state"))
}

#[given("an empty invocation builder")]
fn empty_builder(invocation_state: &InvocationState) {
    invocation_state.builder.set(InvocationBuilder::new());
}

#[when("I add the config path {path}")]
fn add_config(invocation_state: &InvocationState, path: String) {
    update(invocation_state, |b| {
        b.add_config(unquote(&path));
    });
}

#[when("I add the repositories {paths}")]
fn add_repos(invocation_state: &InvocationState, paths: String) -> Result<()> {
    let repos = split_invocation(&paths)?;
    update(invocation_state, |b| {
        b.add_repos(&repos);
    });
    Ok(())
}

#[when("I add the since date {date}")]
fn add_since(invocation_state: &InvocationState, date: String) {
    update(invocation_state, |b| {
        b.add_since_date(unquote(&date));
    });
}

#[when("I add the raw fragment {content}")]
fn add_raw(invocation_state: &InvocationState, content: String) {
    update(invocation_state, |b| {
        b.add(unquote(&content));
    });
}

#[when("I request shallow cloning")]
fn request_shallow(invocation_state: &InvocationState) {
    update(invocation_state, |b| {
        b.add_shallow_cloning();
    });
}

#[when("I add {count:u8} spaces")]
fn add_spaces(invocation_state: &InvocationState, count: u8) {
    update(invocation_state, |b| {
        b.add_white_space(usize::from(count));
    });
}

#[when("I reset the builder")]
fn reset_builder(invocation_state: &InvocationState) {
    update(invocation_state, |b| {
        b.reset();
    });
}

#[then("the invocation reads {expected}")]
fn invocation_reads(invocation_state: &InvocationState, expected: String) -> Result<()> {
    let actual = current(invocation_state)?.build();
    let wanted = unquote(&expected);
    ensure!(actual == wanted, "expected {wanted:?}, got {actual:?}");
    Ok(())
}

#[then("the invocation is empty")]
fn invocation_empty(invocation_state: &InvocationState) -> Result<()> {
    let actual = current(invocation_state)?.build();
    ensure!(actual.is_empty(), "expected empty invocation, got {actual:?}");
    Ok(())
}

#[then("shallow cloning is requested")]
fn shallow_requested(invocation_state: &InvocationState) -> Result<()> {
    ensure!(
        current(invocation_state)?.is_shallow_cloning(),
        "shallow cloning should be recorded"
    );
    Ok(())
}

#[then("shallow cloning is not requested")]
fn shallow_not_requested(invocation_state: &InvocationState) -> Result<()> {
    ensure!(
        !current(invocation_state)?.is_shallow_cloning(),
        "shallow cloning should not be recorded"
    );
    Ok(())
}
