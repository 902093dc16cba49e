//! Step definitions for the outcome scenarios.

use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use outcome::{Outcome, Panicked};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{
    calls::CallCounter,
    failures::{RuntimeFailure, SpecializedFailure, UnrelatedFailure, panicking, raising},
};

use crate::fixtures::{OutcomeContext, Planned};

fn plan(outcome_context: &OutcomeContext, planned: Planned) -> Result<()> {
    ensure!(
        outcome_context.planned.is_empty(),
        "an operation was already planned"
    );
    outcome_context.planned.set(planned);
    Ok(())
}

fn matches_kind(outcome: &Outcome<u32>, kind: &str) -> Result<bool> {
    match kind {
        "runtime" => Ok(outcome.matches::<RuntimeFailure>()),
        "specialised" => Ok(outcome.matches::<SpecializedFailure>()),
        "unrelated" => Ok(outcome.matches::<UnrelatedFailure>()),
        "panic" => Ok(outcome.matches::<Panicked>()),
        other => Err(anyhow!("unknown failure kind: {other}")),
    }
}

fn with_outcome<R>(
    outcome_context: &OutcomeContext,
    f: impl Fn(&Outcome<u32>) -> Result<R>,
) -> Result<R> {
    outcome_context
        .outcome
        .with_ref(f)
        .ok_or_else(|| anyhow!("no outcome has been captured"))?
}

#[given("an operation that produces {value:u32}")]
fn produces(outcome_context: &OutcomeContext, value: u32) -> Result<()> {
    plan(outcome_context, Planned::Produce(value))
}

#[given("an operation that raises a runtime failure")]
fn raises_runtime(outcome_context: &OutcomeContext) -> Result<()> {
    plan(outcome_context, Planned::RaiseRuntime)
}

#[given("an operation that raises a specialised failure")]
fn raises_specialised(outcome_context: &OutcomeContext) -> Result<()> {
    plan(outcome_context, Planned::RaiseSpecialised)
}

#[given("an operation that panics")]
fn panics(outcome_context: &OutcomeContext) -> Result<()> {
    plan(outcome_context, Planned::Panic)
}

#[when("the operation is captured")]
fn capture(outcome_context: &OutcomeContext) -> Result<()> {
    let planned = outcome_context
        .planned
        .get()
        .ok_or_else(|| anyhow!("no operation was planned"))?;
    let outcome = match planned {
        Planned::Produce(value) => {
            let counter = CallCounter::default();
            let captured = Outcome::capture(counter.succeeding(value));
            outcome_context.calls.set(counter);
            captured
        }
        Planned::RaiseRuntime => Outcome::capture(raising(RuntimeFailure::new("scenario"))),
        Planned::RaiseSpecialised => Outcome::capture(raising(SpecializedFailure)),
        Planned::Panic => Outcome::capture(panicking("scenario panic")),
    };
    outcome_context.outcome.set(outcome);
    Ok(())
}

#[when("the outcome is inspected {times:u32} times")]
fn inspect_repeatedly(outcome_context: &OutcomeContext, times: u32) -> Result<()> {
    with_outcome(outcome_context, |outcome| {
        let first = outcome.try_get().ok().copied();
        for _ in 0..times {
            ensure!(!outcome.is_failure(), "outcome changed to a failure");
            ensure!(
                outcome.try_get().ok().copied() == first,
                "outcome value changed between inspections"
            );
        }
        Ok(())
    })
}

#[then("the outcome is not a failure")]
fn is_success(outcome_context: &OutcomeContext) -> Result<()> {
    with_outcome(outcome_context, |outcome| {
        ensure!(!outcome.is_failure(), "expected success, got {outcome:?}");
        ensure!(outcome.failure().is_none(), "success must not hold a failure");
        Ok(())
    })
}

#[then("the outcome is a failure")]
fn is_failure(outcome_context: &OutcomeContext) -> Result<()> {
    with_outcome(outcome_context, |outcome| {
        ensure!(outcome.is_failure(), "expected failure, got {outcome:?}");
        Ok(())
    })
}

#[then("unwrapping yields {expected:u32}")]
fn unwrap_yields(outcome_context: &OutcomeContext, expected: u32) -> Result<()> {
    with_outcome(outcome_context, |outcome| {
        let value = *outcome.try_get()?;
        ensure!(value == expected, "expected {expected}, got {value}");
        Ok(())
    })
}

#[then("the failure matches the {kind} kind")]
fn failure_matches(outcome_context: &OutcomeContext, kind: String) -> Result<()> {
    with_outcome(outcome_context, |outcome| {
        ensure!(matches_kind(outcome, &kind)?, "expected a {kind} failure");
        Ok(())
    })
}

#[then("the failure does not match the {kind} kind")]
fn failure_does_not_match(outcome_context: &OutcomeContext, kind: String) -> Result<()> {
    with_outcome(outcome_context, |outcome| {
        ensure!(!matches_kind(outcome, &kind)?, "unexpected {kind} failure");
        Ok(())
    })
}

#[then("unwrapping fails with the captured failure as its cause")]
fn unwrap_fails(outcome_context: &OutcomeContext) -> Result<()> {
    with_outcome(outcome_context, |outcome| {
        let Err(err) = outcome.try_get() else {
            return Err(anyhow!("unwrapping a failed outcome returned a value"));
        };
        let stored = outcome
            .failure()
            .ok_or_else(|| anyhow!("failed outcome lost its failure"))?;
        ensure!(
            Arc::ptr_eq(err.captured(), stored),
            "unwrap failure does not wrap the captured failure"
        );
        Ok(())
    })
}

#[then("the operation ran once")]
fn ran_once(outcome_context: &OutcomeContext) -> Result<()> {
    let count = outcome_context
        .calls
        .with_ref(CallCounter::count)
        .ok_or_else(|| anyhow!("no call counter was installed"))?;
    ensure!(count == 1, "operation ran {count} times");
    Ok(())
}
