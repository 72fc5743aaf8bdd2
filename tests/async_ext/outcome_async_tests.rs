//! Tests for asynchronous continuations on realized outcomes.

use outcome_rail::{AggregateFault, Fault, Outcome};

#[tokio::test]
async fn then_async_chains_on_success() {
    let outcome = Outcome::ok(21)
        .then_async(|x| async move { Outcome::ok(x * 2) })
        .await;

    assert_eq!(*outcome.value(), 42);
}

#[tokio::test]
async fn then_async_never_runs_on_failure() {
    let fault = Fault::msg("boom");
    let outcome: Outcome<String> = Outcome::<i32>::fail(fault.clone())
        .then_async(|x| async move { Outcome::ok(x.to_string()) })
        .await;

    assert!(outcome.fault().same_as(&fault));
}

#[tokio::test]
async fn map_async_lifts_the_value() {
    let outcome = Outcome::ok(10).map_async(|x| async move { x + 1 }).await;
    assert_eq!(*outcome.value(), 11);
}

#[tokio::test]
async fn recover_async_replaces_failure() {
    let outcome = Outcome::<i32>::fail(Fault::msg("boom"))
        .recover_async(|_| async { Outcome::ok(7) })
        .await;

    assert_eq!(*outcome.value(), 7);
}

#[tokio::test]
async fn recover_async_aggregates_when_recovery_fails() {
    let original = Fault::msg("boom");
    let outcome = Outcome::<i32>::fail(original.clone())
        .recover_async(|_| async { Outcome::fail(Fault::msg("retry failed")) })
        .await;

    let aggregate = outcome.fault().downcast_ref::<AggregateFault>().unwrap();
    assert!(aggregate.faults()[0].same_as(&original));
}

#[tokio::test]
async fn on_failure_async_observes_without_changing_state() {
    let mut seen = String::new();
    let outcome = Outcome::<i32>::fail(Fault::msg("boom"))
        .on_failure_async(|fault| {
            seen = fault.to_string();
            async {}
        })
        .await;

    assert_eq!(seen, "boom");
    assert!(outcome.is_failure());
}

#[tokio::test]
async fn fold_async_runs_exactly_one_branch() {
    let rendered = Outcome::ok(3)
        .fold_async(
            |x| async move { x.to_string() },
            |fault| async move { fault.to_string() },
        )
        .await;

    assert_eq!(rendered, "3");
}

#[tokio::test]
async fn when_async_gates_on_the_predicate() {
    let bumped = Outcome::ok(5)
        .when_async(|x| *x > 0, |x| async move { Outcome::ok(x + 1) })
        .await;
    assert_eq!(*bumped.value(), 6);

    let untouched = Outcome::ok(-5)
        .when_async(|x| *x > 0, |x| async move { Outcome::ok(x + 1) })
        .await;
    assert_eq!(*untouched.value(), -5);
}

#[tokio::test]
async fn always_then_async_runs_on_failure() {
    let outcome: Outcome<i32> = Outcome::<i32>::fail(Fault::msg("boom"))
        .always_then_async(|input| async move {
            if input.is_failure() {
                Outcome::ok(-1)
            } else {
                input
            }
        })
        .await;

    assert_eq!(*outcome.value(), -1);
}
