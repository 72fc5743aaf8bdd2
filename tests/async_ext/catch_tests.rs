//! Tests for panic capture around pending outcomes.

use outcome_rail::prelude_async::*;

#[tokio::test]
async fn caught_converts_a_panicking_future_into_a_failure() {
    let outcome: Outcome<u32> = async {
        panic!("async continuation exploded");
    }
    .caught()
    .await;

    assert!(outcome.is_failure());
    assert!(outcome.fault().captured());
    assert_eq!(outcome.fault().to_string(), "async continuation exploded");
}

#[tokio::test]
async fn caught_passes_resolved_outcomes_through() {
    let outcome = async { Outcome::ok(5) }.caught().await;
    assert_eq!(*outcome.value(), 5);
}

#[tokio::test]
async fn run_async_captures_continuation_panics() {
    let outcome: Outcome<u32> = Catcher::new()
        .run_async(Outcome::ok(2), |input| async move {
            let x = input.into_value();
            assert!(x > 10, "value too small");
            Outcome::ok(x)
        })
        .await;

    assert!(outcome.fault().captured());
}

#[tokio::test]
async fn run_async_skips_the_continuation_on_failed_input() {
    let fault = Fault::msg("boom");
    let outcome: Outcome<u32> = Catcher::new()
        .run_async(Outcome::<u32>::fail(fault.clone()), |_| async {
            unreachable!("skipped on failed input");
        })
        .await;

    assert!(outcome.fault().same_as(&fault));
}

#[tokio::test]
async fn run_async_always_policy_runs_on_failed_input() {
    let outcome: Outcome<u32> = Catcher::always()
        .run_async(Outcome::<u32>::fail(Fault::msg("boom")), |input| async move {
            Outcome::ok(if input.is_failure() { 1 } else { 0 })
        })
        .await;

    assert_eq!(*outcome.value(), 1);
}

#[tokio::test]
async fn run_async_captures_a_panic_before_the_future_exists() {
    let outcome: Outcome<u32> = Catcher::new()
        .run_async(Outcome::ok(1), |_| -> core::future::Ready<Outcome<u32>> {
            panic!("constructor exploded");
        })
        .await;

    assert!(outcome.fault().captured());
    assert_eq!(outcome.fault().to_string(), "constructor exploded");
}
