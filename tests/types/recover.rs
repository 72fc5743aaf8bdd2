use outcome_rail::{AggregateFault, Fault, Outcome};

#[test]
fn recover_replaces_failure_with_new_success() {
    let outcome = Outcome::<i32>::fail(Fault::msg("boom")).recover(|_| Outcome::ok(7));
    assert_eq!(*outcome.value(), 7);
}

#[test]
fn recover_never_runs_on_success() {
    let mut invoked = false;
    let outcome = Outcome::ok(1).recover(|_| {
        invoked = true;
        Outcome::ok(0)
    });

    assert!(!invoked);
    assert_eq!(*outcome.value(), 1);
}

#[test]
fn failed_recovery_aggregates_both_faults_in_order() {
    let original = Fault::msg("boom");
    let outcome = Outcome::<i32>::fail(original.clone())
        .recover(|_| Outcome::fail(Fault::msg("retry failed")));

    let aggregate = outcome.fault().downcast_ref::<AggregateFault>().unwrap();
    assert_eq!(aggregate.len(), 2);
    assert!(aggregate.faults()[0].same_as(&original));
    assert_eq!(aggregate.faults()[1].to_string(), "retry failed");
}

#[test]
fn recover_sees_the_original_fault() {
    let mut seen = String::new();
    let _ = Outcome::<i32>::fail(Fault::msg("boom")).recover(|fault| {
        seen = fault.to_string();
        Outcome::ok(0)
    });
    assert_eq!(seen, "boom");
}

#[test]
fn recover_with_always_produces_a_value() {
    let outcome = Outcome::<i32>::fail(Fault::msg("boom")).recover_with(|_| 3);
    assert_eq!(*outcome.value(), 3);
}

#[test]
fn fallback_replaces_failure_only() {
    assert_eq!(*Outcome::<i32>::fail(Fault::msg("boom")).fallback(9).value(), 9);
    assert_eq!(*Outcome::ok(1).fallback(9).value(), 1);
}

#[test]
fn on_failure_observes_without_changing_state() {
    let fault = Fault::msg("boom");
    let mut seen = String::new();

    let outcome = Outcome::<i32>::fail(fault.clone()).on_failure(|f| seen = f.to_string());

    assert_eq!(seen, "boom");
    assert!(outcome.fault().same_as(&fault));
}

#[test]
fn on_failure_never_runs_on_success() {
    let mut invoked = false;
    let outcome = Outcome::ok(5).on_failure(|_| invoked = true);

    assert!(!invoked);
    assert_eq!(*outcome.value(), 5);
}

#[test]
fn on_failure_of_narrows_by_error_type() {
    let mut fmt_hits = 0;
    let mut aggregate_hits = 0;

    let outcome = Outcome::<i32>::fail(Fault::new(core::fmt::Error))
        .on_failure_of::<core::fmt::Error, _>(|_| fmt_hits += 1)
        .on_failure_of::<AggregateFault, _>(|_| aggregate_hits += 1);

    assert_eq!(fmt_hits, 1);
    assert_eq!(aggregate_hits, 0);
    assert!(outcome.is_failure());
}

#[test]
fn on_success_observes_the_value() {
    let mut seen = 0;
    let outcome = Outcome::ok(11).on_success(|x| seen = *x);

    assert_eq!(seen, 11);
    assert_eq!(*outcome.value(), 11);
}

#[test]
fn on_success_never_runs_on_failure() {
    let mut invoked = false;
    let outcome: Outcome<i32> =
        Outcome::fail(Fault::msg("boom")).on_success(|_| invoked = true);

    assert!(!invoked);
    assert!(outcome.is_failure());
}
