use outcome_rail::{Fault, Outcome};

#[test]
fn ok_is_success() {
    let outcome = Outcome::ok(42);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(*outcome.value(), 42);
}

#[test]
fn fail_is_failure() {
    let outcome: Outcome<i32> = Outcome::fail(Fault::msg("boom"));
    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
    assert_eq!(outcome.fault().to_string(), "boom");
}

#[test]
fn begin_is_unit_success() {
    let outcome = Outcome::begin();
    assert!(outcome.is_success());
}

#[test]
fn success_constant_is_success() {
    assert!(Outcome::SUCCESS.is_success());
}

#[test]
fn begin_with_lifts_producer_value() {
    let outcome = Outcome::begin_with(|| 5);
    assert_eq!(*outcome.value(), 5);
}

#[test]
#[should_panic(expected = "value read on a failed outcome")]
fn value_on_failure_panics_with_fault() {
    let outcome: Outcome<i32> = Outcome::fail(Fault::msg("boom"));
    let _ = outcome.value();
}

#[test]
#[should_panic(expected = "boom")]
fn value_on_failure_surfaces_fault_message() {
    let outcome: Outcome<i32> = Outcome::fail(Fault::msg("boom"));
    let _ = outcome.into_value();
}

#[test]
#[should_panic(expected = "fault read on a successful outcome")]
fn fault_on_success_panics() {
    let outcome = Outcome::ok(1);
    let _ = outcome.fault();
}

#[test]
#[should_panic(expected = "a fault cannot be carried as a success value")]
fn ok_rejects_fault_payload() {
    let _ = Outcome::ok(Fault::msg("smuggled"));
}

#[test]
fn as_value_and_as_fault_never_panic() {
    let good = Outcome::ok(7);
    assert_eq!(good.as_value(), Some(&7));
    assert!(good.as_fault().is_none());

    let bad: Outcome<i32> = Outcome::fail(Fault::msg("boom"));
    assert!(bad.as_value().is_none());
    assert_eq!(bad.as_fault().unwrap().to_string(), "boom");
}

#[test]
fn discard_drops_value_keeps_failure() {
    assert!(Outcome::ok(9).discard().is_success());

    let fault = Fault::msg("boom");
    let failed = Outcome::<i32>::fail(fault.clone()).discard();
    assert!(failed.fault().same_as(&fault));
}

#[test]
fn with_default_produces_zero_value_success() {
    let outcome = Outcome::begin().with_default::<u32>();
    assert_eq!(*outcome.value(), 0);

    let fault = Fault::msg("boom");
    let failed = Outcome::fail(fault.clone()).with_default::<u32>();
    assert!(failed.fault().same_as(&fault));
}

#[test]
fn discard_then_with_default_loses_value_intentionally() {
    let outcome = Outcome::ok(41).discard().with_default::<i32>();
    assert_eq!(*outcome.value(), 0);
}

#[test]
fn default_is_zero_value_success() {
    let outcome: Outcome<u64> = Outcome::default();
    assert_eq!(*outcome.value(), 0);
}

#[test]
fn into_result_round_trip() {
    assert_eq!(Outcome::ok(3).into_result().unwrap(), 3);

    let fault = Fault::msg("boom");
    let err = Outcome::<i32>::fail(fault.clone()).into_result().unwrap_err();
    assert!(err.same_as(&fault));
}

#[test]
fn from_result_lifts_both_sides() {
    let good: Outcome<u32> = Ok::<u32, core::fmt::Error>(4).into();
    assert_eq!(*good.value(), 4);

    let bad: Outcome<u32> = Err::<u32, core::fmt::Error>(core::fmt::Error).into();
    assert!(bad.fault().is::<core::fmt::Error>());
}

#[test]
fn from_fault_builds_failure() {
    let outcome: Outcome<String> = Fault::msg("boom").into();
    assert!(outcome.is_failure());
}

#[test]
fn clone_shares_fault_payload() {
    let original: Outcome<i32> = Outcome::fail(Fault::msg("boom"));
    let copy = original.clone();
    assert!(copy.fault().same_as(original.fault()));
}

#[test]
fn debug_names_both_sides() {
    let good = format!("{:?}", Outcome::ok(1));
    assert!(good.contains("Success"));

    let bad = format!("{:?}", Outcome::<i32>::fail(Fault::msg("boom")));
    assert!(bad.contains("Failure"));
}

#[test]
fn outcomes_cross_threads() {
    fn assert_send_sync<V: Send + Sync>() {}
    assert_send_sync::<Outcome<u32>>();
    assert_send_sync::<Fault>();
}
