use outcome_rail::convert::{collect_faults, combine_all, outcome_to_result, result_to_outcome};
use outcome_rail::{AggregateFault, Fault, Outcome};

#[test]
fn result_to_outcome_lifts_both_sides() {
    assert!(result_to_outcome("3".parse::<u32>()).is_success());
    assert!(result_to_outcome("x".parse::<u32>()).is_failure());
}

#[test]
fn outcome_to_result_flattens() {
    assert_eq!(outcome_to_result(Outcome::ok(3)).unwrap(), 3);

    let fault = Fault::msg("boom");
    let err = outcome_to_result(Outcome::<u32>::fail(fault.clone())).unwrap_err();
    assert!(err.same_as(&fault));
}

#[test]
fn collect_faults_of_nothing_is_success() {
    assert!(collect_faults([]).is_success());
}

#[test]
fn collect_faults_of_one_stays_unwrapped() {
    let fault = Fault::msg("only");
    let outcome = collect_faults([fault.clone()]);

    assert!(outcome.fault().same_as(&fault));
    assert!(outcome.fault().downcast_ref::<AggregateFault>().is_none());
}

#[test]
fn collect_faults_preserves_order() {
    let outcome = collect_faults([Fault::msg("a"), Fault::msg("b"), Fault::msg("c")]);
    let aggregate = outcome.fault().downcast_ref::<AggregateFault>().unwrap();

    assert_eq!(aggregate.len(), 3);
    assert_eq!(aggregate.faults()[0].to_string(), "a");
    assert_eq!(aggregate.faults()[2].to_string(), "c");
}

#[test]
fn combine_all_of_nothing_is_success() {
    assert!(combine_all([]).is_success());
}

#[test]
fn combine_all_merges_every_fault() {
    let merged = combine_all([
        Outcome::begin(),
        Outcome::fail(Fault::msg("first")),
        Outcome::begin(),
        Outcome::fail(Fault::msg("second")),
    ]);

    let aggregate = merged.fault().downcast_ref::<AggregateFault>().unwrap();
    assert_eq!(aggregate.len(), 2);
    assert_eq!(aggregate.faults()[0].to_string(), "first");
    assert_eq!(aggregate.faults()[1].to_string(), "second");
}

#[test]
fn combine_all_of_successes_is_success() {
    assert!(combine_all([Outcome::begin(), Outcome::begin()]).is_success());
}
