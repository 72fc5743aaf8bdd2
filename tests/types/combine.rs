use outcome_rail::{AggregateFault, Fault, Outcome};

#[test]
fn both_failures_aggregate_in_operand_order() {
    let left = Fault::msg("left");
    let right = Fault::msg("right");

    let merged = Outcome::<i32>::fail(left.clone()).combine(Outcome::fail(right.clone()));

    let aggregate = merged.fault().downcast_ref::<AggregateFault>().unwrap();
    assert_eq!(aggregate.len(), 2);
    assert!(aggregate.faults()[0].same_as(&left));
    assert!(aggregate.faults()[1].same_as(&right));
}

#[test]
fn lone_left_failure_propagates_unwrapped() {
    let fault = Fault::msg("left");
    let merged = Outcome::<i32>::fail(fault.clone()).combine(Outcome::ok(1));

    assert!(merged.fault().same_as(&fault));
    assert!(merged.fault().downcast_ref::<AggregateFault>().is_none());
}

#[test]
fn lone_right_failure_propagates_unwrapped() {
    let fault = Fault::msg("right");
    let merged = Outcome::ok(1).combine(Outcome::<i32>::fail(fault.clone()));

    assert!(merged.fault().same_as(&fault));
    assert!(merged.fault().downcast_ref::<AggregateFault>().is_none());
}

#[test]
fn both_successes_keep_left_value() {
    let merged = Outcome::ok(1).combine(Outcome::ok(2));
    assert_eq!(*merged.value(), 1);
}

#[test]
fn repeated_merging_flattens_aggregates() {
    let merged = Outcome::<i32>::fail(Fault::msg("a"))
        .combine(Outcome::fail(Fault::msg("b")))
        .combine(Outcome::fail(Fault::msg("c")));

    let aggregate = merged.fault().downcast_ref::<AggregateFault>().unwrap();
    assert_eq!(aggregate.len(), 3);
    assert_eq!(aggregate.faults()[0].to_string(), "a");
    assert_eq!(aggregate.faults()[2].to_string(), "c");
}

#[test]
fn combine_unit_keeps_carried_value() {
    let merged = Outcome::ok(5).combine_unit(Outcome::begin());
    assert_eq!(*merged.value(), 5);
}

#[test]
fn combine_unit_right_failure_wins() {
    let fault = Fault::msg("late check failed");
    let merged = Outcome::ok(5).combine_unit(Outcome::fail(fault.clone()));
    assert!(merged.fault().same_as(&fault));
}

#[test]
fn combine_value_adopts_carried_value() {
    let merged = Outcome::begin().combine_value(Outcome::ok(3));
    assert_eq!(*merged.value(), 3);
}

#[test]
fn combine_value_left_failure_wins() {
    let fault = Fault::msg("precondition failed");
    let merged = Outcome::fail(fault.clone()).combine_value(Outcome::ok(3));
    assert!(merged.fault().same_as(&fault));
}
