use outcome_rail::{Fault, Outcome};

#[test]
fn fold_runs_success_branch_only() {
    let mut failure_ran = false;
    let result = Outcome::ok(2).fold(
        |x| x * 10,
        |_| {
            failure_ran = true;
            0
        },
    );

    assert_eq!(result, 20);
    assert!(!failure_ran);
}

#[test]
fn fold_runs_failure_branch_only() {
    let mut success_ran = false;
    let result = Outcome::<i32>::fail(Fault::msg("boom")).fold(
        |x| {
            success_ran = true;
            x
        },
        |fault| fault.to_string().len() as i32,
    );

    assert_eq!(result, 4);
    assert!(!success_ran);
}

#[test]
fn fold_returns_branch_value_verbatim() {
    let rendered = Outcome::ok("payload").fold(|v| v.to_uppercase(), |f| f.to_string());
    assert_eq!(rendered, "PAYLOAD");
}

#[test]
fn always_runs_on_both_states() {
    let mut taps = 0;

    let good = Outcome::ok(1).always(|_| taps += 1);
    let bad = Outcome::<i32>::fail(Fault::msg("boom")).always(|_| taps += 1);

    assert_eq!(taps, 2);
    assert!(good.is_success());
    assert!(bad.is_failure());
}

#[test]
fn always_sees_the_outcome_state() {
    let mut observed_failure = false;
    let _ = Outcome::<i32>::fail(Fault::msg("boom"))
        .always(|outcome| observed_failure = outcome.is_failure());
    assert!(observed_failure);
}

#[test]
fn always_then_replaces_failure_when_told_to() {
    let outcome: Outcome<i32> = Outcome::<i32>::fail(Fault::msg("boom"))
        .always_then(|input| {
            if input.is_failure() {
                Outcome::ok(-1)
            } else {
                input
            }
        });

    assert_eq!(*outcome.value(), -1);
}

#[test]
fn always_then_runs_on_success_too() {
    let outcome = Outcome::ok(3).always_then(|input| input.map(|x| x * 2));
    assert_eq!(*outcome.value(), 6);
}
