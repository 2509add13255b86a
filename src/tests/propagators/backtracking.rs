#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestCsp;
use crate::propagators::BacktrackingCheck;

#[test]
fn nothing_happens_before_search() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let _ = csp.new_table(&[x], &[&[2]]);

    let propagation = csp.propagate(&BacktrackingCheck, None);

    assert_eq!(propagation.status, Ok(()));
    assert!(propagation.prunings.is_empty());
    csp.assert_domain(x, &[1, 2]);
}

#[test]
fn partially_assigned_constraints_are_not_checked() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let y = csp.new_variable("y", &[1, 2]);
    let _ = csp.new_predicate(&[x, y], |_| false);

    let propagation = csp.assign_and_propagate(&BacktrackingCheck, x, 1);

    assert!(propagation.is_consistent());
    assert!(propagation.prunings.is_empty());
}

#[test]
fn violated_fully_assigned_constraint_is_rejected() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let y = csp.new_variable("y", &[1, 2]);
    let _ = csp.not_equal(x, y);
    let equal = csp.new_predicate(&[x, y], |tuple| tuple[0] == tuple[1]);

    csp.assign(x, 2);
    let propagation = csp.assign_and_propagate(&BacktrackingCheck, y, 1);

    assert_eq!(
        propagation.status,
        Err(Inconsistency::Violated { constraint: equal })
    );
    assert!(propagation.prunings.is_empty());
    csp.assert_domain(x, &[1, 2]);
    csp.assert_domain(y, &[1, 2]);
}

#[test]
fn satisfied_fully_assigned_constraint_is_accepted() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let y = csp.new_variable("y", &[1, 2]);
    let _ = csp.not_equal(x, y);

    csp.assign(x, 2);
    let propagation = csp.assign_and_propagate(&BacktrackingCheck, y, 1);

    assert!(propagation.is_consistent());
}

#[test]
fn only_constraints_on_the_new_variable_are_checked() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let y = csp.new_variable("y", &[1, 2]);
    let z = csp.new_variable("z", &[1, 2]);
    let _ = csp.new_predicate(&[x, y], |_| false);

    csp.assign(x, 1);
    csp.assign(y, 1);
    let propagation = csp.assign_and_propagate(&BacktrackingCheck, z, 1);

    assert!(propagation.is_consistent());
}
