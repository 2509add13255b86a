#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::basic_types::Pruning;
use crate::engine::test_helper::is_forward_consistent;
use crate::engine::test_helper::TestCsp;
use crate::propagators::ForwardChecking;

#[test]
fn parity_with_assigned_variable_prunes_odd_values() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2, 3]);
    let y = csp.new_variable("y", &[1, 2, 3, 4]);
    let _ = csp.new_predicate(&[x, y], |tuple| tuple[0] % 2 == tuple[1] % 2);

    let propagation = csp.assign_and_propagate(&ForwardChecking, x, 2);

    assert_eq!(propagation.status, Ok(()));
    assert_eq!(
        propagation.prunings,
        vec![Pruning::new(y, 1), Pruning::new(y, 3)]
    );
    csp.assert_domain(y, &[2, 4]);
    csp.assert_domain(x, &[1, 2, 3]);
    assert!(is_forward_consistent(&csp));
}

#[test]
fn unary_constraints_are_checked_before_search() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2, 3, 4]);
    let _ = csp.new_predicate(&[x], |tuple| tuple[0] > 2);

    let propagation = csp.propagate(&ForwardChecking, None);

    assert!(propagation.is_consistent());
    assert_eq!(
        propagation.prunings,
        vec![Pruning::new(x, 1), Pruning::new(x, 2)]
    );
    csp.assert_domain(x, &[3, 4]);
}

#[test]
fn constraints_with_many_unassigned_variables_are_ignored() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let y = csp.new_variable("y", &[1, 2]);
    let z = csp.new_variable("z", &[1, 2]);
    let _ = csp.new_predicate(&[x, y, z], |tuple| tuple[0] + tuple[1] + tuple[2] == 6);

    let propagation = csp.assign_and_propagate(&ForwardChecking, x, 1);

    assert!(propagation.is_consistent());
    assert!(propagation.prunings.is_empty());
}

#[test]
fn wipeout_reports_all_prunings_of_the_call() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let y = csp.new_variable("y", &[1, 2, 3]);
    let z = csp.new_variable("z", &[2]);
    let _ = csp.new_predicate(&[x, y], |tuple| tuple[1] > tuple[0]);
    let _ = csp.not_equal(x, z);
    let _ = csp.new_predicate(&[x, y, z], |_| true);

    let propagation = csp.assign_and_propagate(&ForwardChecking, x, 2);

    // `y > x` prunes y down to {3}, then `x != z` wipes out z.
    assert_eq!(propagation.status, Err(Inconsistency::EmptyDomain { variable: z }));
    assert_eq!(
        propagation.prunings,
        vec![Pruning::new(y, 1), Pruning::new(y, 2), Pruning::new(z, 2)]
    );
}

#[test]
fn stops_at_the_first_wipeout() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1]);
    let y = csp.new_variable("y", &[1, 2]);
    let _ = csp.new_predicate(&[x], |_| false);
    let _ = csp.new_predicate(&[y], |tuple| tuple[0] == 2);

    let propagation = csp.propagate(&ForwardChecking, None);

    assert_eq!(propagation.status, Err(Inconsistency::EmptyDomain { variable: x }));
    assert_eq!(propagation.prunings, vec![Pruning::new(x, 1)]);
    csp.assert_domain(y, &[1, 2]);
}

#[test]
fn before_search_checks_constraints_with_one_unassigned_variable() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2, 3]);
    let y = csp.new_variable("y", &[1, 2, 3]);
    let _ = csp.new_predicate(&[x, y], |tuple| tuple[0] < tuple[1]);

    csp.assign(x, 2);
    let propagation = csp.propagate(&ForwardChecking, None);

    assert!(propagation.is_consistent());
    assert_eq!(
        propagation.prunings,
        vec![Pruning::new(y, 1), Pruning::new(y, 2)]
    );
}

#[test]
fn restored_prunings_are_checked_again() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2]);
    let y = csp.new_variable("y", &[1, 2]);
    let _ = csp.not_equal(x, y);

    let first = csp.assign_and_propagate(&ForwardChecking, x, 1);
    assert_eq!(first.prunings, vec![Pruning::new(y, 1)]);

    csp.restore_prunings(&first.prunings);
    csp.unassign(x);

    let second = csp.assign_and_propagate(&ForwardChecking, x, 2);
    assert_eq!(second.prunings, vec![Pruning::new(y, 2)]);
    csp.assert_domain(y, &[1]);
}
