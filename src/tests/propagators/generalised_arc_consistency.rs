#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::basic_types::Pruning;
use crate::engine::test_helper::is_generalised_arc_consistent;
use crate::engine::test_helper::TestCsp;
use crate::propagators::GeneralisedArcConsistency;

#[test]
fn arc_consistent_problem_is_left_untouched() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[0, 1]);
    let y = csp.new_variable("y", &[0, 1]);
    let _ = csp.new_table(&[x, y], &[&[0, 0], &[0, 1], &[1, 0]]);

    let propagation = csp.propagate(&GeneralisedArcConsistency, None);

    assert_eq!(propagation.status, Ok(()));
    assert!(propagation.prunings.is_empty());
    csp.assert_domain(x, &[0, 1]);
    csp.assert_domain(y, &[0, 1]);
}

#[test]
fn forced_value_propagates_into_wipeout() {
    let mut csp = TestCsp::default();
    let a = csp.new_variable("a", &[1, 2]);
    let b = csp.new_variable("b", &[1, 2]);
    let c = csp.new_variable("c", &[2]);
    let _ = csp.not_equal(a, c);
    let _ = csp.not_equal(b, c);
    let _ = csp.not_equal(a, b);

    let propagation = csp.propagate(&GeneralisedArcConsistency, None);

    assert_eq!(
        propagation.status,
        Err(Inconsistency::EmptyDomain { variable: a })
    );
    assert_eq!(
        propagation.prunings,
        vec![Pruning::new(a, 2), Pruning::new(b, 2), Pruning::new(a, 1)]
    );
    csp.assert_domain(a, &[]);
    csp.assert_domain(b, &[1]);
}

#[test]
fn pruning_is_propagated_along_a_chain() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2, 3]);
    let y = csp.new_variable("y", &[1, 2, 3]);
    let z = csp.new_variable("z", &[1, 2, 3]);
    let _ = csp.new_predicate(&[y, z], |tuple| tuple[0] < tuple[1]);
    let _ = csp.new_predicate(&[x, y], |tuple| tuple[0] < tuple[1]);

    let propagation = csp.propagate(&GeneralisedArcConsistency, None);

    assert!(propagation.is_consistent());
    csp.assert_domain(x, &[1]);
    csp.assert_domain(y, &[2]);
    csp.assert_domain(z, &[3]);
    assert_eq!(propagation.prunings.len(), 6);
    assert!(is_generalised_arc_consistent(&csp));
}

#[test]
fn assignment_restricts_domain_to_assigned_value() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2, 3]);
    let y = csp.new_variable("y", &[1, 2, 3]);
    let _ = csp.new_predicate(&[x, y], |tuple| tuple[0] < tuple[1]);

    let root = csp.propagate(&GeneralisedArcConsistency, None);
    assert_eq!(root.prunings, vec![Pruning::new(x, 3), Pruning::new(y, 1)]);

    let propagation = csp.assign_and_propagate(&GeneralisedArcConsistency, x, 2);

    assert!(propagation.is_consistent());
    assert_eq!(
        propagation.prunings,
        vec![Pruning::new(x, 1), Pruning::new(y, 2)]
    );
    csp.assert_domain(x, &[2]);
    csp.assert_domain(y, &[3]);
}

#[test]
fn table_constraints_use_current_domains_for_support() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[0, 1, 2]);
    let y = csp.new_variable("y", &[0, 1, 2]);
    let z = csp.new_variable("z", &[0, 1]);
    let _ = csp.new_table(&[x, y, z], &[&[0, 1, 0], &[1, 2, 1], &[2, 0, 1]]);
    let _ = csp.new_table(&[z], &[&[0]]);

    let propagation = csp.propagate(&GeneralisedArcConsistency, None);

    assert!(propagation.is_consistent());
    csp.assert_domain(x, &[0]);
    csp.assert_domain(y, &[1]);
    csp.assert_domain(z, &[0]);
    assert!(is_generalised_arc_consistent(&csp));
}

#[test]
fn failure_keeps_earlier_prunings_of_the_assigned_variable() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1, 2, 3]);
    let y = csp.new_variable("y", &[1, 2]);
    let z = csp.new_variable("z", &[1, 2]);
    let _ = csp.new_predicate(&[x], |tuple| tuple[0] != 3);
    let _ = csp.not_equal(x, y);
    let _ = csp.not_equal(x, z);
    let _ = csp.not_equal(y, z);

    let root = csp.propagate(&GeneralisedArcConsistency, None);
    assert_eq!(root.prunings, vec![Pruning::new(x, 3)]);

    let propagation = csp.assign_and_propagate(&GeneralisedArcConsistency, x, 1);

    assert_eq!(
        propagation.status,
        Err(Inconsistency::EmptyDomain { variable: y })
    );
    assert_eq!(
        propagation.prunings,
        vec![
            Pruning::new(x, 2),
            Pruning::new(y, 1),
            Pruning::new(z, 1),
            Pruning::new(y, 2)
        ]
    );

    csp.restore_prunings(&propagation.prunings);
    csp.unassign(x);
    csp.assert_domain(x, &[1, 2]);
    csp.assert_domain(y, &[1, 2]);
    csp.assert_domain(z, &[1, 2]);
}

#[test]
fn wipeout_discards_remaining_work() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable("x", &[1]);
    let y = csp.new_variable("y", &[1, 2]);
    let z = csp.new_variable("z", &[1, 2]);
    let _ = csp.new_predicate(&[x], |_| false);
    let _ = csp.new_predicate(&[y, z], |tuple| tuple[0] > tuple[1]);

    let propagation = csp.propagate(&GeneralisedArcConsistency, None);

    assert_eq!(
        propagation.status,
        Err(Inconsistency::EmptyDomain { variable: x })
    );
    assert_eq!(propagation.prunings, vec![Pruning::new(x, 1)]);
    csp.assert_domain(y, &[1, 2]);
    csp.assert_domain(z, &[1, 2]);
}
