#![cfg(any(test, doc))]
//! This module exposes helpers that aid testing of propagators. The [`TestCsp`] allows setting up
//! specific scenarios under which to call a propagator and inspect the resulting domains.
use std::ops::Deref;
use std::ops::DerefMut;

use super::ConstraintId;
use super::Csp;
use super::VariableId;
use crate::basic_types::Propagation;
use crate::propagators::Propagator;

/// A [`Csp`] with shorthands for building and inspecting small test problems.
#[derive(Debug)]
pub(crate) struct TestCsp {
    csp: Csp,
}

impl Default for TestCsp {
    fn default() -> Self {
        TestCsp {
            csp: Csp::new("test"),
        }
    }
}

impl Deref for TestCsp {
    type Target = Csp;

    fn deref(&self) -> &Self::Target {
        &self.csp
    }
}

impl DerefMut for TestCsp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.csp
    }
}

#[allow(unused, reason = "not every helper is used by every test")]
impl TestCsp {
    pub(crate) fn new_variable(&mut self, name: &str, values: &[i32]) -> VariableId {
        self.csp
            .add_variable(name, values.iter().copied())
            .expect("valid test variable")
    }

    pub(crate) fn new_table(&mut self, scope: &[VariableId], tuples: &[&[i32]]) -> ConstraintId {
        let name = format!("table{}", self.csp.num_constraints());
        self.csp
            .add_table_constraint(name, scope, tuples.iter().map(|tuple| tuple.to_vec()))
            .expect("valid test constraint")
    }

    pub(crate) fn new_predicate(
        &mut self,
        scope: &[VariableId],
        predicate: impl Fn(&[i32]) -> bool + 'static,
    ) -> ConstraintId {
        let name = format!("predicate{}", self.csp.num_constraints());
        self.csp
            .add_predicate_constraint(name, scope, predicate)
            .expect("valid test constraint")
    }

    pub(crate) fn not_equal(&mut self, x: VariableId, y: VariableId) -> ConstraintId {
        self.new_predicate(&[x, y], |tuple| tuple[0] != tuple[1])
    }

    pub(crate) fn propagate(
        &mut self,
        propagator: &impl Propagator,
        newly_assigned: Option<VariableId>,
    ) -> Propagation {
        propagator.propagate(&mut self.csp, newly_assigned)
    }

    /// Assign `variable` and propagate the assignment.
    pub(crate) fn assign_and_propagate(
        &mut self,
        propagator: &impl Propagator,
        variable: VariableId,
        value: i32,
    ) -> Propagation {
        self.csp.assign(variable, value);
        self.propagate(propagator, Some(variable))
    }

    pub(crate) fn values(&self, variable: VariableId) -> Vec<i32> {
        self.csp.current_domain(variable).collect()
    }

    pub(crate) fn assert_domain(&self, variable: VariableId, expected: &[i32]) {
        assert_eq!(
            self.values(variable),
            expected,
            "unexpected current domain for {}",
            self.csp.variable_name(variable)
        );
    }
}

/// Whether every value of every variable has a support in every constraint on that variable.
pub(crate) fn is_generalised_arc_consistent(csp: &Csp) -> bool {
    csp.all_constraints().all(|constraint| {
        csp.constraint(constraint).scope().iter().all(|&variable| {
            csp.current_domain(variable)
                .all(|value| csp.has_support(constraint, variable, value))
        })
    })
}

/// Whether every constraint with a single unassigned variable can be satisfied by each value
/// remaining in the domain of that variable.
pub(crate) fn is_forward_consistent(csp: &Csp) -> bool {
    csp.all_constraints().all(|constraint| {
        let unassigned: Vec<VariableId> = csp.unassigned_vars(constraint).collect();
        if unassigned.len() != 1 {
            return true;
        }

        let position = csp
            .constraint(constraint)
            .position_of(unassigned[0])
            .expect("unassigned variable is in scope");
        let mut tuple: Vec<i32> = csp
            .constraint(constraint)
            .scope()
            .iter()
            .map(|&variable| csp.assigned_value(variable).unwrap_or_default())
            .collect();

        csp.current_domain(unassigned[0]).all(|value| {
            tuple[position] = value;
            csp.constraint(constraint).check(&tuple)
        })
    })
}

/// Whether every constraint whose scope is fully assigned is satisfied.
pub(crate) fn assigned_constraints_hold(csp: &Csp) -> bool {
    csp.all_constraints().all(|constraint| {
        csp.assigned_tuple(constraint)
            .map_or(true, |tuple| csp.constraint(constraint).check(&tuple))
    })
}
