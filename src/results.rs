//! The outcomes of a search.
use crate::engine::VariableId;
use crate::Csp;

/// The result of a call to [`crate::BacktrackingSearch::solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A complete assignment which satisfies every constraint.
    Satisfiable(Solution),
    /// The search space was exhausted.
    Unsatisfiable,
    /// The termination condition triggered before the search completed.
    Unknown,
}

/// A value for every variable of a [`Csp`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: Vec<i32>,
}

impl Solution {
    /// Take a snapshot of the assignment of `csp`. Every variable has to be assigned.
    pub(crate) fn from_assignment(csp: &Csp) -> Self {
        let values = csp
            .all_variables()
            .map(|variable| {
                csp.assigned_value(variable)
                    .expect("a solution assigns every variable")
            })
            .collect();

        Solution { values }
    }

    pub fn value(&self, variable: VariableId) -> i32 {
        self.values[variable.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| (VariableId::new(index as u32), value))
    }

    /// Whether every constraint of `csp` is satisfied by this solution.
    pub fn satisfies(&self, csp: &Csp) -> bool {
        csp.all_constraints().all(|constraint| {
            let constraint = csp.constraint(constraint);
            let tuple: Vec<i32> = constraint
                .scope()
                .iter()
                .map(|&variable| self.value(variable))
                .collect();

            constraint.check(&tuple)
        })
    }
}
