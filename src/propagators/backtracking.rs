use log::debug;

use super::Propagator;
use super::Trigger;
use crate::basic_types::Inconsistency;
use crate::basic_types::Propagation;
use crate::engine::VariableId;
use crate::Csp;

/// Plain backtracking: no values are pruned, a branch is only rejected once a constraint on the
/// newly assigned variable is fully assigned and violated.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingCheck;

impl Propagator for BacktrackingCheck {
    fn name(&self) -> &str {
        "BT"
    }

    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        debug!("BT propagating {}", Trigger::new(csp, newly_assigned));

        let Some(variable) = newly_assigned else {
            return Propagation::new(Ok(()), vec![]);
        };

        for &constraint in csp.constraints_containing(variable) {
            let Some(tuple) = csp.assigned_tuple(constraint) else {
                continue;
            };

            if !csp.constraint(constraint).check(&tuple) {
                debug!(
                    "'{}' is violated by {tuple:?}",
                    csp.constraint(constraint).name()
                );
                return Propagation::new(Err(Inconsistency::Violated { constraint }), vec![]);
            }
        }

        Propagation::new(Ok(()), vec![])
    }
}
