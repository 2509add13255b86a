//! Enforcement of generalised arc consistency (GAC) with a constraint work-list.
//!
//! A value `d` of a variable `v` is generalised arc consistent with a constraint `C` when some
//! tuple drawn from the current domains of the scope of `C`, with `v = d`, satisfies `C`. Values
//! without such a support are pruned. Because a pruning can take away the support of values of
//! other variables, every constraint on a pruned variable is revisited until no constraint is
//! left on the work-list, or until a domain becomes empty.
use std::collections::VecDeque;

use log::debug;
use log::trace;

use super::Propagator;
use super::Trigger;
use crate::basic_types::HashSet;
use crate::basic_types::Inconsistency;
use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Pruning;
use crate::engine::ConstraintId;
use crate::engine::VariableId;
use crate::roster_assert_simple;
use crate::Csp;

#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralisedArcConsistency;

impl Propagator for GeneralisedArcConsistency {
    fn name(&self) -> &str {
        "GAC"
    }

    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        debug!("GAC propagating {}", Trigger::new(csp, newly_assigned));

        let mut prunings = vec![];

        let mut queue = match newly_assigned {
            None => WorkList::from_constraints(csp.all_constraints()),
            Some(variable) => {
                restrict_to_assigned_value(csp, variable, &mut prunings);
                WorkList::from_constraints(csp.constraints_containing(variable).iter().copied())
            }
        };

        let status = enforce(csp, &mut queue, &mut prunings);
        Propagation::new(status, prunings)
    }
}

/// Remove every value other than the assigned one from the domain of `variable`.
fn restrict_to_assigned_value(csp: &mut Csp, variable: VariableId, prunings: &mut Vec<Pruning>) {
    let assigned = csp
        .assigned_value(variable)
        .expect("the newly assigned variable has a value");
    roster_assert_simple!(
        csp.domain(variable).contains(assigned),
        "{} was assigned {assigned} which is not in its current domain",
        csp.variable_name(variable)
    );

    let others: Vec<i32> = csp
        .current_domain(variable)
        .filter(|&value| value != assigned)
        .collect();
    for value in others {
        csp.prune_value(variable, value);
        prunings.push(Pruning::new(variable, value));
    }
}

/// Revise constraints until the work-list is empty or a domain is wiped out. In the latter case
/// the remaining constraints are discarded.
fn enforce(csp: &mut Csp, queue: &mut WorkList, prunings: &mut Vec<Pruning>) -> PropagationStatus {
    while let Some(constraint) = queue.pop() {
        let scope = csp.constraint(constraint).scope().to_vec();

        for variable in scope {
            let values: Vec<i32> = csp.current_domain(variable).collect();

            for value in values {
                if csp.has_support(constraint, variable, value) {
                    continue;
                }

                trace!(
                    "GAC on '{}' prunes {value} from {}",
                    csp.constraint(constraint).name(),
                    csp.variable_name(variable)
                );
                csp.prune_value(variable, value);
                prunings.push(Pruning::new(variable, value));

                if csp.current_domain_size(variable) == 0 {
                    debug!(
                        "GAC on '{}' wiped out the domain of {}",
                        csp.constraint(constraint).name(),
                        csp.variable_name(variable)
                    );
                    queue.clear();
                    return Err(Inconsistency::EmptyDomain { variable });
                }

                queue.extend(csp.constraints_containing(variable).iter().copied());
            }
        }
    }

    Ok(())
}

/// A FIFO queue of constraints in which every constraint occurs at most once.
#[derive(Debug, Default)]
struct WorkList {
    queue: VecDeque<ConstraintId>,
    queued: HashSet<ConstraintId>,
}

impl WorkList {
    fn from_constraints(constraints: impl IntoIterator<Item = ConstraintId>) -> Self {
        let mut work_list = WorkList::default();
        work_list.extend(constraints);
        work_list
    }

    fn extend(&mut self, constraints: impl IntoIterator<Item = ConstraintId>) {
        for constraint in constraints {
            if self.queued.insert(constraint) {
                self.queue.push_back(constraint);
            }
        }
    }

    fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;
        let _ = self.queued.remove(&constraint);
        Some(constraint)
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.queued.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::WorkList;
    use crate::engine::ConstraintId;

    #[test]
    fn work_list_keeps_each_constraint_once() {
        let mut work_list = WorkList::from_constraints([ConstraintId::new(0), ConstraintId::new(1)]);

        work_list.extend([ConstraintId::new(1), ConstraintId::new(2), ConstraintId::new(0)]);

        assert_eq!(work_list.pop(), Some(ConstraintId::new(0)));

        work_list.extend([ConstraintId::new(0)]);

        assert_eq!(work_list.pop(), Some(ConstraintId::new(1)));
        assert_eq!(work_list.pop(), Some(ConstraintId::new(2)));
        assert_eq!(work_list.pop(), Some(ConstraintId::new(0)));
        assert_eq!(work_list.pop(), None);
    }
}
