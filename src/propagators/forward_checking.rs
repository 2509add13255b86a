use log::debug;
use log::trace;

use super::Propagator;
use super::Trigger;
use crate::basic_types::Inconsistency;
use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Pruning;
use crate::engine::ConstraintId;
use crate::engine::VariableId;
use crate::Csp;

/// Forward checking: whenever a constraint has a single unassigned variable left, every value of
/// that variable which cannot complete the assigned values of the others into a satisfying tuple
/// is pruned.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &str {
        "FC"
    }

    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        debug!("FC propagating {}", Trigger::new(csp, newly_assigned));

        let mut prunings = vec![];
        let status = match newly_assigned {
            None => propagate_before_search(csp, &mut prunings),
            Some(variable) => propagate_assignment(csp, variable, &mut prunings),
        };

        Propagation::new(status, prunings)
    }
}

fn propagate_before_search(csp: &mut Csp, prunings: &mut Vec<Pruning>) -> PropagationStatus {
    let constraints: Vec<ConstraintId> = csp.all_constraints().collect();

    for &constraint in &constraints {
        if csp.constraint(constraint).arity() == 1 {
            let variable = csp.constraint(constraint).scope()[0];
            forward_check(csp, constraint, variable, prunings)?;
        }
    }

    for &constraint in &constraints {
        if let Some(variable) = single_unassigned(csp, constraint) {
            forward_check(csp, constraint, variable, prunings)?;
        }
    }

    Ok(())
}

fn propagate_assignment(
    csp: &mut Csp,
    assigned: VariableId,
    prunings: &mut Vec<Pruning>,
) -> PropagationStatus {
    let constraints = csp.constraints_containing(assigned).to_vec();

    for constraint in constraints {
        if let Some(variable) = single_unassigned(csp, constraint) {
            forward_check(csp, constraint, variable, prunings)?;
        }
    }

    Ok(())
}

/// The unassigned variable of `constraint` if it is the only one.
fn single_unassigned(csp: &Csp, constraint: ConstraintId) -> Option<VariableId> {
    let mut unassigned = csp.unassigned_vars(constraint);
    let variable = unassigned.next()?;

    unassigned.next().is_none().then_some(variable)
}

/// Prune every value of `variable` which does not satisfy `constraint` together with the assigned
/// values of the rest of its scope.
fn forward_check(
    csp: &mut Csp,
    constraint: ConstraintId,
    variable: VariableId,
    prunings: &mut Vec<Pruning>,
) -> PropagationStatus {
    let scope = csp.constraint(constraint).scope();
    let position = csp
        .constraint(constraint)
        .position_of(variable)
        .expect("forward checked variable is in the scope");

    let mut tuple: Vec<i32> = scope
        .iter()
        .enumerate()
        .map(|(index, &other)| {
            if index == position {
                0
            } else {
                csp.assigned_value(other)
                    .expect("all other variables of a forward checked constraint are assigned")
            }
        })
        .collect();

    let candidates: Vec<i32> = csp.current_domain(variable).collect();
    for value in candidates {
        tuple[position] = value;

        if !csp.constraint(constraint).check(&tuple) {
            trace!(
                "FC on '{}' prunes {value} from {}",
                csp.constraint(constraint).name(),
                csp.variable_name(variable)
            );
            csp.prune_value(variable, value);
            prunings.push(Pruning::new(variable, value));
        }
    }

    if csp.current_domain_size(variable) == 0 {
        debug!(
            "FC on '{}' wiped out the domain of {}",
            csp.constraint(constraint).name(),
            csp.variable_name(variable)
        );
        return Err(Inconsistency::EmptyDomain { variable });
    }

    Ok(())
}
