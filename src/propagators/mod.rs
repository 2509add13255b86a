//! Contains the propagation strategies which can be plugged into the search.
//!
//! A propagator is called once before search starts (without a newly assigned variable) and once
//! after every assignment the search makes. It may prune values from current domains, but it has
//! to report every pruning in the returned [`Propagation`]; the search is the only party which
//! ever puts values back.

mod backtracking;
mod forward_checking;
mod generalised_arc_consistency;

pub use backtracking::BacktrackingCheck;
pub use forward_checking::ForwardChecking;
pub use generalised_arc_consistency::GeneralisedArcConsistency;

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;

use crate::basic_types::Propagation;
use crate::engine::VariableId;
use crate::Csp;

pub trait Propagator {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Propagate the current state of `csp`.
    ///
    /// `newly_assigned` is the variable the search assigned most recently, or `None` when the call
    /// happens before any assignment is made. Every value removed from a current domain during
    /// this call is part of [`Propagation::prunings`], in the order the removals happened, and no
    /// value is removed twice.
    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation;
}

/// The propagation strategy used during search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PropagationStrategy {
    /// Only check constraints whose variables are all assigned.
    #[value(name = "bt")]
    Backtracking,
    /// Prune the domain of the last unassigned variable of a constraint.
    #[value(name = "fc")]
    ForwardChecking,
    /// Maintain generalised arc consistency.
    #[default]
    #[value(name = "gac")]
    GeneralisedArcConsistency,
}

impl PropagationStrategy {
    pub fn propagator(self) -> Box<dyn Propagator> {
        match self {
            PropagationStrategy::Backtracking => Box::new(BacktrackingCheck),
            PropagationStrategy::ForwardChecking => Box::new(ForwardChecking),
            PropagationStrategy::GeneralisedArcConsistency => Box::new(GeneralisedArcConsistency),
        }
    }
}

/// Formats what caused a propagation call, for the log lines propagators emit on entry.
struct Trigger<'a> {
    csp: &'a Csp,
    newly_assigned: Option<VariableId>,
}

impl<'a> Trigger<'a> {
    fn new(csp: &'a Csp, newly_assigned: Option<VariableId>) -> Self {
        Trigger {
            csp,
            newly_assigned,
        }
    }
}

impl Display for Trigger<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.newly_assigned {
            None => write!(f, "before search"),
            Some(variable) => write!(
                f,
                "after {} = {}",
                self.csp.variable_name(variable),
                self.csp
                    .assigned_value(variable)
                    .map_or_else(|| "?".to_owned(), |value| value.to_string())
            ),
        }
    }
}

impl<P: Propagator + ?Sized> Propagator for Box<P> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn propagate(&self, csp: &mut Csp, newly_assigned: Option<VariableId>) -> Propagation {
        self.as_ref().propagate(csp, newly_assigned)
    }
}
