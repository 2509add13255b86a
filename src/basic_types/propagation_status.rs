use super::Pruning;
use crate::engine::ConstraintId;
use crate::engine::VariableId;

/// The result of invoking a propagator without the prunings it made. Either the current partial
/// assignment may be extended, or the propagator identified a dead end.
pub type PropagationStatus = Result<(), Inconsistency>;

/// The reason a propagator rejected the current partial assignment. Both variants mean the same
/// thing to the search: the branch has to be abandoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// Pruning removed the last value from the domain of `variable`.
    EmptyDomain { variable: VariableId },
    /// All variables of `constraint` are assigned and the assigned values do not satisfy it.
    Violated { constraint: ConstraintId },
}

/// What a single propagator call hands back to the search.
///
/// The prunings are reported regardless of the status: on a dead end they have to be restored
/// before the next alternative is tried, on success they have to be restored once the branch is
/// abandoned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Propagation {
    pub status: PropagationStatus,
    pub prunings: Vec<Pruning>,
}

impl Propagation {
    pub fn new(status: PropagationStatus, prunings: Vec<Pruning>) -> Self {
        Propagation { status, prunings }
    }

    pub fn is_consistent(&self) -> bool {
        self.status.is_ok()
    }
}
