use super::relation::Relation;
use super::variables::VariableId;

/// A constraint over an ordered scope of distinct variables. Immutable once added to a
/// [`crate::Csp`].
#[derive(Debug)]
pub struct Constraint {
    name: String,
    scope: Box<[VariableId]>,
    relation: Box<dyn Relation>,
}

impl Constraint {
    pub(crate) fn new(name: String, scope: Box<[VariableId]>, relation: Box<dyn Relation>) -> Self {
        Constraint {
            name,
            scope,
            relation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// The position of `variable` in the scope, if it is part of it.
    pub fn position_of(&self, variable: VariableId) -> Option<usize> {
        self.scope.iter().position(|&other| other == variable)
    }

    /// Whether the value tuple (in scope order) satisfies the constraint.
    pub fn check(&self, tuple: &[i32]) -> bool {
        self.relation.check(tuple)
    }

    pub(crate) fn relation(&self) -> &dyn Relation {
        self.relation.as_ref()
    }
}
