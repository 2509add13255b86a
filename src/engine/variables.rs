use std::fmt::Display;
use std::fmt::Formatter;

/// A handle to a variable of a [`crate::Csp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId {
    pub(crate) id: u32,
}

impl VariableId {
    pub(crate) fn new(id: u32) -> Self {
        VariableId { id }
    }

    pub(crate) fn index(self) -> usize {
        self.id as usize
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

/// A handle to a constraint of a [`crate::Csp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId {
    pub(crate) id: u32,
}

impl ConstraintId {
    pub(crate) fn new(id: u32) -> Self {
        ConstraintId { id }
    }

    pub(crate) fn index(self) -> usize {
        self.id as usize
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}
