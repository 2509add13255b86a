use std::fmt::Display;
use std::fmt::Formatter;

use crate::engine::VariableId;

/// The removal of a single value from the current domain of a variable.
///
/// Propagators report every removal they make so that the search can re-insert the value when the
/// branch which caused the removal is abandoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: VariableId,
    pub value: i32,
}

impl Pruning {
    pub fn new(variable: VariableId, value: i32) -> Self {
        Pruning { variable, value }
    }
}

impl Display for Pruning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} != {}]", self.variable, self.value)
    }
}
