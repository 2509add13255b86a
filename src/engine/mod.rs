pub(crate) mod constraint;
pub(crate) mod csp;
pub(crate) mod domain;
pub(crate) mod relation;
pub(crate) mod search;
pub mod termination;
pub(crate) mod test_helper;
mod variables;

pub use constraint::Constraint;
pub use csp::Csp;
pub use domain::Domain;
pub use relation::PredicateRelation;
pub use relation::Relation;
pub use relation::TableRelation;
pub use search::BacktrackingSearch;
pub use search::SearchStatistics;
pub use variables::ConstraintId;
pub use variables::VariableId;
