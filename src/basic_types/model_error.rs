use thiserror::Error;

/// Errors raised while building a [`crate::Csp`]. Once construction succeeds the problem is
/// well-formed and propagation can assume it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("variable '{0}' was given an empty domain")]
    EmptyDomain(String),
    #[error("value {value} occurs more than once in the domain of '{variable}'")]
    DuplicateDomainValue { variable: String, value: i32 },
    #[error("constraint '{0}' has an empty scope")]
    EmptyScope(String),
    #[error("variable '{variable}' occurs more than once in the scope of '{constraint}'")]
    DuplicateScopeVariable { constraint: String, variable: String },
    #[error("constraint '{constraint}' refers to variable {index} which does not exist")]
    UnknownVariable { constraint: String, index: usize },
    #[error("constraint '{constraint}' has arity {arity} but was given a tuple of length {length}")]
    TupleArityMismatch {
        constraint: String,
        arity: usize,
        length: usize,
    },
    #[error("constraint '{constraint}' has {scope} variables but its relation has arity {arity}")]
    RelationArityMismatch {
        constraint: String,
        arity: usize,
        scope: usize,
    },
    #[error("table of arity {arity} was given a tuple of length {length}")]
    RaggedTable { arity: usize, length: usize },
    #[error("tuple of '{constraint}' uses value {value} which is not in the domain of '{variable}'")]
    ValueOutsideDomain {
        constraint: String,
        variable: String,
        value: i32,
    },
}
