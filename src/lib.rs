//! A constraint satisfaction solver built around interchangeable propagation strategies.
//!
//! A problem is described as a [`Csp`]: variables with finite integer domains and constraints over
//! ordered scopes of those variables. The [`BacktrackingSearch`] assigns variables one at a time
//! and, after every assignment, asks a [`propagators::Propagator`] to prune the current domains:
//!
//! - [`propagators::BacktrackingCheck`] only rejects fully assigned, violated constraints;
//! - [`propagators::ForwardChecking`] prunes the last unassigned variable of a constraint;
//! - [`propagators::GeneralisedArcConsistency`] maintains generalised arc consistency.
//!
//! Every pruning is reported back to the search, which restores it when it backtracks.
//!
//! ```
//! use roster_csp::engine::termination::Indefinite;
//! use roster_csp::propagators::GeneralisedArcConsistency;
//! use roster_csp::results::SatisfactionResult;
//! use roster_csp::BacktrackingSearch;
//! use roster_csp::Csp;
//!
//! let mut csp = Csp::new("shifts");
//! let morning = csp.add_variable("morning", [1, 2]).unwrap();
//! let evening = csp.add_variable("evening", [2]).unwrap();
//! let _ = csp
//!     .add_predicate_constraint("different staff", [morning, evening], |t: &[i32]| t[0] != t[1])
//!     .unwrap();
//!
//! let mut termination = Indefinite;
//! let mut search = BacktrackingSearch::new(&GeneralisedArcConsistency, &mut termination);
//! match search.solve(&mut csp) {
//!     SatisfactionResult::Satisfiable(solution) => assert_eq!(solution.value(morning), 1),
//!     _ => unreachable!(),
//! }
//! ```

pub mod asserts;
pub mod basic_types;
pub mod engine;
pub mod propagators;
pub mod results;
pub mod runner;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use engine::BacktrackingSearch;
pub use engine::Csp;
