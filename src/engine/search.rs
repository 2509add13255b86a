//! A depth-first backtracking search which delegates all inference to a [`Propagator`].
//!
//! Variables are assigned in the order in which they were added to the [`Csp`] and values are
//! tried in the order of the current domain. After every assignment the propagator is called; the
//! prunings it reports are restored when the search leaves that node, whether the propagation
//! succeeded or not.
use std::time::Instant;

use log::debug;
use log::info;
use log::warn;

use super::termination::TerminationCondition;
use super::VariableId;
use crate::propagators::Propagator;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::roster_assert_advanced;
use crate::statistics::log_statistic;
use crate::Csp;

/// How a subtree of the search ended.
enum Outcome {
    Solved(Solution),
    Exhausted,
    Stopped,
}

#[derive(Debug)]
pub struct BacktrackingSearch<'a, P: ?Sized, T> {
    propagator: &'a P,
    termination: &'a mut T,
    statistics: SearchStatistics,
}

impl<'a, P: Propagator + ?Sized, T: TerminationCondition> BacktrackingSearch<'a, P, T> {
    pub fn new(propagator: &'a P, termination: &'a mut T) -> Self {
        BacktrackingSearch {
            propagator,
            termination,
            statistics: SearchStatistics::default(),
        }
    }

    /// Look for a solution of `csp`. When this returns, the current domains and assignments of
    /// `csp` are the same as when it was called.
    pub fn solve(&mut self, csp: &mut Csp) -> SatisfactionResult {
        let start_time = Instant::now();
        info!(
            "Solving '{}' ({} variables, {} constraints) with {}",
            csp.name(),
            csp.num_variables(),
            csp.num_constraints(),
            self.propagator.name()
        );
        warn_unconstrained_variables(csp);

        let root = self.propagator.propagate(csp, None);
        self.statistics.num_prunings += root.prunings.len() as u64;

        let outcome = match root.status {
            Ok(()) => self.search(csp),
            Err(inconsistency) => {
                debug!("Propagation before search failed: {inconsistency:?}");
                self.statistics.num_failures += 1;
                Outcome::Exhausted
            }
        };

        csp.restore_prunings(&root.prunings);
        let elapsed = start_time.elapsed();
        self.statistics.time_spent_ms += elapsed.as_millis() as u64;
        info!(
            "Search {} after {} decisions and {} failures ({elapsed:?})",
            match outcome {
                Outcome::Solved(_) => "found a solution",
                Outcome::Exhausted => "proved unsatisfiability",
                Outcome::Stopped => "was stopped",
            },
            self.statistics.num_decisions,
            self.statistics.num_failures
        );

        match outcome {
            Outcome::Solved(solution) => {
                roster_assert_advanced!(
                    solution.satisfies(csp),
                    "the search produced an assignment which violates a constraint"
                );
                SatisfactionResult::Satisfiable(solution)
            }
            Outcome::Exhausted => SatisfactionResult::Unsatisfiable,
            Outcome::Stopped => SatisfactionResult::Unknown,
        }
    }

    fn search(&mut self, csp: &mut Csp) -> Outcome {
        if self.termination.should_stop() {
            return Outcome::Stopped;
        }

        let Some(variable) = next_unassigned(csp) else {
            return Outcome::Solved(Solution::from_assignment(csp));
        };

        let values: Vec<i32> = csp.current_domain(variable).collect();
        for value in values {
            csp.assign(variable, value);
            self.statistics.num_decisions += 1;
            self.termination.decision_has_been_made();

            let propagation = self.propagator.propagate(csp, Some(variable));
            self.statistics.num_prunings += propagation.prunings.len() as u64;

            let outcome = if propagation.is_consistent() {
                self.search(csp)
            } else {
                self.statistics.num_failures += 1;
                Outcome::Exhausted
            };

            csp.restore_prunings(&propagation.prunings);
            csp.unassign(variable);

            if !matches!(outcome, Outcome::Exhausted) {
                return outcome;
            }
        }

        Outcome::Exhausted
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn log_statistics(&self) {
        self.statistics.log_statistics()
    }
}

/// A variable outside every constraint can take any value, which usually points at a modelling
/// mistake.
fn warn_unconstrained_variables(csp: &Csp) {
    for variable in csp.all_variables() {
        if csp.constraints_containing(variable).is_empty() {
            warn!(
                "Variable '{}' does not occur in any constraint",
                csp.variable_name(variable)
            );
        }
    }
}

fn next_unassigned(csp: &Csp) -> Option<VariableId> {
    csp.all_variables().find(|&variable| !csp.is_assigned(variable))
}

/// Counters which are updated during the search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStatistics {
    pub num_decisions: u64,
    pub num_failures: u64,
    pub num_prunings: u64,
    pub time_spent_ms: u64,
}

impl SearchStatistics {
    pub fn log_statistics(&self) {
        log_statistic("numberOfDecisions", self.num_decisions);
        log_statistic("numberOfFailures", self.num_failures);
        log_statistic("numberOfPrunings", self.num_prunings);
        log_statistic("timeSpentInSolverInMilliseconds", self.time_spent_ms);
    }
}
