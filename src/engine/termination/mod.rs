//! Conditions under which [`crate::BacktrackingSearch`] gives up early. The search polls its
//! condition once per node and reports [`crate::results::SatisfactionResult::Unknown`] when it
//! fires.

mod combinator;
mod decision_budget;
mod indefinite;
mod os_signal;
mod time_budget;

pub use combinator::Combinator;
pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use os_signal::OsSignal;
pub use time_budget::TimeBudget;

/// Determines when the search should stop looking for a solution.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the search assigns a value to a variable.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Combinator;
    use super::DecisionBudget;
    use super::Indefinite;
    use super::TerminationCondition;
    use super::TimeBudget;

    #[test]
    fn combinator_counts_decisions_for_both_conditions() {
        let mut termination = Combinator::new(DecisionBudget::new(3), DecisionBudget::new(1));

        assert!(!termination.should_stop());
        termination.decision_has_been_made();
        assert!(termination.should_stop());
    }

    #[test]
    fn missing_condition_never_stops() {
        let mut termination: Option<DecisionBudget> = None;
        termination.decision_has_been_made();

        assert!(!termination.should_stop());
        assert!(!Indefinite.should_stop());
    }

    #[test]
    fn exhausted_time_budget_stops() {
        let mut termination = TimeBudget::starting_now(Duration::ZERO);

        assert!(termination.should_stop());
    }
}
