//! Condition evaluation
//!
//! Reduces a sub-execution's condition history to a single state. A `False`
//! anywhere in the sequence wins over any `True`; an empty or all-`Unknown`
//! sequence is still pending.

use crate::pipeline::{Condition, ConditionStatus};

use super::CommitStatusState;

/// Reduce an ordered sequence of tri-state values to a commit status state.
pub fn reduce<I>(statuses: I) -> CommitStatusState
where
    I: IntoIterator<Item = ConditionStatus>,
{
    statuses
        .into_iter()
        .fold(CommitStatusState::Pending, |acc, status| match (acc, status) {
            (CommitStatusState::Failure, _) | (_, ConditionStatus::False) => {
                CommitStatusState::Failure
            }
            (_, ConditionStatus::True) => CommitStatusState::Success,
            (acc, ConditionStatus::Unknown) => acc,
        })
}

/// Evaluate a condition list
pub fn evaluate(conditions: &[Condition]) -> CommitStatusState {
    let state = reduce(conditions.iter().map(|c| c.status));
    tracing::trace!("Reduced {} condition(s) to {}", conditions.len(), state);
    state
}

/// The condition that decided the state: the first `False`, else the first
/// `True`, else none.
pub fn decisive(conditions: &[Condition]) -> Option<&Condition> {
    conditions
        .iter()
        .find(|c| c.status == ConditionStatus::False)
        .or_else(|| conditions.iter().find(|c| c.status == ConditionStatus::True))
}
