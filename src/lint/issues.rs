//! Lint findings.

use crate::core::StateId;
use thiserror::Error;

/// A well-formedness problem found in a built automaton.
///
/// Issues are observations, not failures: an automaton with issues still
/// simulates exactly as described.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LintIssue {
    #[error("No start state is set; every input is rejected")]
    NoStartState,

    #[error("No accept states; every input is rejected")]
    NoAcceptStates,

    #[error("State {name:?} ({state}) is unreachable from the start state")]
    UnreachableState { state: StateId, name: String },

    #[error("State {name:?} ({state}) has no transition on {missing:?}")]
    IncompleteState {
        state: StateId,
        name: String,
        missing: Vec<char>,
    },

    #[error("States {first} and {second} share the name {name:?} (ignoring case)")]
    DuplicateName {
        name: String,
        first: StateId,
        second: StateId,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
