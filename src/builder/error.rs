//! Build errors for the strict automaton builder.

use thiserror::Error;

/// Errors that can occur when building an automaton with [`DfaBuilder`](super::DfaBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("State {name:?} is declared more than once")]
    DuplicateState { name: String },

    #[error("Start state {name:?} is not declared. Call .state({name:?}) first")]
    UnknownStartState { name: String },

    #[error("Accept state {name:?} is not declared. Call .state({name:?}) first")]
    UnknownAcceptState { name: String },

    #[error("Transition source {name:?} is not declared")]
    UnknownSource { name: String },

    #[error("Transition target {name:?} is not declared")]
    UnknownTarget { name: String },
}
