//! Core automaton model.
//!
//! This module contains the data model of a deterministic finite automaton:
//! - [`State`] entities identified by dense [`StateId`]s
//! - the [`Alphabet`] of single-character symbols
//! - the [`Dfa`] aggregate with its dense transition table
//!
//! Nothing in here performs I/O or fails loudly. Mutations that refer to
//! unknown states are silently ignored.

mod alphabet;
mod automaton;
mod state;
mod transition;

pub use alphabet::Alphabet;
pub use automaton::Dfa;
pub use state::{State, StateId};
pub use transition::Transition;
