//! States of an automaton and their identities.
//!
//! A state is a pure domain value: a name and an accepting flag. It
//! carries no display information. Anything a presentation layer wants to
//! attach to a state (positions, colours) belongs in a side table keyed by
//! [`StateId`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense index of a state within one automaton.
///
/// Ids are handed out in registration order starting at zero and are
/// only meaningful for the automaton that issued them.
///
/// # Example
///
/// ```rust
/// use dfa_notation::core::{Dfa, State};
///
/// let mut dfa = Dfa::new();
/// let q0 = dfa.add_state(State::new("q0"));
/// let q1 = dfa.add_state(State::new("q1"));
///
/// assert_eq!(q0.index(), 0);
/// assert_eq!(q1.index(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named state of a deterministic finite automaton.
///
/// Names compare case-sensitively. Case-insensitive lookup is a concern
/// of the description parser, not of the state itself.
///
/// The accepting flag is set by [`Dfa::add_accept_state`](super::Dfa::add_accept_state),
/// which keeps it consistent with the automaton's accept set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    name: String,
    accepting: bool,
}

impl State {
    /// Create a non-accepting state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accepting: false,
        }
    }

    /// Name as it was declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether reaching this state after consuming the input accepts it.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub(crate) fn mark_accepting(&mut self) {
        self.accepting = true;
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
