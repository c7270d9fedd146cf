//! Transition records.

use super::state::StateId;
use serde::{Deserialize, Serialize};

/// One edge of the transition function.
///
/// Produced when enumerating an automaton's transitions; the automaton
/// itself stores them in a dense table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Source state
    pub from: StateId,
    /// Symbol read on this edge
    pub symbol: char,
    /// Destination state
    pub to: StateId,
}
