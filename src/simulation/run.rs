//! Incremental, one-symbol-at-a-time execution.

use crate::core::{Dfa, StateId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Why an input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("automaton has no start state")]
    NoStartState,

    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    SymbolOutsideAlphabet { position: usize, symbol: char },

    #[error("state {state} has no outgoing transitions (position {position})")]
    NoOutgoingTransitions { position: usize, state: StateId },

    #[error("state {state} has no transition on {symbol:?} (position {position})")]
    MissingTransition {
        position: usize,
        state: StateId,
        symbol: char,
    },

    #[error("input ended in non-accepting state {state}")]
    NotAccepting { state: StateId },
}

/// Final classification of an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Outcome of feeding one symbol to a [`Run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The run followed a transition.
    Moved {
        from: StateId,
        symbol: char,
        to: StateId,
    },

    /// The run is stuck; no further symbol can change that.
    Halted(Rejection),
}

/// A walk through an automaton that exposes its current state.
///
/// [`Dfa::accepts`] is a `Run` fed with the whole input at once. Driving
/// the run by hand turns the batch check into a streaming classifier.
///
/// # Example
///
/// ```rust
/// use dfa_notation::Dfa;
/// use dfa_notation::simulation::Step;
///
/// let dfa = Dfa::from_description(
///     "States: a, b\nAlphabet: x\nStart state: a\nAccept states: b\na, x -> b\nb, x -> a",
/// );
///
/// let mut run = dfa.run();
/// assert!(!run.is_accepting());
/// assert!(matches!(run.step('x'), Step::Moved { .. }));
/// assert!(run.is_accepting());
/// ```
#[derive(Clone, Debug)]
pub struct Run<'a> {
    dfa: &'a Dfa,
    current: Option<StateId>,
    consumed: usize,
    halted: Option<Rejection>,
}

impl<'a> Run<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        let current = dfa.start_state();
        Self {
            dfa,
            current,
            consumed: 0,
            halted: current.is_none().then_some(Rejection::NoStartState),
        }
    }

    /// State the run is in, `None` only when there is no start state.
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Number of symbols consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    /// Whether stopping now would accept.
    pub fn is_accepting(&self) -> bool {
        match (self.halted, self.current) {
            (None, Some(state)) => self.dfa.is_accept_state(state),
            _ => false,
        }
    }

    /// Consume one symbol.
    ///
    /// Alphabet membership is checked before the transition table, so a
    /// symbol outside the alphabet halts the run even if a row happens to
    /// mention it.
    pub fn step(&mut self, symbol: char) -> Step {
        if let Some(rejection) = self.halted {
            return Step::Halted(rejection);
        }
        let Some(from) = self.current else {
            return self.halt(Rejection::NoStartState);
        };
        let position = self.consumed;

        if !self.dfa.alphabet().contains(symbol) {
            return self.halt(Rejection::SymbolOutsideAlphabet { position, symbol });
        }
        if !self.dfa.has_outgoing(from) {
            return self.halt(Rejection::NoOutgoingTransitions {
                position,
                state: from,
            });
        }
        let Some(to) = self.dfa.successor(from, symbol) else {
            return self.halt(Rejection::MissingTransition {
                position,
                state: from,
                symbol,
            });
        };

        self.current = Some(to);
        self.consumed += 1;
        Step::Moved { from, symbol, to }
    }

    /// Consume every symbol of `input`, stopping early once halted.
    pub fn feed(&mut self, input: &str) -> &mut Self {
        for symbol in input.chars() {
            if let Step::Halted(_) = self.step(symbol) {
                break;
            }
        }
        self
    }

    /// Classify the input consumed so far.
    pub fn verdict(&self) -> Verdict {
        if let Some(rejection) = self.halted {
            return Verdict::Rejected(rejection);
        }
        match self.current {
            Some(state) if self.dfa.is_accept_state(state) => Verdict::Accepted,
            Some(state) => Verdict::Rejected(Rejection::NotAccepting { state }),
            None => Verdict::Rejected(Rejection::NoStartState),
        }
    }

    fn halt(&mut self, rejection: Rejection) -> Step {
        trace!(%rejection, "run halted");
        self.halted = Some(rejection);
        Step::Halted(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    fn toggle() -> (Dfa, StateId, StateId) {
        let mut dfa = Dfa::new();
        let off = dfa.add_state(State::new("off"));
        let on = dfa.add_state(State::new("on"));
        dfa.set_start_state(off);
        dfa.add_accept_state(on);
        dfa.add_transition(off, on, 't');
        dfa.add_transition(on, off, 't');
        (dfa, off, on)
    }

    #[test]
    fn run_without_start_is_halted_immediately() {
        let dfa = Dfa::new();
        let mut run = dfa.run();
        assert!(run.is_halted());
        assert_eq!(run.step('a'), Step::Halted(Rejection::NoStartState));
        assert_eq!(run.verdict(), Verdict::Rejected(Rejection::NoStartState));
    }

    #[test]
    fn step_moves_along_transitions() {
        let (dfa, off, on) = toggle();
        let mut run = dfa.run();
        assert_eq!(run.current(), Some(off));
        assert_eq!(
            run.step('t'),
            Step::Moved {
                from: off,
                symbol: 't',
                to: on
            }
        );
        assert_eq!(run.consumed(), 1);
        assert!(run.is_accepting());
    }

    #[test]
    fn unknown_symbol_halts_with_position() {
        let (dfa, _, _) = toggle();
        let mut run = dfa.run();
        run.feed("tx");
        assert_eq!(
            run.verdict(),
            Verdict::Rejected(Rejection::SymbolOutsideAlphabet {
                position: 1,
                symbol: 'x'
            })
        );
    }

    #[test]
    fn halted_run_stays_halted() {
        let (dfa, _, _) = toggle();
        let mut run = dfa.run();
        run.step('x');
        assert!(run.is_halted());
        assert!(matches!(run.step('t'), Step::Halted(_)));
        assert_eq!(run.consumed(), 0);
        assert!(!run.is_accepting());
    }

    #[test]
    fn state_without_row_entries_reports_no_outgoing() {
        let mut dfa = Dfa::new();
        let a = dfa.add_state(State::new("a"));
        let dead = dfa.add_state(State::new("dead"));
        dfa.set_start_state(a);
        dfa.add_transition(a, dead, '0');
        dfa.add_symbol('1');

        let mut run = dfa.run();
        run.feed("00");
        assert_eq!(
            run.verdict(),
            Verdict::Rejected(Rejection::NoOutgoingTransitions {
                position: 1,
                state: dead
            })
        );
    }

    #[test]
    fn missing_column_reports_missing_transition() {
        let mut dfa = Dfa::new();
        let a = dfa.add_state(State::new("a"));
        dfa.set_start_state(a);
        dfa.add_transition(a, a, '0');
        dfa.add_symbol('1');

        let mut run = dfa.run();
        run.feed("01");
        assert_eq!(
            run.verdict(),
            Verdict::Rejected(Rejection::MissingTransition {
                position: 1,
                state: a,
                symbol: '1'
            })
        );
    }

    #[test]
    fn exhausted_input_in_plain_state_is_not_accepting() {
        let (dfa, off, _) = toggle();
        let mut run = dfa.run();
        run.feed("tt");
        assert_eq!(
            run.verdict(),
            Verdict::Rejected(Rejection::NotAccepting { state: off })
        );
    }

    #[test]
    fn rejection_messages_are_readable() {
        let rejection = Rejection::SymbolOutsideAlphabet {
            position: 2,
            symbol: 'z',
        };
        assert_eq!(
            rejection.to_string(),
            "symbol 'z' at position 2 is not in the alphabet"
        );
    }
}
