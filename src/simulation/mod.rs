//! Acceptance simulation.
//!
//! The simulator walks the transition function over an input string in a
//! single left-to-right pass. It never backtracks and never fails: every
//! problem it meets (no start state, a symbol outside the alphabet, a
//! missing transition) is a rejection.
//!
//! - [`Dfa::accepts`] answers the yes/no question
//! - [`Run`] exposes the walk one symbol at a time
//! - [`Trace`] records a whole walk together with its [`Verdict`]

mod run;
mod trace;

pub use run::{Rejection, Run, Step, Verdict};
pub use trace::Trace;

use crate::core::Dfa;

impl Dfa {
    /// Whether the automaton accepts `input`.
    ///
    /// Empty input is accepted exactly when the start state is accepting.
    /// Without a start state every input is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_notation::Dfa;
    ///
    /// let dfa = Dfa::from_description(
    ///     "States: q0, q1\nAlphabet: 0, 1\nStart state: q0\nAccept states: q1\n\
    ///      q0, 0 -> q0\nq0, 1 -> q1\nq1, 0 -> q1\nq1, 1 -> q1",
    /// );
    ///
    /// assert!(dfa.accepts("01"));
    /// assert!(!dfa.accepts("000"));
    /// assert!(!dfa.accepts("2"));
    /// ```
    pub fn accepts(&self, input: &str) -> bool {
        let mut run = self.run();
        for symbol in input.chars() {
            if let Step::Halted(_) = run.step(symbol) {
                return false;
            }
        }
        run.is_accepting()
    }

    /// Start a step-by-step run from the start state.
    pub fn run(&self) -> Run<'_> {
        Run::new(self)
    }

    /// Run over `input` and record the path taken.
    pub fn trace(&self, input: &str) -> Trace {
        Trace::record(self, input)
    }
}
