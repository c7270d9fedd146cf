//! Recorded runs.

use super::run::{Run, Step, Verdict};
use crate::core::{Dfa, StateId, Transition};
use serde::{Deserialize, Serialize};

/// Everything a run did on one input.
///
/// A trace is a plain value: it does not borrow the automaton it was
/// taken from, so it can be stored, serialized or compared later.
///
/// # Example
///
/// ```rust
/// use dfa_notation::Dfa;
///
/// let dfa = Dfa::from_description(
///     "States: q0, q1\nStart state: q0\nAccept states: q1\nq0, 1 -> q1\nq1, 1 -> q1",
/// );
///
/// let trace = dfa.trace("11");
/// assert!(trace.is_accepted());
/// assert_eq!(trace.path().len(), 3); // q0 -> q1 -> q1
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    start: Option<StateId>,
    steps: Vec<Transition>,
    verdict: Verdict,
}

impl Trace {
    /// Run `dfa` over `input`, recording each transition taken.
    pub fn record(dfa: &Dfa, input: &str) -> Self {
        let mut run = Run::new(dfa);
        let start = run.current();
        let mut steps = Vec::new();

        for symbol in input.chars() {
            match run.step(symbol) {
                Step::Moved { from, symbol, to } => steps.push(Transition { from, symbol, to }),
                Step::Halted(_) => break,
            }
        }

        Self {
            start,
            steps,
            verdict: run.verdict(),
        }
    }

    /// Transitions taken, in order.
    pub fn steps(&self) -> &[Transition] {
        &self.steps
    }

    /// States visited: the start state followed by each destination.
    ///
    /// Empty when the automaton has no start state.
    pub fn path(&self) -> Vec<StateId> {
        self.start
            .into_iter()
            .chain(self.steps.iter().map(|t| t.to))
            .collect()
    }

    /// State the run ended in, whether or not it accepted.
    pub fn final_state(&self) -> Option<StateId> {
        self.steps.last().map(|t| t.to).or(self.start)
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}
