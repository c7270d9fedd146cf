//! dfa-notation: deterministic finite automata from a textual notation
//!
//! A description such as
//!
//! ```text
//! States: q0, q1
//! Alphabet: 0, 1
//! Start state: q0
//! Accept states: q1
//! q0, 0 -> q0
//! q0, 1 -> q1
//! q1, 0 -> q1
//! q1, 1 -> q1
//! ```
//!
//! is parsed into a [`Dfa`], which can then decide whether input strings
//! are accepted.
//!
//! # Core Concepts
//!
//! - **Model** ([`core`]): states, alphabet, a dense transition table,
//!   start state and accept set
//! - **Notation** ([`notation`]): best-effort parsing that never fails and
//!   reports skipped lines as warnings
//! - **Simulation** ([`simulation`]): single-pass acceptance, step-by-step
//!   runs and recorded traces
//! - **Builder**, **lint** and **snapshot** modules for strict
//!   construction, well-formedness checks and persistence
//!
//! # Example
//!
//! ```rust
//! use dfa_notation::Dfa;
//!
//! let dfa = Dfa::from_description(
//!     "States: q0, q1\n\
//!      Alphabet: 0, 1\n\
//!      Start state: q0\n\
//!      Accept states: q1\n\
//!      q0, 0 -> q0\n\
//!      q0, 1 -> q1\n\
//!      q1, 0 -> q1\n\
//!      q1, 1 -> q1",
//! );
//!
//! assert!(dfa.accepts("10"));
//! assert!(!dfa.accepts("000"));
//! assert!(!dfa.accepts("2"));
//! ```

pub mod builder;
pub mod core;
pub mod lint;
pub mod notation;
pub mod simulation;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{BuildError, DfaBuilder};
pub use crate::core::{Alphabet, Dfa, State, StateId, Transition};
pub use crate::notation::{parse, LineWarning, ParseWarning, Parsed};
pub use crate::simulation::{Rejection, Run, Step, Trace, Verdict};
