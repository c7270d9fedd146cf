//! Builder API for programmatic automaton construction.
//!
//! The description parser forgives everything; code that assembles an
//! automaton from its own data usually wants the opposite. This module
//! provides a strict fluent builder and the [`dfa!`](crate::dfa) macro on
//! top of it.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::DfaBuilder;
