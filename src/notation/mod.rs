//! Textual automaton descriptions.
//!
//! A description is a block of lines:
//!
//! ```text
//! States: q0, q1
//! Alphabet: 0, 1
//! Start state: q0
//! Accept states: q1
//! q0, 0 -> q0
//! q0, 1 -> q1
//! ```
//!
//! Parsing is best-effort. Blank lines are ignored, and every other line
//! that cannot be applied is reported as a [`LineWarning`] rather than an
//! error. State names are matched case-insensitively; symbols are single
//! characters, and longer tokens are cut to their first character.

mod parse;
mod warning;
mod write;

pub use parse::{parse, Parsed};
pub use warning::{LineWarning, ParseWarning};
pub use write::write;

use crate::core::Dfa;
use std::convert::Infallible;
use std::str::FromStr;

impl Dfa {
    /// Build an automaton from a description, discarding warnings.
    pub fn from_description(description: &str) -> Self {
        parse(description).automaton
    }
}

impl FromStr for Dfa {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Dfa::from_description(s))
    }
}
