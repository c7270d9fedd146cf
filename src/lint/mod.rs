//! Well-formedness checks for built automata.
//!
//! Linting uses Stillwater's `Validation` type so that a single pass
//! reports every issue instead of stopping at the first one. Lint never
//! changes how an automaton behaves; it only points at things that are
//! likely mistakes in a description, such as states nothing can reach.
//!
//! # Example
//!
//! ```rust
//! use dfa_notation::Dfa;
//! use dfa_notation::lint::{lint, LintBuilder};
//!
//! let dfa = Dfa::from_description("States: a, b\nStart state: a\nAccept states: b");
//! assert!(lint(&dfa).is_failure());
//!
//! let relaxed = LintBuilder::new().require_start().require_accept().build();
//! assert!(relaxed.check(&dfa).is_success());
//! ```

pub mod builder;
pub mod issues;
pub mod rules;

pub use builder::LintBuilder;
pub use issues::LintIssue;
pub use rules::{LintCheck, LintResult, LintRules};

use crate::core::Dfa;

/// Run every built-in check against `dfa`.
pub fn lint(dfa: &Dfa) -> LintResult {
    LintRules::default().check(dfa)
}
