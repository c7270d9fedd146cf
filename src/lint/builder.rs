//! Builder API for choosing lint checks.

use crate::core::Dfa;
use crate::lint::issues::LintIssue;
use crate::lint::rules::{LintCheck, LintResult, LintRules};
use stillwater::validation::Validation;

/// Builder for creating lint rules.
///
/// Starts with every built-in check disabled; [`LintRules::default`]
/// enables all of them.
#[derive(Default)]
pub struct LintBuilder {
    require_start: bool,
    require_accept: bool,
    reachability: bool,
    completeness: bool,
    distinct_names: bool,
    custom_checks: Vec<LintCheck>,
}

impl LintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a missing start state
    pub fn require_start(mut self) -> Self {
        self.require_start = true;
        self
    }

    /// Report an empty accept set
    pub fn require_accept(mut self) -> Self {
        self.require_accept = true;
        self
    }

    /// Report states unreachable from the start state
    pub fn reachability(mut self) -> Self {
        self.reachability = true;
        self
    }

    /// Report states lacking a transition for some alphabet symbol
    pub fn completeness(mut self) -> Self {
        self.completeness = true;
        self
    }

    /// Report names that only differ by case
    pub fn distinct_names(mut self) -> Self {
        self.distinct_names = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Dfa) -> LintResult + Send + Sync + 'static,
    {
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Dfa) -> bool + Send + Sync + 'static,
    {
        let check = move |dfa: &Dfa| {
            if predicate(dfa) {
                Validation::success(())
            } else {
                Validation::fail(LintIssue::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Build the lint rules
    pub fn build(self) -> LintRules {
        LintRules {
            require_start: self.require_start,
            require_accept: self.require_accept,
            reachability: self.reachability,
            completeness: self.completeness,
            distinct_names: self.distinct_names,
            custom_checks: self.custom_checks,
        }
    }
}
