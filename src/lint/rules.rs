//! Lint rules using Validation.

use crate::core::{Dfa, StateId};
use crate::lint::issues::LintIssue;
use std::collections::{HashMap, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of linting: success, or every issue that was found.
pub type LintResult = Validation<(), NonEmptyVec<LintIssue>>;

/// Type alias for custom lint check functions
pub type LintCheck = Box<dyn Fn(&Dfa) -> LintResult + Send + Sync>;

/// Set of checks to run against an automaton.
/// Uses Validation to accumulate ALL issues.
pub struct LintRules {
    pub(crate) require_start: bool,
    pub(crate) require_accept: bool,
    pub(crate) reachability: bool,
    pub(crate) completeness: bool,
    pub(crate) distinct_names: bool,
    pub(crate) custom_checks: Vec<LintCheck>,
}

impl Default for LintRules {
    /// Every built-in check, no custom checks.
    fn default() -> Self {
        Self {
            require_start: true,
            require_accept: true,
            reachability: true,
            completeness: true,
            distinct_names: true,
            custom_checks: Vec::new(),
        }
    }
}

impl LintRules {
    /// Run all enabled checks, accumulating ALL issues.
    /// Returns Validation::Success(()) if nothing was found.
    pub fn check(&self, dfa: &Dfa) -> LintResult {
        let mut issues = Vec::new();

        if self.require_start && dfa.start_state().is_none() {
            issues.push(LintIssue::NoStartState);
        }
        if self.require_accept && dfa.accept_states().is_empty() {
            issues.push(LintIssue::NoAcceptStates);
        }
        if self.reachability {
            issues.extend(unreachable_states(dfa));
        }
        if self.completeness {
            issues.extend(incomplete_states(dfa));
        }
        if self.distinct_names {
            issues.extend(duplicate_names(dfa));
        }

        let mut checks: Vec<LintResult> = issues.into_iter().map(Validation::fail).collect();
        for check_fn in &self.custom_checks {
            checks.push(check_fn(dfa));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// States not reachable from the start state. Nothing is reported when
/// there is no start state.
fn unreachable_states(dfa: &Dfa) -> Vec<LintIssue> {
    let Some(start) = dfa.start_state() else {
        return Vec::new();
    };

    let mut seen = vec![false; dfa.state_count()];
    let mut queue = VecDeque::from([start]);
    seen[start.index()] = true;
    while let Some(state) = queue.pop_front() {
        for (_, next) in dfa.outgoing(state) {
            if !seen[next.index()] {
                seen[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    dfa.states()
        .filter(|(id, _)| !seen[id.index()])
        .map(|(state, s)| LintIssue::UnreachableState {
            state,
            name: s.name().to_string(),
        })
        .collect()
}

fn incomplete_states(dfa: &Dfa) -> Vec<LintIssue> {
    dfa.states()
        .filter_map(|(state, s)| {
            let missing: Vec<char> = dfa
                .alphabet()
                .symbols()
                .filter(|&symbol| dfa.successor(state, symbol).is_none())
                .collect();
            (!missing.is_empty()).then(|| LintIssue::IncompleteState {
                state,
                name: s.name().to_string(),
                missing,
            })
        })
        .collect()
}

fn duplicate_names(dfa: &Dfa) -> Vec<LintIssue> {
    let mut first_seen: HashMap<String, StateId> = HashMap::new();
    let mut issues = Vec::new();
    for (id, state) in dfa.states() {
        let key = state.name().to_lowercase();
        match first_seen.get(&key) {
            Some(&first) => issues.push(LintIssue::DuplicateName {
                name: state.name().to_string(),
                first,
                second: id,
            }),
            None => {
                first_seen.insert(key, id);
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::builder::LintBuilder;

    fn issues_of(result: LintResult) -> Vec<LintIssue> {
        match result {
            Validation::Failure(issues) => issues.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn lint_accumulates_all_issues() {
        let dfa = Dfa::from_description("States: a, A\nAlphabet: x");

        let issues = issues_of(LintRules::default().check(&dfa));

        assert!(issues.contains(&LintIssue::NoStartState));
        assert!(issues.contains(&LintIssue::NoAcceptStates));
        assert!(issues
            .iter()
            .any(|i| matches!(i, LintIssue::IncompleteState { .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, LintIssue::DuplicateName { .. })));
        // no start state: reachability is not evaluated
        assert!(!issues
            .iter()
            .any(|i| matches!(i, LintIssue::UnreachableState { .. })));
    }

    #[test]
    fn complete_reachable_automaton_passes() {
        let dfa = Dfa::from_description(
            "States: q0, q1\nStart state: q0\nAccept states: q1\n\
             q0, 0 -> q0\nq0, 1 -> q1\nq1, 0 -> q1\nq1, 1 -> q1",
        );

        assert!(LintRules::default().check(&dfa).is_success());
    }

    #[test]
    fn unreachable_states_are_named() {
        let dfa = Dfa::from_description(
            "States: s, island\nStart state: s\nAccept states: s\ns, a -> s\nisland, a -> s",
        );

        let issues = issues_of(LintRules::default().check(&dfa));

        assert_eq!(
            issues,
            vec![LintIssue::UnreachableState {
                state: StateId(1),
                name: "island".to_string()
            }]
        );
    }

    #[test]
    fn incomplete_state_lists_missing_symbols() {
        let dfa = Dfa::from_description("States: s\nAlphabet: a, b, c\nStart state: s\nAccept states: s\ns, b -> s");

        let issues = issues_of(LintRules::default().check(&dfa));

        assert_eq!(
            issues,
            vec![LintIssue::IncompleteState {
                state: StateId(0),
                name: "s".to_string(),
                missing: vec!['a', 'c'],
            }]
        );
    }

    #[test]
    fn disabled_checks_are_skipped() {
        let rules = LintBuilder::new().require_start().build();

        let dfa = Dfa::from_description("States: a\nStart state: a");

        assert!(rules.check(&dfa).is_success());
    }

    #[test]
    fn custom_predicate_contributes_issue() {
        let rules = LintBuilder::new()
            .require_pred(|dfa| dfa.state_count() <= 1, "at most one state".to_string())
            .build();

        let dfa = Dfa::from_description("States: a, b");

        assert_eq!(
            issues_of(rules.check(&dfa)),
            vec![LintIssue::CustomCheckFailed {
                message: "at most one state".to_string()
            }]
        );
    }
}
