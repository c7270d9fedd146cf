//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Dfa, State, StateId};
use std::collections::HashMap;

/// Builder for constructing automata with a fluent API.
///
/// Unlike the description parser, the builder is strict: names are
/// matched exactly, every reference must name a declared state, and the
/// first problem found is returned as a [`BuildError`]. Declaration order
/// does not matter, because names are resolved in [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use dfa_notation::builder::DfaBuilder;
///
/// let dfa = DfaBuilder::new()
///     .states(["even", "odd"])
///     .start("even")
///     .accepting("even")
///     .transition("even", 'a', "odd")
///     .transition("odd", 'a', "even")
///     .build()
///     .unwrap();
///
/// assert!(dfa.accepts("aa"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    states: Vec<String>,
    symbols: Vec<char>,
    start: Option<String>,
    accepting: Vec<String>,
    transitions: Vec<(String, char, String)>,
}

impl DfaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Declare several states at once.
    pub fn states<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a symbol to the alphabet even if no transition uses it.
    pub fn symbol(mut self, symbol: char) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Set the start state (optional).
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Mark a state accepting.
    pub fn accepting(mut self, name: impl Into<String>) -> Self {
        self.accepting.push(name.into());
        self
    }

    /// Add a transition. A later transition with the same source and
    /// symbol replaces an earlier one.
    pub fn transition(mut self, from: impl Into<String>, symbol: char, to: impl Into<String>) -> Self {
        self.transitions.push((from.into(), symbol, to.into()));
        self
    }

    /// Build the automaton.
    /// Returns an error if a name is declared twice or never declared.
    pub fn build(self) -> Result<Dfa, BuildError> {
        let mut dfa = Dfa::new();
        let mut ids: HashMap<String, StateId> = HashMap::new();

        for name in self.states {
            if ids.contains_key(&name) {
                return Err(BuildError::DuplicateState { name });
            }
            let id = dfa.add_state(State::new(name.clone()));
            ids.insert(name, id);
        }

        for symbol in self.symbols {
            dfa.add_symbol(symbol);
        }

        if let Some(name) = self.start {
            let id = *ids
                .get(&name)
                .ok_or(BuildError::UnknownStartState { name: name.clone() })?;
            dfa.set_start_state(id);
        }

        for name in self.accepting {
            let id = *ids
                .get(&name)
                .ok_or(BuildError::UnknownAcceptState { name: name.clone() })?;
            dfa.add_accept_state(id);
        }

        for (from, symbol, to) in self.transitions {
            let from = *ids
                .get(&from)
                .ok_or(BuildError::UnknownSource { name: from.clone() })?;
            let to = *ids
                .get(&to)
                .ok_or(BuildError::UnknownTarget { name: to.clone() })?;
            dfa.add_transition(from, to, symbol);
        }

        Ok(dfa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = DfaBuilder::new().states(["a", "b", "a"]).build();

        assert_eq!(
            result,
            Err(BuildError::DuplicateState {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn builder_validates_start_state() {
        let result = DfaBuilder::new().state("a").start("b").build();

        assert!(matches!(result, Err(BuildError::UnknownStartState { .. })));
    }

    #[test]
    fn builder_matches_names_exactly() {
        let result = DfaBuilder::new().state("Q0").accepting("q0").build();

        assert!(matches!(result, Err(BuildError::UnknownAcceptState { .. })));
    }

    #[test]
    fn builder_validates_transition_endpoints() {
        let missing_source = DfaBuilder::new()
            .state("a")
            .transition("x", '0', "a")
            .build();
        assert!(matches!(missing_source, Err(BuildError::UnknownSource { .. })));

        let missing_target = DfaBuilder::new()
            .state("a")
            .transition("a", '0', "x")
            .build();
        assert!(matches!(missing_target, Err(BuildError::UnknownTarget { .. })));
    }

    #[test]
    fn builder_is_order_insensitive() {
        let dfa = DfaBuilder::new()
            .transition("a", '1', "b")
            .accepting("b")
            .start("a")
            .states(["a", "b"])
            .build()
            .unwrap();

        assert!(dfa.accepts("1"));
    }

    #[test]
    fn start_state_is_optional() {
        let dfa = DfaBuilder::new().state("a").accepting("a").build().unwrap();

        assert_eq!(dfa.start_state(), None);
        assert!(!dfa.accepts(""));
    }

    #[test]
    fn declared_symbols_join_alphabet() {
        let dfa = DfaBuilder::new().symbol('z').build().unwrap();

        assert!(dfa.alphabet().contains('z'));
    }
}
