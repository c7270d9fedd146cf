//! The automaton model.
//!
//! [`Dfa`] owns its states, alphabet and transition table. It is built
//! through four lenient mutations and afterwards read by the simulator and
//! by presentation code. Invalid references never fail loudly; the
//! mutation simply has no effect and reports `false`.

use super::alphabet::Alphabet;
use super::state::{State, StateId};
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A deterministic finite automaton over single-character symbols.
///
/// The transition function is stored as a table with one row per state
/// and one column per alphabet symbol. Rows grow lazily as the alphabet
/// grows, so a short row simply means "undefined" for the missing columns.
///
/// # Example
///
/// ```rust
/// use dfa_notation::core::{Dfa, State};
///
/// let mut dfa = Dfa::new();
/// let even = dfa.add_state(State::new("even"));
/// let odd = dfa.add_state(State::new("odd"));
/// dfa.set_start_state(even);
/// dfa.add_accept_state(even);
/// dfa.add_transition(even, odd, 'a');
/// dfa.add_transition(odd, even, 'a');
///
/// assert!(dfa.accepts("aa"));
/// assert!(!dfa.accepts("a"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dfa {
    states: Vec<State>,
    alphabet: Alphabet,
    table: Vec<Vec<Option<StateId>>>,
    start: Option<StateId>,
    accepting: BTreeSet<StateId>,
}

impl Dfa {
    /// Create an empty automaton with no states and no start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state and give it an empty transition row.
    ///
    /// Every call registers a new, distinct state, even if another state
    /// already has the same name.
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        if state.is_accepting() {
            self.accepting.insert(id);
        }
        self.states.push(state);
        self.table.push(Vec::new());
        id
    }

    /// Set the start state. No-op if `id` is not registered.
    pub fn set_start_state(&mut self, id: StateId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.start = Some(id);
        true
    }

    /// Mark a state accepting. No-op if `id` is not registered.
    ///
    /// Keeps the state's own flag and the accept set in step.
    pub fn add_accept_state(&mut self, id: StateId) -> bool {
        let Some(state) = self.states.get_mut(id.0) else {
            return false;
        };
        state.mark_accepting();
        self.accepting.insert(id);
        true
    }

    /// Extend the alphabet without adding any transition.
    pub fn add_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Add or overwrite the transition `from --symbol--> to`.
    ///
    /// Both endpoints must already be registered; otherwise nothing
    /// changes, not even the alphabet.
    pub fn add_transition(&mut self, from: StateId, to: StateId, symbol: char) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        let column = self.alphabet.insert(symbol);
        let row = &mut self.table[from.0];
        if row.len() <= column {
            row.resize(column + 1, None);
        }
        row[column] = Some(to);
        true
    }

    /// Whether `id` refers to a state of this automaton.
    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.states.len()
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    /// All states with their ids, in registration order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(idx, state)| (StateId(idx), state))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Latest registered state with exactly this name.
    pub fn find_state(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .rposition(|state| state.name() == name)
            .map(StateId)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn start_state(&self) -> Option<StateId> {
        self.start
    }

    pub fn accept_states(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    pub fn is_accept_state(&self, id: StateId) -> bool {
        self.accepting.contains(&id)
    }

    /// Destination of `from` on `symbol`, if defined.
    ///
    /// This is a raw table lookup; alphabet membership is the simulator's
    /// concern.
    pub fn successor(&self, from: StateId, symbol: char) -> Option<StateId> {
        let column = self.alphabet.index_of(symbol)?;
        self.table.get(from.0)?.get(column).copied().flatten()
    }

    /// Outgoing `(symbol, destination)` pairs of one state.
    ///
    /// Empty for states without transitions and for unknown ids.
    pub fn outgoing(&self, from: StateId) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.table
            .get(from.0)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(move |(column, to)| Some((self.alphabet.symbol_at(column)?, (*to)?)))
    }

    /// Whether `from` has at least one outgoing transition.
    ///
    /// Rows only grow when a transition is written and always end in a
    /// defined column, so a non-empty row has an edge.
    pub fn has_outgoing(&self, from: StateId) -> bool {
        self.table.get(from.0).is_some_and(|row| !row.is_empty())
    }

    /// Every transition, grouped by source state.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.states().flat_map(move |(from, _)| {
            self.outgoing(from)
                .map(move |(symbol, to)| Transition { from, symbol, to })
        })
    }

    pub fn transition_count(&self) -> usize {
        self.transitions().count()
    }

    /// Check the structural invariants that the mutation API maintains.
    ///
    /// Only data that bypassed the mutation API (deserialized input) can
    /// fail this check.
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        if self.table.len() != self.states.len() {
            return Err(format!(
                "transition table has {} rows for {} states",
                self.table.len(),
                self.states.len()
            ));
        }
        if let Some(start) = self.start {
            if !self.contains(start) {
                return Err(format!("start state {start} is not registered"));
            }
        }
        for &id in &self.accepting {
            match self.state(id) {
                None => return Err(format!("accept state {id} is not registered")),
                Some(state) if !state.is_accepting() => {
                    return Err(format!("accept state {id} is not flagged accepting"))
                }
                Some(_) => {}
            }
        }
        for (id, state) in self.states() {
            if state.is_accepting() && !self.accepting.contains(&id) {
                return Err(format!("state {id} is flagged accepting but not in the accept set"));
            }
        }
        for (idx, row) in self.table.iter().enumerate() {
            if row.len() > self.alphabet.len() {
                return Err(format!("row {idx} is wider than the alphabet"));
            }
            if row.last().is_some_and(Option::is_none) {
                return Err(format!("row {idx} ends in an undefined column"));
            }
            if let Some(to) = row.iter().flatten().find(|to| !self.contains(**to)) {
                return Err(format!("row {idx} points at unregistered state {to}"));
            }
        }
        Ok(())
    }
}

/// Two automata are equal when they have the same states, start state,
/// accept set, alphabet and edges. Symbol column order is not observable.
impl PartialEq for Dfa {
    fn eq(&self, other: &Self) -> bool {
        self.states == other.states
            && self.start == other.start
            && self.accepting == other.accepting
            && self.alphabet == other.alphabet
            && self.transitions().collect::<HashSet<_>>()
                == other.transitions().collect::<HashSet<_>>()
    }
}

impl Eq for Dfa {}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_states() -> (Dfa, StateId, StateId) {
        let mut dfa = Dfa::new();
        let q0 = dfa.add_state(State::new("q0"));
        let q1 = dfa.add_state(State::new("q1"));
        (dfa, q0, q1)
    }

    #[test]
    fn new_automaton_is_empty() {
        let dfa = Dfa::new();
        assert_eq!(dfa.state_count(), 0);
        assert!(dfa.alphabet().is_empty());
        assert_eq!(dfa.start_state(), None);
        assert!(dfa.accept_states().is_empty());
        assert_eq!(dfa.transition_count(), 0);
    }

    #[test]
    fn same_name_registers_distinct_states() {
        let mut dfa = Dfa::new();
        let first = dfa.add_state(State::new("q"));
        let second = dfa.add_state(State::new("q"));
        assert_ne!(first, second);
        assert_eq!(dfa.state_count(), 2);
        assert_eq!(dfa.find_state("q"), Some(second));
    }

    #[test]
    fn set_start_ignores_unregistered_state() {
        let (mut dfa, q0, _) = two_states();
        assert!(!dfa.set_start_state(StateId(7)));
        assert_eq!(dfa.start_state(), None);
        assert!(dfa.set_start_state(q0));
        assert_eq!(dfa.start_state(), Some(q0));
    }

    #[test]
    fn accept_state_flips_flag() {
        let (mut dfa, _, q1) = two_states();
        assert!(dfa.add_accept_state(q1));
        assert!(dfa.is_accept_state(q1));
        assert!(dfa.state(q1).unwrap().is_accepting());
        assert!(!dfa.add_accept_state(StateId(9)));
        assert_eq!(dfa.accept_states().len(), 1);
    }

    #[test]
    fn transition_requires_registered_endpoints() {
        let (mut dfa, q0, _) = two_states();
        assert!(!dfa.add_transition(q0, StateId(5), 'a'));
        assert!(!dfa.add_transition(StateId(5), q0, 'a'));
        assert_eq!(dfa.transition_count(), 0);
        assert!(!dfa.alphabet().contains('a'));
    }

    #[test]
    fn transition_extends_alphabet() {
        let (mut dfa, q0, q1) = two_states();
        assert!(dfa.add_transition(q0, q1, 'x'));
        assert!(dfa.alphabet().contains('x'));
        assert_eq!(dfa.successor(q0, 'x'), Some(q1));
        assert_eq!(dfa.successor(q1, 'x'), None);
    }

    #[test]
    fn later_transition_overwrites_destination() {
        let (mut dfa, q0, q1) = two_states();
        dfa.add_transition(q0, q0, '0');
        dfa.add_transition(q0, q1, '0');
        assert_eq!(dfa.successor(q0, '0'), Some(q1));
        assert_eq!(dfa.transition_count(), 1);
    }

    #[test]
    fn outgoing_lists_defined_columns_only() {
        let (mut dfa, q0, q1) = two_states();
        dfa.add_symbol('a');
        dfa.add_symbol('b');
        dfa.add_transition(q0, q1, 'b');
        assert_eq!(dfa.outgoing(q0).collect::<Vec<_>>(), vec![('b', q1)]);
        assert!(dfa.has_outgoing(q0));
        assert!(!dfa.has_outgoing(q1));
        assert_eq!(dfa.outgoing(StateId(42)).count(), 0);
    }

    #[test]
    fn transitions_enumerates_every_edge() {
        let (mut dfa, q0, q1) = two_states();
        dfa.add_transition(q0, q1, '1');
        dfa.add_transition(q1, q0, '0');
        let edges: Vec<_> = dfa.transitions().collect();
        assert_eq!(
            edges,
            vec![
                Transition { from: q0, symbol: '1', to: q1 },
                Transition { from: q1, symbol: '0', to: q0 },
            ]
        );
    }

    #[test]
    fn mutation_api_preserves_invariants() {
        let (mut dfa, q0, q1) = two_states();
        dfa.set_start_state(q0);
        dfa.add_accept_state(q1);
        dfa.add_transition(q0, q1, 'a');
        assert!(dfa.check_invariants().is_ok());
    }

    #[test]
    fn automaton_serializes_correctly() {
        let (mut dfa, q0, q1) = two_states();
        dfa.set_start_state(q0);
        dfa.add_accept_state(q1);
        dfa.add_transition(q0, q1, 'a');

        let json = serde_json::to_string(&dfa).unwrap();
        let restored: Dfa = serde_json::from_str(&json).unwrap();
        assert_eq!(dfa, restored);
        assert!(restored.check_invariants().is_ok());
    }

    #[test]
    fn equality_compares_edges_not_column_positions() {
        let (mut a, q0, q1) = two_states();
        a.add_symbol('a');
        a.add_symbol('b');
        a.add_transition(q0, q1, 'a');

        let (mut b, q0, q1) = two_states();
        b.add_symbol('b');
        b.add_symbol('a');
        b.add_transition(q0, q1, 'b');

        assert_ne!(a, b);
        assert_eq!(a.successor(q0, 'a'), Some(q1));
        assert_eq!(b.successor(q0, 'a'), None);
    }

    #[test]
    fn equality_ignores_symbol_declaration_order() {
        let (mut a, q0, q1) = two_states();
        a.add_symbol('a');
        a.add_symbol('b');
        a.add_transition(q0, q1, 'b');

        let (mut b, q0, q1) = two_states();
        b.add_transition(q0, q1, 'b');
        b.add_symbol('a');

        assert_eq!(a, b);
    }

    #[test]
    fn has_outgoing_sees_edges_in_later_columns() {
        let (mut dfa, q0, q1) = two_states();
        dfa.add_transition(q1, q1, 'a');
        dfa.add_transition(q1, q1, 'b');
        assert!(!dfa.has_outgoing(q0));

        dfa.add_transition(q0, q1, 'b');
        assert!(dfa.has_outgoing(q0));
        assert!(!dfa.has_outgoing(StateId(3)));
        assert!(dfa.check_invariants().is_ok());
    }

    #[test]
    fn automaton_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dfa>();
    }
}
