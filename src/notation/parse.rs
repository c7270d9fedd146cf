//! Line-oriented description parser.

use super::warning::{LineWarning, ParseWarning};
use crate::core::{Dfa, State, StateId};
use std::collections::HashMap;
use tracing::debug;

const STATES: &str = "States:";
const ALPHABET: &str = "Alphabet:";
const START_STATE: &str = "Start state:";
const ACCEPT_STATES: &str = "Accept states:";
const ARROW: &str = "->";

/// Result of parsing a description: the automaton plus everything that
/// was skipped on the way.
#[derive(Clone, Debug)]
pub struct Parsed {
    pub automaton: Dfa,
    pub warnings: Vec<LineWarning>,
}

impl Parsed {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Case-insensitive name lookup built up while declarations are read.
///
/// Keys are lowercased names. A later declaration replaces an earlier
/// one under the same key.
#[derive(Debug, Default)]
struct NameRegistry {
    by_key: HashMap<String, StateId>,
}

impl NameRegistry {
    fn key(name: &str) -> String {
        name.to_lowercase()
    }

    fn declare(&mut self, name: &str, id: StateId) {
        self.by_key.insert(Self::key(name), id);
    }

    fn resolve(&self, name: &str) -> Option<StateId> {
        self.by_key.get(&Self::key(name)).copied()
    }
}

/// The recognized line forms, borrowed from the input.
#[derive(Debug, PartialEq)]
enum Directive<'a> {
    States(&'a str),
    Alphabet(&'a str),
    StartState(&'a str),
    AcceptStates(&'a str),
    Transition(&'a str),
    Other,
}

impl<'a> Directive<'a> {
    /// Classify a trimmed, non-empty line.
    ///
    /// Prefixes are checked before the arrow, so `States: a->b` is a
    /// state declaration.
    fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(STATES) {
            Directive::States(rest)
        } else if let Some(rest) = line.strip_prefix(ALPHABET) {
            Directive::Alphabet(rest)
        } else if let Some(rest) = line.strip_prefix(START_STATE) {
            Directive::StartState(rest.trim())
        } else if let Some(rest) = line.strip_prefix(ACCEPT_STATES) {
            Directive::AcceptStates(rest)
        } else if line.contains(ARROW) {
            Directive::Transition(line)
        } else {
            Directive::Other
        }
    }
}

/// Trimmed, non-empty comma-separated tokens.
fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Split `from, symbol -> to` into its three trimmed parts.
///
/// Exactly one arrow and exactly one comma before it are required.
fn split_transition(line: &str) -> Option<(&str, &str, &str)> {
    let (lhs, to) = line.split_once(ARROW)?;
    if to.contains(ARROW) {
        return None;
    }
    let (from, symbol) = lhs.split_once(',')?;
    if symbol.contains(',') {
        return None;
    }
    Some((from.trim(), symbol.trim(), to.trim()))
}

struct Parser {
    dfa: Dfa,
    names: NameRegistry,
    warnings: Vec<LineWarning>,
}

impl Parser {
    fn new() -> Self {
        Self {
            dfa: Dfa::new(),
            names: NameRegistry::default(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, line: usize, text: &str, warning: ParseWarning) {
        debug!(line, %warning, "skipping description line");
        self.warnings.push(LineWarning {
            line,
            text: text.to_string(),
            warning,
        });
    }

    fn line(&mut self, number: usize, line: &str) {
        match Directive::classify(line) {
            Directive::States(list) => {
                for name in tokens(list) {
                    let id = self.dfa.add_state(State::new(name));
                    self.names.declare(name, id);
                }
            }
            Directive::Alphabet(list) => {
                for symbol in tokens(list).filter_map(|t| t.chars().next()) {
                    self.dfa.add_symbol(symbol);
                }
            }
            Directive::StartState(name) => match self.names.resolve(name) {
                Some(id) => {
                    self.dfa.set_start_state(id);
                }
                None => self.warn(
                    number,
                    line,
                    ParseWarning::UnknownStartState {
                        name: name.to_string(),
                    },
                ),
            },
            Directive::AcceptStates(list) => {
                for name in tokens(list) {
                    match self.names.resolve(name) {
                        Some(id) => {
                            self.dfa.add_accept_state(id);
                        }
                        None => self.warn(
                            number,
                            line,
                            ParseWarning::UnknownAcceptState {
                                name: name.to_string(),
                            },
                        ),
                    }
                }
            }
            Directive::Transition(text) => {
                if let Err(warning) = self.transition(text) {
                    self.warn(number, line, warning);
                }
            }
            Directive::Other => self.warn(number, line, ParseWarning::Unrecognized),
        }
    }

    fn transition(&mut self, text: &str) -> Result<(), ParseWarning> {
        let (from, symbol, to) = split_transition(text).ok_or(ParseWarning::MalformedTransition)?;
        let from = self
            .names
            .resolve(from)
            .ok_or_else(|| ParseWarning::UnknownSource {
                name: from.to_string(),
            })?;
        let to = self
            .names
            .resolve(to)
            .ok_or_else(|| ParseWarning::UnknownTarget {
                name: to.to_string(),
            })?;
        let symbol = symbol.chars().next().ok_or(ParseWarning::EmptySymbol)?;
        self.dfa.add_transition(from, to, symbol);
        Ok(())
    }

    fn finish(self) -> Parsed {
        debug!(
            states = self.dfa.state_count(),
            symbols = self.dfa.alphabet().len(),
            transitions = self.dfa.transition_count(),
            warnings = self.warnings.len(),
            "parsed automaton description"
        );
        Parsed {
            automaton: self.dfa,
            warnings: self.warnings,
        }
    }
}

/// Parse a textual automaton description.
///
/// Never fails. Lines that cannot be applied are recorded in
/// [`Parsed::warnings`] and otherwise ignored. Names resolve against the
/// declarations seen so far, so a state must be declared on an earlier
/// line than any line that refers to it.
///
/// # Example
///
/// ```rust
/// use dfa_notation::notation::{parse, ParseWarning};
///
/// let parsed = parse("States: a\nStart state: a\na, x -> b\nStates: b");
///
/// assert_eq!(parsed.automaton.state_count(), 2);
/// assert_eq!(parsed.warnings.len(), 1);
/// assert_eq!(parsed.warnings[0].line, 3);
/// assert!(matches!(parsed.warnings[0].warning, ParseWarning::UnknownTarget { .. }));
/// ```
pub fn parse(description: &str) -> Parsed {
    let mut parser = Parser::new();
    for (idx, raw) in description.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        parser.line(idx + 1, line);
    }
    parser.finish()
}
