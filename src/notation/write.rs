//! Rendering an automaton back into the description format.

use crate::core::{Dfa, StateId};
use std::fmt;

/// Render `dfa` as a description that [`parse`](super::parse) reads back.
///
/// Names are written with their declared spelling. Some automata cannot
/// be read back faithfully:
///
/// - names containing a comma or `->`, which break the transition line;
/// - names starting with a directive prefix such as `Start state:`, which
///   turn a transition line into a directive;
/// - names that collide case-insensitively;
/// - symbols that are a comma or whitespace.
pub fn write(dfa: &Dfa) -> String {
    dfa.to_string()
}

fn name_list<'a>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    names: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        return Ok(());
    }
    writeln!(f, "{label} {}", names.join(", "))
}

fn name_of(dfa: &Dfa, id: StateId) -> &str {
    dfa.state(id).map_or("", |s| s.name())
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        name_list(f, "States:", self.states().map(|(_, s)| s.name()))?;

        let symbols: Vec<String> = self.alphabet().symbols().map(String::from).collect();
        name_list(f, "Alphabet:", symbols.iter().map(String::as_str))?;

        if let Some(start) = self.start_state() {
            writeln!(f, "Start state: {}", name_of(self, start))?;
        }
        name_list(
            f,
            "Accept states:",
            self.accept_states().iter().map(|&id| name_of(self, id)),
        )?;

        for t in self.transitions() {
            writeln!(
                f,
                "{}, {} -> {}",
                name_of(self, t.from),
                t.symbol,
                name_of(self, t.to)
            )?;
        }
        Ok(())
    }
}
