//! Input alphabet of single-character symbols.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Set of input symbols.
///
/// Membership is the only semantically relevant property. Each symbol
/// also receives a dense index in first-seen order, which the transition
/// table uses as its column.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol, returning its column index.
    ///
    /// Inserting a symbol that is already present returns the existing
    /// index.
    pub fn insert(&mut self, symbol: char) -> usize {
        if let Some(&idx) = self.index.get(&symbol) {
            return idx;
        }
        let idx = self.symbols.len();
        self.symbols.push(symbol);
        self.index.insert(symbol, idx);
        idx
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Column index of `symbol`, if it belongs to the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Symbol stored at column `idx`.
    pub fn symbol_at(&self, idx: usize) -> Option<char> {
        self.symbols.get(idx).copied()
    }

    /// Symbols in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.symbols().all(|c| other.contains(c))
    }
}

impl Eq for Alphabet {}

impl From<Vec<char>> for Alphabet {
    fn from(symbols: Vec<char>) -> Self {
        symbols.into_iter().collect()
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut alphabet = Alphabet::new();
        for symbol in iter {
            alphabet.insert(symbol);
        }
        alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_dense_indices() {
        let mut alphabet = Alphabet::new();
        assert_eq!(alphabet.insert('a'), 0);
        assert_eq!(alphabet.insert('b'), 1);
        assert_eq!(alphabet.insert('a'), 0);
        assert_eq!(alphabet.len(), 2);
        assert_eq!(alphabet.symbol_at(1), Some('b'));
        assert_eq!(alphabet.symbol_at(2), None);
    }

    #[test]
    fn membership_ignores_order() {
        let left: Alphabet = "01".chars().collect();
        let right: Alphabet = "10".chars().collect();
        assert_eq!(left, right);
        assert!(left.contains('0'));
        assert!(!left.contains('2'));
    }

    #[test]
    fn duplicates_collapse_when_collected() {
        let alphabet: Alphabet = "abca".chars().collect();
        assert_eq!(alphabet.symbols().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn serializes_as_symbol_list() {
        let alphabet: Alphabet = "xy".chars().collect();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, r#"["x","y"]"#);

        let restored: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.index_of('y'), Some(1));
    }
}
