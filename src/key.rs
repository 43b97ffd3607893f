//! Keys: ordered sequences of color symbols, either a hidden secret or a guess.

use crate::palette::Symbol;
use std::collections::HashSet;

/// An ordered sequence of symbols.
///
/// Secrets never repeat a symbol. Guesses may, and nothing that consumes a
/// guess is allowed to assume otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Key(Vec<Symbol>);

impl Key {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// True if some symbol occurs more than once
    pub fn has_repeats(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        !self.0.iter().all(|s| seen.insert(*s))
    }
}

impl From<&str> for Key {
    /// Every character becomes one symbol, so `"nar"` is naranjo, amarillo, rosado.
    fn from(s: &str) -> Self {
        s.chars().map(Symbol).collect()
    }
}

impl FromIterator<Symbol> for Key {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for Key {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        &self.0[index]
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_symbol_per_char() {
        let key = Key::from("nar");
        assert_eq!(key.len(), 3);
        assert_eq!(key[0], Symbol('n'));
        assert_eq!(key.to_string(), "nar");
    }

    #[test]
    fn detects_repeats() {
        assert!(!Key::from("abc").has_repeats());
        assert!(Key::from("aab").has_repeats());
        assert!(!Key::default().has_repeats());
    }
}
