//! Palettes and the color catalog they are read from.
//!
//! The catalog is a small text format with one entry per color:
//!
//! ```text
//! -n|naranjo:#F6421B;
//! -c|celeste:#26B2EB;
//! ```
//!
//! The initial after the dash is the symbol players type, followed by the
//! display name and the hex color used when drawing it.

use crate::error::{Error, Result};
use crate::key::Key;
use std::collections::HashSet;

/// One color identity, written as its single-character initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub char);

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered set of distinct symbols keys are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Symbol>);

impl Palette {
    /// Build a palette, rejecting empty input and repeated symbols.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::EmptyPalette);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(Error::DuplicateSymbol(symbol));
            }
        }
        Ok(Self(symbols))
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

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }
}

impl std::str::FromStr for Palette {
    type Err = Error;

    /// Each character is a symbol: `"ncvapzr"`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars().map(Symbol).collect())
    }
}

/// A catalog entry: symbol, display name and hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpec {
    pub symbol: Symbol,
    pub name: String,
    pub hex: String,
}

impl ColorSpec {
    /// Parse a single `-n|naranjo:#F6421B` entry (terminator already removed).
    fn parse(entry: &str) -> Result<Self> {
        let malformed = || Error::MalformedColorSpec(entry.to_string());

        let rest = entry.strip_prefix('-').ok_or_else(malformed)?;
        let (initial, rest) = rest.split_once('|').ok_or_else(malformed)?;
        let mut chars = initial.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol(c),
            _ => return Err(malformed()),
        };
        let (name, hex) = rest.split_once(':').ok_or_else(malformed)?;
        if name.is_empty() || !hex.starts_with('#') || hex.len() < 2 {
            return Err(malformed());
        }

        Ok(Self {
            symbol,
            name: name.to_string(),
            hex: hex.to_string(),
        })
    }
}

/// The full color catalog of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    specs: Vec<ColorSpec>,
    palette: Palette,
}

impl ColorTable {
    /// Parse a catalog. Whitespace between entries is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let specs = text
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ColorSpec::parse)
            .collect::<Result<Vec<_>>>()?;
        let palette = Palette::new(specs.iter().map(|s| s.symbol).collect())?;

        tracing::debug!(colors = specs.len(), "parsed color catalog");
        Ok(Self { specs, palette })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn specs(&self) -> &[ColorSpec] {
        &self.specs
    }

    pub fn get(&self, symbol: Symbol) -> Option<&ColorSpec> {
        self.specs.iter().find(|s| s.symbol == symbol)
    }

    pub fn name_of(&self, symbol: Symbol) -> Option<&str> {
        self.get(symbol).map(|s| s.name.as_str())
    }

    pub fn hex_of(&self, symbol: Symbol) -> Option<&str> {
        self.get(symbol).map(|s| s.hex.as_str())
    }

    /// Validate a typed guess: exact length and only catalog colors.
    /// Repeated colors are accepted.
    pub fn parse_guess(&self, text: &str, length: usize) -> Result<Key> {
        let key = Key::from(text.trim());
        if key.len() != length {
            return Err(Error::LengthMismatch {
                secret: length,
                guess: key.len(),
            });
        }
        if let Some(&unknown) = key.symbols().iter().find(|s| !self.palette.contains(**s)) {
            return Err(Error::UnknownSymbol(unknown));
        }
        Ok(key)
    }

    /// Validate a typed secret: like [`ColorTable::parse_guess`] but colors
    /// may not repeat.
    pub fn parse_secret(&self, text: &str, length: usize) -> Result<Key> {
        let key = self.parse_guess(text, length)?;
        if key.is_empty() || key.has_repeats() {
            return Err(Error::InvalidSecret(key.to_string()));
        }
        Ok(key)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::parse(crate::DEFAULT_COLORS).expect("built-in color catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_seven_colors() {
        let table = ColorTable::default();
        assert_eq!(table.palette().len(), 7);
        assert_eq!(table.name_of(Symbol('n')), Some("naranjo"));
        assert_eq!(table.hex_of(Symbol('z')), Some("#00f"));
        assert_eq!(table.name_of(Symbol('q')), None);
    }

    #[test]
    fn palette_keeps_catalog_order() {
        let table = ColorTable::default();
        let initials: String = table.palette().symbols().iter().map(|s| s.0).collect();
        assert_eq!(initials, "ncvapzr");
    }

    #[test]
    fn rejects_duplicate_initials() {
        let err = ColorTable::parse("-a|amarillo:#F6C202;-a|azul:#00f;").unwrap_err();
        assert_eq!(err, Error::DuplicateSymbol(Symbol('a')));
    }

    #[test]
    fn rejects_malformed_entries() {
        for bad in ["n|naranjo:#F6421B;", "-nx|naranjo:#F6421B;", "-n|naranjo#F6421B;", "-n|:#fff;", "-n|naranjo:F6421B;"] {
            assert!(
                matches!(ColorTable::parse(bad), Err(Error::MalformedColorSpec(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(ColorTable::parse("  \n ;").unwrap_err(), Error::EmptyPalette);
    }

    #[test]
    fn palette_from_str() {
        let palette: Palette = "abc".parse().unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!("aba".parse::<Palette>().unwrap_err(), Error::DuplicateSymbol(Symbol('a')));
        assert_eq!("".parse::<Palette>().unwrap_err(), Error::EmptyPalette);
    }

    #[test]
    fn guess_validation() {
        let table = ColorTable::default();
        assert_eq!(table.parse_guess(" ran\n", 3).unwrap(), Key::from("ran"));
        assert_eq!(table.parse_guess("nnn", 3).unwrap(), Key::from("nnn"));
        assert_eq!(
            table.parse_guess("", 3).unwrap_err(),
            Error::LengthMismatch { secret: 3, guess: 0 }
        );
        assert_eq!(
            table.parse_guess("rana", 3).unwrap_err(),
            Error::LengthMismatch { secret: 3, guess: 4 }
        );
        assert_eq!(table.parse_guess("rax", 3).unwrap_err(), Error::UnknownSymbol(Symbol('x')));
    }

    #[test]
    fn secret_validation() {
        let table = ColorTable::default();
        assert_eq!(table.parse_secret("nar", 3).unwrap(), Key::from("nar"));
        assert_eq!(
            table.parse_secret("nna", 3).unwrap_err(),
            Error::InvalidSecret("nna".to_string())
        );
        assert_eq!(
            table.parse_secret("", 0).unwrap_err(),
            Error::InvalidSecret(String::new())
        );
        assert_eq!(table.parse_secret("nax", 3).unwrap_err(), Error::UnknownSymbol(Symbol('x')));
    }
}
