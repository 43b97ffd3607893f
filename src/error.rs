//! Error types shared by the engine and its callers.

use crate::palette::Symbol;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key length outside `1..=palette_size` was requested.
    #[error("invalid key length {length}: must be between 1 and {palette_size}")]
    InvalidLength { length: usize, palette_size: usize },

    /// Secret and guess have different lengths.
    #[error("length mismatch: secret has {secret} symbols, guess has {guess}")]
    LengthMismatch { secret: usize, guess: usize },

    #[error("palette must contain at least one symbol")]
    EmptyPalette,

    #[error("symbol '{0}' appears more than once in the palette")]
    DuplicateSymbol(Symbol),

    #[error("malformed color entry: {0}")]
    MalformedColorSpec(String),

    #[error("symbol '{0}' is not a color in the palette")]
    UnknownSymbol(Symbol),

    /// A secret key that is empty or repeats a color.
    #[error("invalid secret key '{0}': needs at least one color and no repeats")]
    InvalidSecret(String),

    #[error("attempt budget must be at least 1")]
    InvalidAttempts,
}

pub type Result<T> = std::result::Result<T, Error>;
