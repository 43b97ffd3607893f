//! Feedback calculation for guesses.
//!
//! This module scores a guess against a secret key: how many symbols sit in
//! the right position, and how many more appear in the key somewhere else.

use crate::error::{Error, Result};
use crate::key::Key;
use crate::palette::Symbol;

/// What a single guess position earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    /// Right color in the right position
    Exact,
    /// Right color, matched against a different position of the secret
    Color,
    /// Not matched
    Miss,
}

impl Peg {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Peg::Exact => '●',
            Peg::Color => '○',
            Peg::Miss => '·',
        }
    }
}

/// Positional and color-only hit counts for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub positional_hits: usize,
    pub color_hits: usize,
}

impl Feedback {
    pub fn new(positional_hits: usize, color_hits: usize) -> Self {
        Self {
            positional_hits,
            color_hits,
        }
    }

    /// A guess wins when every one of the `length` positions is exact.
    pub fn is_win(self, length: usize) -> bool {
        self.positional_hits == length
    }

    /// Number of distinct feedback values for keys of `length`, counting
    /// unreachable ones. Sizes the buckets in [`Feedback::index`].
    pub fn num_patterns(length: usize) -> usize {
        (length + 1) * (length + 1)
    }

    /// Dense index in `0..num_patterns(length)`
    pub fn index(self, length: usize) -> usize {
        self.positional_hits * (length + 1) + self.color_hits
    }

    /// Tally per-position pegs into counts
    pub fn from_pegs(pegs: &[Peg]) -> Self {
        pegs.iter().fold(Self::default(), |mut acc, peg| {
            match peg {
                Peg::Exact => acc.positional_hits += 1,
                Peg::Color => acc.color_hits += 1,
                Peg::Miss => {}
            }
            acc
        })
    }
}

impl From<(usize, usize)> for Feedback {
    fn from((positional_hits, color_hits): (usize, usize)) -> Self {
        Self::new(positional_hits, color_hits)
    }
}

impl std::fmt::Display for Feedback {
    /// Exact hits first, then color hits, the way pegs are laid out on a board
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.positional_hits + self.color_hits == 0 {
            return write!(f, "{}", Peg::Miss.to_char());
        }
        for _ in 0..self.positional_hits {
            write!(f, "{}", Peg::Exact.to_char())?;
        }
        for _ in 0..self.color_hits {
            write!(f, "{}", Peg::Color.to_char())?;
        }
        Ok(())
    }
}

fn check_lengths(secret: &Key, guess: &Key) -> Result<()> {
    if secret.len() != guess.len() {
        return Err(Error::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }
    Ok(())
}

/// Score `guess` against `secret`.
///
/// Exact positions are resolved first and both sides of each exact match are
/// consumed. Every remaining secret symbol, in order, then claims the first
/// unconsumed equal guess symbol, so no symbol instance is counted twice even
/// when the guess repeats colors.
pub fn score(secret: &Key, guess: &Key) -> Result<Feedback> {
    check_lengths(secret, guess)?;

    let feedback = score_symbols(secret.symbols(), guess.symbols());
    tracing::trace!(%secret, %guess, ?feedback, "scored guess");
    Ok(feedback)
}

/// [`score`] for slices already known to have equal length
pub(crate) fn score_symbols(secret: &[Symbol], guess: &[Symbol]) -> Feedback {
    if secret == guess {
        return Feedback::new(secret.len(), 0);
    }
    let mut feedback = Feedback::default();
    two_pass(secret, guess, |_, peg| match peg {
        Peg::Exact => feedback.positional_hits += 1,
        Peg::Color => feedback.color_hits += 1,
        Peg::Miss => {}
    });
    feedback
}

/// Per-position outcome of scoring `guess` against `secret`, indexed by guess
/// position. Uses the same two passes as [`score`].
pub fn grade(secret: &Key, guess: &Key) -> Result<Vec<Peg>> {
    check_lengths(secret, guess)?;
    let mut pegs = vec![Peg::Miss; secret.len()];
    two_pass(secret.symbols(), guess.symbols(), |pos, peg| pegs[pos] = peg);
    Ok(pegs)
}

/// Keys up to this length keep their consumed masks on the stack.
const INLINE_MASK: usize = 32;

/// Run the exact pass then the color pass, reporting each matched guess
/// position to `mark`. Unmatched positions are not reported.
fn two_pass<F>(secret: &[Symbol], guess: &[Symbol], mut mark: F)
where
    F: FnMut(usize, Peg),
{
    let len = secret.len();
    let mut inline = [false; 2 * INLINE_MASK];
    let mut spilled;
    let masks: &mut [bool] = if len <= INLINE_MASK {
        &mut inline[..2 * len]
    } else {
        spilled = vec![false; 2 * len];
        &mut spilled
    };
    let (secret_used, guess_used) = masks.split_at_mut(len);

    for i in 0..len {
        if secret[i] == guess[i] {
            mark(i, Peg::Exact);
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for i in 0..len {
        if secret_used[i] {
            continue;
        }
        if let Some(j) = (0..len).find(|&j| !guess_used[j] && guess[j] == secret[i]) {
            mark(j, Peg::Color);
            secret_used[i] = true;
            guess_used[j] = true;
        }
    }
}
