//! One round of play: a secret, an attempt budget and the guesses made so far.

use crate::error::{Error, Result};
use crate::feedback::{score, Feedback};
use crate::key::Key;

/// Where a round stands after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    InProgress { remaining: u32 },
    Won { attempts: u32 },
    Lost { secret: Key },
}

#[derive(Debug, Clone)]
pub struct Round {
    secret: Key,
    max_attempts: u32,
    history: Vec<(Key, Feedback)>,
    finished: Option<Outcome>,
}

impl Round {
    /// Start a round. The secret must be non-empty without repeated colors,
    /// as produced by [`crate::generate`].
    pub fn new(secret: Key, max_attempts: u32) -> Result<Self> {
        if secret.is_empty() || secret.has_repeats() {
            return Err(Error::InvalidSecret(secret.to_string()));
        }
        if max_attempts == 0 {
            return Err(Error::InvalidAttempts);
        }
        Ok(Self {
            secret,
            max_attempts,
            history: Vec::new(),
            finished: None,
        })
    }

    pub fn key_length(&self) -> usize {
        self.secret.len()
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempts(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn history(&self) -> &[(Key, Feedback)] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.finished.is_some()
    }

    /// The secret, only once the round is over
    pub fn revealed_secret(&self) -> Option<&Key> {
        self.finished.as_ref().map(|_| &self.secret)
    }

    /// Score a guess and advance the round.
    ///
    /// Once the round is won or lost further guesses are not scored and the
    /// final outcome is returned again.
    pub fn submit(&mut self, guess: Key) -> Result<Outcome> {
        if let Some(outcome) = &self.finished {
            return Ok(outcome.clone());
        }

        let feedback = score(&self.secret, &guess)?;
        self.history.push((guess, feedback));
        let attempts = self.attempts();

        let outcome = if feedback.is_win(self.secret.len()) {
            Outcome::Won { attempts }
        } else if attempts >= self.max_attempts {
            Outcome::Lost {
                secret: self.secret.clone(),
            }
        } else {
            Outcome::InProgress {
                remaining: self.max_attempts - attempts,
            }
        };

        tracing::debug!(attempts, %feedback, ?outcome, "guess submitted");
        if !matches!(outcome, Outcome::InProgress { .. }) {
            self.finished = Some(outcome.clone());
        }
        Ok(outcome)
    }

    /// Latest feedback, if any guess was made
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.history.last().map(|(_, fb)| *fb)
    }
}
