//! Entropy-based code breaker.
//!
//! Every key the secret could be is enumerated up front. Each guess splits the
//! remaining candidates by the feedback it would produce; the solver picks the
//! guess whose split carries the most information (entropy), which minimizes
//! the expected number of candidates left afterwards.

use crate::error::{Error, Result};
use crate::feedback::{score_symbols, Feedback};
use crate::key::Key;
use crate::palette::{Palette, Symbol};
use rayon::prelude::*;

/// Result of analyzing a potential guess
#[derive(Debug, Clone)]
pub struct GuessAnalysis {
    pub key: Key,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

#[derive(Debug, Clone)]
pub struct CodeSolver {
    length: usize,
    all_keys: Vec<Key>,
    possible_answers: Vec<Key>,
}

impl CodeSolver {
    /// Enumerate every key of `length` distinct symbols over `palette`.
    pub fn new(palette: &Palette, length: usize) -> Result<Self> {
        if length == 0 || length > palette.len() {
            return Err(Error::InvalidLength {
                length,
                palette_size: palette.len(),
            });
        }

        let mut all_keys = Vec::new();
        let mut prefix = Vec::with_capacity(length);
        let mut used = vec![false; palette.len()];
        enumerate_keys(palette.symbols(), length, &mut prefix, &mut used, &mut all_keys);
        tracing::debug!(candidates = all_keys.len(), length, "enumerated keys");

        Ok(Self {
            length,
            possible_answers: all_keys.clone(),
            all_keys,
        })
    }

    /// Build a solver and replay guesses already made in a round.
    pub fn from_history(palette: &Palette, length: usize, history: &[(Key, Feedback)]) -> Result<Self> {
        let mut solver = Self::new(palette, length)?;
        for (guess, feedback) in history {
            solver.apply_feedback(guess, *feedback)?;
        }
        Ok(solver)
    }

    pub fn key_length(&self) -> usize {
        self.length
    }

    pub fn remaining_count(&self) -> usize {
        self.possible_answers.len()
    }

    pub fn possible_answers(&self) -> &[Key] {
        &self.possible_answers
    }

    pub fn all_keys(&self) -> &[Key] {
        &self.all_keys
    }

    pub fn reset(&mut self) {
        self.possible_answers = self.all_keys.clone();
    }

    fn check_guess(&self, guess: &Key) -> Result<()> {
        if guess.len() != self.length {
            return Err(Error::LengthMismatch {
                secret: self.length,
                guess: guess.len(),
            });
        }
        Ok(())
    }

    /// Keep only the candidates that would have produced `feedback` for `guess`.
    pub fn apply_feedback(&mut self, guess: &Key, feedback: Feedback) -> Result<()> {
        self.check_guess(guess)?;
        let before = self.possible_answers.len();
        self.possible_answers
            .retain(|candidate| score_symbols(candidate.symbols(), guess.symbols()) == feedback);
        tracing::debug!(
            %guess,
            %feedback,
            before,
            after = self.possible_answers.len(),
            "pruned candidates"
        );
        Ok(())
    }

    pub fn calculate_entropy_for_guess(&self, guess: &Key) -> Result<f64> {
        self.check_guess(guess)?;
        Ok(self.entropy(guess.symbols()))
    }

    fn entropy(&self, guess: &[Symbol]) -> f64 {
        let n = self.possible_answers.len() as f64;
        if n <= 1.0 {
            return 0.0;
        }

        let mut pattern_counts = vec![0u32; Feedback::num_patterns(self.length)];
        for answer in &self.possible_answers {
            let feedback = score_symbols(answer.symbols(), guess);
            pattern_counts[feedback.index(self.length)] += 1;
        }

        pattern_counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / n;
                -p * p.log2()
            })
            .sum()
    }

    pub fn find_best_guess(&self) -> Option<GuessAnalysis> {
        self.find_best_guesses(1).into_iter().next()
    }

    pub fn find_best_guesses(&self, n: usize) -> Vec<GuessAnalysis> {
        let shortcut = |entropy| {
            vec![GuessAnalysis {
                key: self.possible_answers[0].clone(),
                entropy,
                expected_remaining: 1.0,
                is_possible_answer: true,
            }]
        };
        let mut analyses = match self.possible_answers.len() {
            0 => vec![],
            1 => shortcut(0.0),
            2 => shortcut(1.0),
            _ => self.rank_guesses(),
        };
        analyses.truncate(n);
        analyses
    }

    fn rank_guesses(&self) -> Vec<GuessAnalysis> {
        let remaining = self.possible_answers.len() as f64;
        let mut analyses: Vec<GuessAnalysis> = self
            .all_keys
            .par_iter()
            .map(|key| {
                let entropy = self.entropy(key.symbols());
                GuessAnalysis {
                    key: key.clone(),
                    entropy,
                    expected_remaining: remaining / 2_f64.powf(entropy),
                    is_possible_answer: self.possible_answers.contains(key),
                }
            })
            .collect();

        analyses.sort_by(|a, b| match b.entropy.partial_cmp(&a.entropy) {
            Some(std::cmp::Ordering::Equal) => b.is_possible_answer.cmp(&a.is_possible_answer),
            Some(ord) => ord,
            None => std::cmp::Ordering::Equal,
        });
        analyses
    }

    /// Play up to `max_attempts` guesses, asking `get_feedback` to score each.
    /// Returns the guesses made with their feedback.
    pub fn solve_with_feedback<F>(&mut self, max_attempts: u32, mut get_feedback: F) -> Vec<(Key, Feedback)>
    where
        F: FnMut(&Key) -> Feedback,
    {
        let mut guesses = Vec::new();

        for _ in 0..max_attempts {
            let best = match self.find_best_guess() {
                Some(g) => g,
                None => break,
            };

            let feedback = get_feedback(&best.key);
            guesses.push((best.key.clone(), feedback));

            if feedback.is_win(self.length) {
                break;
            }

            self.possible_answers
                .retain(|candidate| score_symbols(candidate.symbols(), best.key.symbols()) == feedback);
        }

        guesses
    }

    /// Solve a round knowing the secret (for testing/benchmarking)
    pub fn solve_for_secret(&mut self, secret: &Key, max_attempts: u32) -> Result<Vec<(Key, Feedback)>> {
        self.check_guess(secret)?;
        Ok(self.solve_with_feedback(max_attempts, |guess| {
            score_symbols(secret.symbols(), guess.symbols())
        }))
    }

    /// Number of guesses needed for every possible secret, as
    /// `(guesses, secrets)` pairs sorted by guess count.
    pub fn benchmark_guess_distribution(&self, max_attempts: u32) -> Vec<(usize, usize)> {
        let guess_counts: Vec<usize> = self
            .all_keys
            .par_iter()
            .map(|secret| {
                let mut solver = self.clone();
                solver.reset();
                solver
                    .solve_with_feedback(max_attempts, |guess| {
                        score_symbols(secret.symbols(), guess.symbols())
                    })
                    .len()
            })
            .collect();

        let max_guesses = guess_counts.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_guesses + 1];
        for count in guess_counts {
            distribution[count] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

fn enumerate_keys(
    symbols: &[Symbol],
    length: usize,
    prefix: &mut Vec<Symbol>,
    used: &mut [bool],
    out: &mut Vec<Key>,
) {
    if prefix.len() == length {
        out.push(Key::new(prefix.clone()));
        return;
    }
    for i in 0..symbols.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        prefix.push(symbols[i]);
        enumerate_keys(symbols, length, prefix, used, out);
        prefix.pop();
        used[i] = false;
    }
}
