//! Entropy-based guess selection
//!
//! Picks the guess that maximizes the configured metric, breaking ties toward
//! words that could be the answer, then toward more common words, then toward
//! the alphabetically first word.

use super::calculator::{GuessScore, evaluate_with};
use crate::core::{CandidateSet, WeightedWord, Word};
use crate::error::{Result, SolverError};
use crate::solver::strategy::{Metric, SolverConfig};
use crate::wordlists::Vocabulary;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Chooses guesses from a fixed vocabulary
#[derive(Debug, Clone)]
pub struct Selector<'v> {
    pool: Vec<&'v WeightedWord>,
    metric: Metric,
    hard_mode: bool,
}

impl<'v> Selector<'v> {
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary, config: &SolverConfig) -> Self {
        Self {
            pool: vocabulary.entries().iter().collect(),
            metric: config.metric,
            hard_mode: config.hard_mode,
        }
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Best guess for the current candidates
    ///
    /// A single remaining candidate is returned without evaluation. Otherwise
    /// the pool (or the candidates themselves in hard mode) is scored and the
    /// best word wins, with all scores computed before any comparison.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCandidateSet` if there is nothing left to guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::solver::{Selector, SolverConfig};
    /// use wordle_entropy_engine::wordlists::{Vocabulary, Weighting};
    ///
    /// let vocabulary = Vocabulary::parse("slate\nirate\ncrate\nzzzzz\n", Weighting::Raw).unwrap();
    /// let selector = Selector::new(&vocabulary, &SolverConfig::default());
    ///
    /// let guess = selector.choose(&vocabulary.candidates()).unwrap();
    /// assert_ne!(guess.text(), "zzzzz");
    /// ```
    pub fn choose(&self, candidates: &CandidateSet<'v>) -> Result<&'v Word> {
        self.choose_in(candidates, self.hard_mode)
    }

    /// Best guess with an explicit hard-mode choice
    ///
    /// # Errors
    ///
    /// Returns `EmptyCandidateSet` if there is nothing left to guess.
    pub fn choose_in(&self, candidates: &CandidateSet<'v>, hard_mode: bool) -> Result<&'v Word> {
        if candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }
        if let Some(only) = candidates.single() {
            return Ok(&only.word);
        }

        let pool: &[&'v WeightedWord] = if hard_mode {
            candidates.members()
        } else {
            &self.pool
        };

        let scores = evaluate_with(pool, candidates, self.metric);
        let members: FxHashSet<&Word> = candidates.words().collect();

        scores
            .iter()
            .max_by(|a, b| rank(a, b, &members))
            .map(|best| {
                let entry: &'v WeightedWord = best.entry;
                &entry.word
            })
            .ok_or(SolverError::EmptyCandidateSet)
    }
}

/// Total order over scored guesses; the greater one is the better guess
fn rank(a: &GuessScore<'_>, b: &GuessScore<'_>, members: &FxHashSet<&Word>) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| members.contains(&a.entry.word).cmp(&members.contains(&b.entry.word)))
        .then_with(|| a.entry.weight.total_cmp(&b.entry.weight))
        .then_with(|| b.entry.word.cmp(&a.entry.word))
}
