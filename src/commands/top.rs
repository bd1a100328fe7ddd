//! Opener ranking report
//!
//! Scores every vocabulary word as a first guess against the full vocabulary.

use crate::core::WeightedWord;
use crate::solver::RankedGuess;
use crate::solver::entropy::rank_guesses;
use crate::wordlists::Vocabulary;

/// Every vocabulary word ranked as an opener, best first
#[must_use]
pub fn rank_openers(vocabulary: &Vocabulary) -> Vec<RankedGuess<'_>> {
    let pool: Vec<&WeightedWord> = vocabulary.entries().iter().collect();
    let ranked = rank_guesses(&pool, &vocabulary.candidates());
    if let Some(best) = ranked.first() {
        log::debug!("best opener: {} ({:.4} bits)", best.entry.word, best.metrics.entropy);
    }
    ranked
}
