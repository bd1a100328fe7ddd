//! Adversarial feedback
//!
//! Answers a guess with the pattern whose consistent candidates carry the most
//! total surprisal, so the solver is left with the largest or least likely
//! remaining mass.

use crate::core::{CandidateSet, Pattern, Word};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;

/// The least helpful pattern for `guess` that some candidate still produces
///
/// Each candidate contributes its surprisal `-ln(weight / total)` to the pattern
/// it would produce; the pattern with the largest sum is returned. Equal sums go
/// to the larger packed pattern value.
///
/// `total` is the weight of the whole vocabulary, not of `candidates`: a rare
/// word stays rare however far the set has been narrowed.
///
/// # Errors
///
/// Returns `EmptyCandidateSet` when there are no candidates.
///
/// # Examples
/// ```
/// use wordle_entropy_engine::core::{CandidateSet, WeightedWord, Word};
/// use wordle_entropy_engine::solver::adversary::worst;
///
/// let entries: Vec<WeightedWord> = ["crane", "slate", "plate", "grate"]
///     .into_iter()
///     .map(|t| WeightedWord::new(Word::new(t).unwrap(), 1.0))
///     .collect();
/// let candidates: CandidateSet = entries.iter().collect();
///
/// // Guessing crane: the adversary never admits it was right
/// let pattern = worst(&candidates, &entries[0].word, 4.0).unwrap();
/// assert!(!pattern.is_perfect());
/// ```
pub fn worst(candidates: &CandidateSet<'_>, guess: &Word, total: f64) -> Result<Pattern> {
    let mut debt: FxHashMap<Pattern, f64> = FxHashMap::default();

    for entry in candidates.iter() {
        let pattern = Pattern::calculate(guess, &entry.word);
        *debt.entry(pattern).or_insert(0.0) += -(entry.weight / total).ln();
    }

    debt.into_iter()
        .max_by(|(p1, d1), (p2, d2)| d1.total_cmp(d2).then(p1.value().cmp(&p2.value())))
        .map(|(pattern, _)| pattern)
        .ok_or(SolverError::EmptyCandidateSet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WeightedWord;

    fn entries(words: &[(&str, f64)]) -> Vec<WeightedWord> {
        words
            .iter()
            .map(|&(t, weight)| WeightedWord::new(Word::new(t).unwrap(), weight))
            .collect()
    }

    #[test]
    fn picks_largest_group_for_equal_weights() {
        let entries = entries(&[("irate", 1.0), ("grate", 1.0), ("crate", 1.0), ("slate", 1.0)]);
        let candidates: CandidateSet = entries.iter().collect();
        let guess = Word::new("crane").unwrap();

        // irate and grate share -gg-g; each singleton carries less surprisal
        let pattern = worst(&candidates, &guess, candidates.total_weight()).unwrap();
        assert_eq!(pattern.to_text(), "-gg-g");
    }

    #[test]
    fn rare_words_weigh_more() {
        // slate alone is rare enough to outweigh the two common words together
        let entries = entries(&[("irate", 100.0), ("grate", 100.0), ("slate", 1.0)]);
        let candidates: CandidateSet = entries.iter().collect();
        let guess = Word::new("crane").unwrap();

        let pattern = worst(&candidates, &guess, candidates.total_weight()).unwrap();
        assert_eq!(pattern, Pattern::calculate(&guess, &entries[2].word));
    }

    #[test]
    fn surprisal_uses_vocabulary_total() {
        // zzzzz has been filtered out but still dominates the vocabulary weight
        let entries = entries(&[("zzzzz", 979.0), ("irate", 10.0), ("grate", 10.0), ("slate", 1.0)]);
        let candidates: CandidateSet = entries[1..].iter().collect();
        let guess = Word::new("crane").unwrap();

        // Against 1000 the two common words outweigh slate; against 21 they would not
        let pattern = worst(&candidates, &guess, 1000.0).unwrap();
        assert_eq!(pattern.to_text(), "-gg-g");
        let narrowed = worst(&candidates, &guess, candidates.total_weight()).unwrap();
        assert_eq!(narrowed.to_text(), "--g-g");
    }

    #[test]
    fn pattern_is_always_consistent() {
        let entries = entries(&[("limbo", 2.0), ("mambo", 1.0), ("jumbo", 4.0), ("hello", 1.0)]);
        let candidates: CandidateSet = entries.iter().collect();

        for guess in ["phono", "limbo", "zzzzz", "could"] {
            let guess = Word::new(guess).unwrap();
            let pattern = worst(&candidates, &guess, candidates.total_weight()).unwrap();
            assert!(!candidates.filter(&guess, pattern).is_empty());
        }
    }

    #[test]
    fn single_candidate_forces_its_pattern() {
        let entries = entries(&[("limbo", 1.0)]);
        let candidates: CandidateSet = entries.iter().collect();

        let pattern = worst(&candidates, &entries[0].word, 1.0).unwrap();
        assert!(pattern.is_perfect());
    }

    #[test]
    fn deterministic_on_ties() {
        let entries = entries(&[("aaaab", 1.0), ("aaaac", 1.0)]);
        let candidates: CandidateSet = entries.iter().collect();
        let guess = Word::new("zzzzz").unwrap();

        let first = worst(&candidates, &guess, candidates.total_weight()).unwrap();
        assert_eq!(worst(&candidates, &guess, candidates.total_weight()).unwrap(), first);
    }

    #[test]
    fn empty_candidates_rejected() {
        let guess = Word::new("crane").unwrap();
        assert!(matches!(
            worst(&CandidateSet::default(), &guess, 1.0),
            Err(SolverError::EmptyCandidateSet)
        ));
    }
}
