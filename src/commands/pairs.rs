//! Best two-word opening
//!
//! Tries every unordered pair of vocabulary words as the first two guesses and
//! keeps the pair whose second guess best splits what the first leaves. The
//! cost is quadratic in the vocabulary times a partition per pair, so the
//! search runs in parallel over the first word.

use crate::core::{CandidateSet, Pattern, WeightedWord, Word};
use crate::solver::Metric;
use crate::solver::entropy::PatternTally;
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Ordering;

/// The winning opening
#[derive(Debug, Clone, Copy)]
pub struct OpenerPair<'v> {
    /// Guessed first; the more common word of the pair
    pub first: &'v WeightedWord,
    pub second: &'v WeightedWord,
    /// Metric of `second` summed over the partitions `first` leaves
    pub score: f64,
}

/// Vocabulary positions of the two words with their score
type Scored = (usize, usize, f64);

/// Higher score wins; ties go to the pair earlier in vocabulary order
fn better(a: Scored, b: Scored) -> Scored {
    match a.2.total_cmp(&b.2) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal if (a.0, a.1) <= (b.0, b.1) => a,
        Ordering::Equal => b,
    }
}

fn pair_score(branches: &[(Pattern, CandidateSet<'_>)], second: &Word, metric: Metric, tally: &mut PatternTally) -> f64 {
    branches
        .iter()
        .map(|(_, branch)| {
            tally.fill(second, branch);
            metric.score(tally.buckets())
        })
        .sum()
}

fn opener_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} pairs [{bar:40.cyan/blue}] {pos}/{len} openers ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    bar
}

/// Best pair of opening guesses under `metric`
///
/// Returns `None` when the vocabulary has fewer than two words.
#[must_use]
pub fn best_pair(vocabulary: &Vocabulary, metric: Metric) -> Option<OpenerPair<'_>> {
    let entries = vocabulary.entries();
    let candidates = vocabulary.candidates();
    let bar = opener_bar(entries.len());

    let best = (0..entries.len())
        .into_par_iter()
        .map_init(
            || PatternTally::new(vocabulary.word_len()),
            |tally, i| {
                let branches = candidates.partition(&entries[i].word);
                let best = ((i + 1)..entries.len())
                    .map(|j| (i, j, pair_score(&branches, &entries[j].word, metric, tally)))
                    .reduce(better);
                bar.inc(1);
                best
            },
        )
        .flatten()
        .reduce_with(better);
    bar.finish_and_clear();

    let (i, j, score) = best?;
    log::debug!("best pair {} / {} ({score:.4})", entries[i].word, entries[j].word);
    Some(OpenerPair {
        first: &entries[i],
        second: &entries[j],
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::evaluate_sequence;
    use crate::wordlists::Weighting;

    fn vocabulary(text: &str) -> Vocabulary {
        Vocabulary::parse(text, Weighting::Raw).unwrap()
    }

    #[test]
    fn disjoint_words_tie_to_vocabulary_order() {
        // Every pair isolates one word and splits the other two
        let vocabulary = vocabulary("abcde\nfghij\nklmno\n");
        let pair = best_pair(&vocabulary, Metric::BucketCount).unwrap();

        assert_eq!(pair.first.word.text(), "abcde");
        assert_eq!(pair.second.word.text(), "fghij");
        assert!((pair.score - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn matches_exhaustive_sequence_scores() {
        let vocabulary = vocabulary("crane 9\nslate 7\nirate 5\ncrate 3\ngrate 2\nlimbo 2\nmambo 1\n");
        let candidates = vocabulary.candidates();
        let entries = vocabulary.entries();

        for metric in [Metric::Entropy, Metric::MaxBucket, Metric::BucketCount] {
            let mut expected: Option<(f64, &str, &str)> = None;
            for (i, first) in entries.iter().enumerate() {
                for second in &entries[i + 1..] {
                    let guesses = [first.word.clone(), second.word.clone()];
                    let score = evaluate_sequence(&candidates, &guesses, metric).unwrap();
                    if expected.is_none_or(|(best, _, _)| score > best) {
                        expected = Some((score, first.word.text(), second.word.text()));
                    }
                }
            }

            let pair = best_pair(&vocabulary, metric).unwrap();
            let (score, first, second) = expected.unwrap();
            assert_eq!((pair.first.word.text(), pair.second.word.text()), (first, second), "{metric:?}");
            assert!((pair.score - score).abs() < 1e-9);
        }
    }

    #[test]
    fn needs_two_words() {
        let vocabulary = vocabulary("crane\n");
        assert!(best_pair(&vocabulary, Metric::Entropy).is_none());
    }
}
