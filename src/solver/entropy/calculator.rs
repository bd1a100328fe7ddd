//! Pattern tallies and guess evaluation
//!
//! Given a guess pool and a candidate set, scores every guess by how it
//! partitions the candidates. This is the hot loop of the whole engine: one
//! tally buffer is allocated per worker thread and reused for every guess.

use crate::core::{CandidateSet, Pattern, WeightedWord, Word};
use crate::solver::strategy::{Metric, shannon_entropy};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Dense indexing covers 4^8 packed values; longer words fall back to a hash map
const DENSE_MAX_LEN: usize = 8;

/// Candidates sharing one feedback pattern
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    /// Sum of member weights
    pub weight: f64,
    /// Number of members
    pub count: usize,
}

#[derive(Debug)]
enum SlotIndex {
    /// Packed pattern value -> bucket position + 1 (0 = unused)
    Dense(Vec<u32>),
    Sparse(FxHashMap<u32, u32>),
}

/// Reusable accumulator of bucket weights keyed by pattern
///
/// Buckets are kept in order of first appearance.
#[derive(Debug)]
pub struct PatternTally {
    index: SlotIndex,
    keys: Vec<u32>,
    buckets: Vec<Bucket>,
}

impl PatternTally {
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        let index = if word_len <= DENSE_MAX_LEN {
            SlotIndex::Dense(vec![0; 1 << (2 * word_len)])
        } else {
            SlotIndex::Sparse(FxHashMap::default())
        };
        Self {
            index,
            keys: Vec::new(),
            buckets: Vec::new(),
        }
    }

    /// Forget all buckets, keeping the allocations
    pub fn clear(&mut self) {
        match &mut self.index {
            SlotIndex::Dense(slots) => {
                for &key in &self.keys {
                    slots[key as usize] = 0;
                }
            }
            SlotIndex::Sparse(map) => map.clear(),
        }
        self.keys.clear();
        self.buckets.clear();
    }

    pub fn add(&mut self, pattern: Pattern, weight: f64) {
        let key = pattern.value();
        let next = self.buckets.len() as u32 + 1;
        let slot = match &mut self.index {
            SlotIndex::Dense(slots) => &mut slots[key as usize],
            SlotIndex::Sparse(map) => map.entry(key).or_insert(0),
        };
        if *slot == 0 {
            *slot = next;
            self.keys.push(key);
            self.buckets.push(Bucket::default());
        }
        let bucket = &mut self.buckets[*slot as usize - 1];
        bucket.weight += weight;
        bucket.count += 1;
    }

    /// Tally `guess` against every candidate
    pub fn fill(&mut self, guess: &Word, candidates: &CandidateSet<'_>) {
        self.clear();
        for entry in candidates.iter() {
            self.add(Pattern::calculate(guess, &entry.word), entry.weight);
        }
    }

    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

/// The score of one pool word
#[derive(Debug, Clone, Copy)]
pub struct GuessScore<'a> {
    pub entry: &'a WeightedWord,
    pub score: f64,
}

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct patterns
    pub patterns: usize,
}

/// Score every pool word by entropy against `candidates`
///
/// Returns one score per pool word, in pool order.
///
/// # Examples
/// ```
/// use wordle_entropy_engine::core::{CandidateSet, WeightedWord, Word};
/// use wordle_entropy_engine::solver::entropy::evaluate;
///
/// let entries: Vec<WeightedWord> = ["slate", "irate", "zzzzz"]
///     .into_iter()
///     .map(|t| WeightedWord::new(Word::new(t).unwrap(), 1.0))
///     .collect();
/// let pool: Vec<&WeightedWord> = entries.iter().collect();
/// let candidates: CandidateSet = entries[..2].iter().collect();
///
/// let scores = evaluate(&pool, &candidates);
/// assert!((scores[0].score - 1.0).abs() < 1e-9); // slate splits 1/1
/// assert!(scores[2].score.abs() < 1e-9); // zzzzz learns nothing
/// ```
#[must_use]
pub fn evaluate<'a>(pool: &[&'a WeightedWord], candidates: &CandidateSet<'_>) -> Vec<GuessScore<'a>> {
    evaluate_with(pool, candidates, Metric::Entropy)
}

/// Score every pool word with `metric`, in parallel
///
/// Each score is computed sequentially over the candidates in set order, so the
/// result does not depend on thread scheduling.
#[must_use]
pub fn evaluate_with<'a>(
    pool: &[&'a WeightedWord],
    candidates: &CandidateSet<'_>,
    metric: Metric,
) -> Vec<GuessScore<'a>> {
    let word_len = candidates.iter().next().map_or(0, |entry| entry.word.len());

    pool.par_iter()
        .map_init(
            || PatternTally::new(word_len),
            |tally, &entry| {
                tally.fill(&entry.word, candidates);
                GuessScore {
                    entry,
                    score: metric.score(tally.buckets()),
                }
            },
        )
        .collect()
}

/// Score a single guess with `metric`
#[must_use]
pub fn score_guess(guess: &Word, candidates: &CandidateSet<'_>, metric: Metric) -> f64 {
    let mut tally = PatternTally::new(guess.len());
    tally.fill(guess, candidates);
    metric.score(tally.buckets())
}

/// Calculate comprehensive metrics for a guess
///
/// Entropy and expected size use weights; the partition sizes count words.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &CandidateSet<'_>) -> GuessMetrics {
    let mut tally = PatternTally::new(guess.len());
    tally.fill(guess, candidates);
    metrics_from(tally.buckets())
}

fn metrics_from(buckets: &[Bucket]) -> GuessMetrics {
    GuessMetrics {
        entropy: shannon_entropy(buckets),
        expected_remaining: -Metric::ExpectedSize.score(buckets),
        max_partition: buckets.iter().map(|b| b.count).max().unwrap_or(0),
        patterns: buckets.len(),
    }
}

/// A pool word with its metrics, for ranking reports
#[derive(Debug, Clone, Copy)]
pub struct RankedGuess<'a> {
    pub entry: &'a WeightedWord,
    pub metrics: GuessMetrics,
}

/// Metrics for every pool word, best opener first
///
/// Ordered by entropy, then more distinct patterns, then a smaller worst case,
/// then the word itself.
#[must_use]
pub fn rank_guesses<'a>(pool: &[&'a WeightedWord], candidates: &CandidateSet<'_>) -> Vec<RankedGuess<'a>> {
    let word_len = candidates.iter().next().map_or(0, |entry| entry.word.len());

    let mut ranked: Vec<RankedGuess<'a>> = pool
        .par_iter()
        .map_init(
            || PatternTally::new(word_len),
            |tally, &entry| {
                tally.fill(&entry.word, candidates);
                RankedGuess {
                    entry,
                    metrics: metrics_from(tally.buckets()),
                }
            },
        )
        .collect();

    ranked.sort_by(|a, b| {
        b.metrics
            .entropy
            .total_cmp(&a.metrics.entropy)
            .then(b.metrics.patterns.cmp(&a.metrics.patterns))
            .then(a.metrics.max_partition.cmp(&b.metrics.max_partition))
            .then_with(|| a.entry.word.cmp(&b.entry.word))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[&str]) -> Vec<WeightedWord> {
        words
            .iter()
            .map(|t| WeightedWord::new(Word::new(*t).unwrap(), 1.0))
            .collect()
    }

    #[test]
    fn tally_groups_by_pattern() {
        let entries = entries(&["slate", "crate", "irate", "grate"]);
        let candidates: CandidateSet = entries.iter().collect();
        let guess = Word::new("crane").unwrap();

        let mut tally = PatternTally::new(5);
        tally.fill(&guess, &candidates);

        // irate and grate share -gg-g
        assert_eq!(tally.buckets().len(), 3);
        assert_eq!(tally.buckets().iter().map(|b| b.count).sum::<usize>(), 4);

        tally.clear();
        assert!(tally.buckets().is_empty());
        tally.fill(&guess, &candidates);
        assert_eq!(tally.buckets().len(), 3);
    }

    #[test]
    fn sparse_tally_for_long_words() {
        let entries = entries(&["abcdefghij", "abcdefghik", "zzzzzzzzzz"]);
        let candidates: CandidateSet = entries.iter().collect();
        let guess = Word::new("abcdefghij").unwrap();

        let mut tally = PatternTally::new(10);
        tally.fill(&guess, &candidates);
        assert_eq!(tally.buckets().len(), 3);
    }

    #[test]
    fn entropy_all_same_pattern() {
        let entries = entries(&["aaaaa", "bbbbb", "ccccc"]);
        let candidates: CandidateSet = entries.iter().collect();
        let guess = Word::new("zzzzz").unwrap();

        assert!(score_guess(&guess, &candidates, Metric::Entropy).abs() < 1e-12);
    }

    #[test]
    fn singleton_split_is_maximal() {
        let entries = entries(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);
        let candidates: CandidateSet = entries.iter().collect();
        let pool_entries = self::entries(&["abcdz", "abzzz", "zzzzz"]);
        let pool: Vec<&WeightedWord> = pool_entries.iter().collect();

        let scores = evaluate(&pool, &candidates);
        // abcdz separates all four: log2(4) = 2 bits
        assert!((scores[0].score - 2.0).abs() < 1e-9);
        for score in &scores {
            assert!(score.score >= 0.0);
            assert!(score.score <= scores[0].score + 1e-12);
        }
    }

    #[test]
    fn evaluation_uses_weights() {
        let mut entries = entries(&["slate", "zzzzz"]);
        entries[0].weight = 3.0;
        let candidates: CandidateSet = entries.iter().collect();
        let guess = Word::new("slate").unwrap();

        let entropy = score_guess(&guess, &candidates, Metric::Entropy);
        assert!((entropy - 0.811_278).abs() < 1e-5);
    }

    #[test]
    fn evaluate_preserves_pool_order() {
        let entries = entries(&["crane", "slate", "irate", "zzzzz"]);
        let pool: Vec<&WeightedWord> = entries.iter().collect();
        let candidates: CandidateSet = entries[..3].iter().collect();

        let scores = evaluate_with(&pool, &candidates, Metric::MaxBucket);
        let order: Vec<&str> = scores.iter().map(|s| s.entry.word.text()).collect();
        assert_eq!(order, vec!["crane", "slate", "irate", "zzzzz"]);
        assert!((scores[3].score + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_and_ranking() {
        let entries = entries(&["slate", "irate", "crate", "grate", "zzzzz"]);
        let pool: Vec<&WeightedWord> = entries.iter().collect();
        let candidates: CandidateSet = entries[..4].iter().collect();

        let metrics = calculate_metrics(&entries[4].word, &candidates);
        assert_eq!(metrics.patterns, 1);
        assert_eq!(metrics.max_partition, 4);
        assert!((metrics.expected_remaining - 4.0).abs() < 1e-12);

        let ranked = rank_guesses(&pool, &candidates);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked.last().map(|r| r.entry.word.text()), Some("zzzzz"));
        for pair in ranked.windows(2) {
            assert!(pair[0].metrics.entropy >= pair[1].metrics.entropy);
        }
    }
}
