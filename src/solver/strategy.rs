//! Guess scoring metrics and solver configuration
//!
//! Every metric reads the same pattern tally and is "higher is better", so the
//! selector's tie-break order never depends on which one is in use.

use super::entropy::Bucket;

/// Default turn budget
pub const DEFAULT_MAX_TURNS: usize = 6;

/// How a guess's pattern partition is scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Metric {
    /// Shannon entropy of the weighted pattern distribution, in bits
    #[default]
    Entropy,
    /// Negated expected number of candidates left after the guess
    ExpectedSize,
    /// Negated size of the largest partition (minimax)
    MaxBucket,
    /// Number of distinct patterns
    BucketCount,
}

impl Metric {
    /// Score a partition described by its buckets
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::solver::{Bucket, Metric};
    ///
    /// let halves = [Bucket { weight: 1.0, count: 1 }, Bucket { weight: 1.0, count: 1 }];
    /// assert!((Metric::Entropy.score(&halves) - 1.0).abs() < 1e-12);
    /// assert_eq!(Metric::MaxBucket.score(&halves), -1.0);
    /// assert_eq!(Metric::BucketCount.score(&halves), 2.0);
    /// ```
    #[must_use]
    pub fn score(self, buckets: &[Bucket]) -> f64 {
        match self {
            Self::Entropy => shannon_entropy(buckets),
            Self::ExpectedSize => {
                let total: f64 = buckets.iter().map(|b| b.weight).sum();
                if total <= 0.0 {
                    return 0.0;
                }
                -buckets
                    .iter()
                    .map(|b| b.weight / total * b.count as f64)
                    .sum::<f64>()
            }
            Self::MaxBucket => -(buckets.iter().map(|b| b.count).max().unwrap_or(0) as f64),
            Self::BucketCount => buckets.iter().filter(|b| b.count > 0).count() as f64,
        }
    }
}

/// Calculate Shannon entropy from a weighted pattern distribution
///
/// H = -Σ p * log₂(p), with p the bucket's share of the total weight.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket) or no buckets
/// - Maximized when every bucket holds the same weight
/// - Never negative
#[must_use]
pub fn shannon_entropy(buckets: &[Bucket]) -> f64 {
    let total: f64 = buckets.iter().map(|b| b.weight).sum();

    if total <= 0.0 {
        return 0.0;
    }

    let entropy: f64 = buckets
        .iter()
        .filter(|b| b.weight > 0.0)
        .map(|b| {
            let p = b.weight / total;
            -p * p.log2()
        })
        .sum();

    // A single bucket sums to -0.0
    entropy.max(0.0)
}

/// Explicit solver settings, passed to every component that selects guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub metric: Metric,
    /// Restrict the guess pool to the current candidates
    pub hard_mode: bool,
    pub max_turns: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Entropy,
            hard_mode: false,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub const fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}
