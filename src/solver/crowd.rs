//! Deduction from shared score grids
//!
//! Players often share only the colors of their game, never the guesses. Given
//! several such grids for the same day, this finds the hidden words that could
//! have produced all of them.

use crate::core::{CandidateSet, Pattern, WeightedWord};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A hidden word consistent with every grid
#[derive(Debug, Clone, Copy)]
pub struct CrowdMatch<'v> {
    pub entry: &'v WeightedWord,
    /// Weight of the guesses that explain the grids, scaled by how often each
    /// pattern was shared
    pub plausibility: f64,
}

/// Pattern counts across all grids
#[derive(Debug, Default)]
struct GridDemand {
    /// Most times the pattern appears in a single grid
    required: FxHashMap<Pattern, usize>,
    /// Times the pattern appears overall
    seen: FxHashMap<Pattern, usize>,
}

impl GridDemand {
    fn new(grids: &[Vec<Pattern>]) -> Self {
        let mut demand = Self::default();
        for grid in grids {
            let mut local: FxHashMap<Pattern, usize> = FxHashMap::default();
            for &pattern in grid {
                *local.entry(pattern).or_insert(0) += 1;
                *demand.seen.entry(pattern).or_insert(0) += 1;
            }
            for (pattern, count) in local {
                let needed = demand.required.entry(pattern).or_insert(0);
                *needed = (*needed).max(count);
            }
        }
        demand
    }
}

/// Hidden words that could have produced every grid, most plausible first
///
/// Each row of a grid is the pattern of some guess the player made, so the
/// hidden word must have, for every pattern, at least as many distinct
/// candidates scoring that pattern against it as any one grid shows. Guesses
/// are drawn from `candidates` as well.
///
/// # Examples
/// ```
/// use wordle_entropy_engine::core::Pattern;
/// use wordle_entropy_engine::solver::crowd::crowd_filter;
/// use wordle_entropy_engine::wordlists::{Vocabulary, Weighting};
///
/// let vocabulary = Vocabulary::parse("crane\nslate\nirate\ncrate\ngrate\n", Weighting::Raw).unwrap();
/// let grid = vec![
///     Pattern::from_text("--ggg", 5).unwrap(),
///     Pattern::from_text("ggggg", 5).unwrap(),
/// ];
///
/// let matches = crowd_filter(&vocabulary.candidates(), &[grid]);
/// // No word scores --ggg against crane
/// assert!(matches.iter().all(|m| m.entry.word.text() != "crane"));
/// assert_eq!(matches.len(), 4);
/// ```
#[must_use]
pub fn crowd_filter<'v>(candidates: &CandidateSet<'v>, grids: &[Vec<Pattern>]) -> Vec<CrowdMatch<'v>> {
    let demand = GridDemand::new(grids);

    let mut matches: Vec<CrowdMatch<'v>> = candidates
        .members()
        .par_iter()
        .filter_map(|&hidden| {
            let mut found: FxHashMap<Pattern, usize> = FxHashMap::default();
            let mut plausibility = 0.0;
            for guess in candidates.iter() {
                let pattern = Pattern::calculate(&guess.word, &hidden.word);
                if let Some(&shared) = demand.seen.get(&pattern) {
                    *found.entry(pattern).or_insert(0) += 1;
                    plausibility += guess.weight * shared as f64;
                }
            }
            demand
                .required
                .iter()
                .all(|(pattern, &needed)| found.get(pattern).copied().unwrap_or(0) >= needed)
                .then_some(CrowdMatch {
                    entry: hidden,
                    plausibility,
                })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.plausibility
            .total_cmp(&a.plausibility)
            .then_with(|| a.entry.word.cmp(&b.entry.word))
    });
    log::debug!("{} of {} words fit {} grids", matches.len(), candidates.len(), grids.len());
    matches
}
