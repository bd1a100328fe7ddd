//! Decision tree evaluation
//!
//! Walks the full game tree the solver would build over a candidate set,
//! partitioning by feedback pattern at every node. The walks differ only in
//! what a leaf contributes:
//!
//! - [`TreeEvaluator::worst_case`]: candidates left unresolved at the turn limit
//! - [`TreeEvaluator::expected`]: weighted mean number of guesses to win
//! - [`TreeEvaluator::failure_rate`]: weight still ambiguous at a depth limit
//!
//! Every walk reports progress after each top-level branch, since a full
//! vocabulary takes a long time.

use super::entropy::{PatternTally, Selector};
use super::strategy::{Metric, SolverConfig};
use crate::core::{CandidateSet, Pattern, Word};
use crate::error::{Result, SolverError};
use crate::wordlists::Vocabulary;

/// Default depth limit for [`TreeEvaluator::failure_rate`]
pub const DEFAULT_FAILURE_DEPTH: usize = 3;

/// Progress observer: (completed top-level branches, total branches)
pub type Progress<'p> = &'p mut dyn FnMut(usize, usize);

/// Result of a worst-case search
#[derive(Debug, Clone, Default)]
pub struct SearchReport<'v> {
    /// Candidates that could not be told apart within the turn limit,
    /// not counting the one guessed last in each set
    pub cost: usize,
    /// Every candidate set left at the turn limit
    pub unresolved: Vec<CandidateSet<'v>>,
}

/// Evaluates the solver's decision tree over a vocabulary
pub struct TreeEvaluator<'v> {
    selector: Selector<'v>,
    word_len: usize,
    max_turns: usize,
}

impl<'v> TreeEvaluator<'v> {
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary, config: &SolverConfig) -> Self {
        Self {
            selector: Selector::new(vocabulary, config),
            word_len: vocabulary.word_len(),
            max_turns: config.max_turns,
        }
    }

    fn check_script(&self, script: &[Word]) -> Result<()> {
        match script.iter().find(|w| w.len() != self.word_len) {
            Some(bad) => Err(SolverError::InvalidWordLength {
                word: bad.text().to_string(),
                expected: self.word_len,
                actual: bad.len(),
            }),
            None => Ok(()),
        }
    }

    /// Guess for a node at `depth`: the script word if there is one, else the selector's
    fn guess_at<'a>(&'a self, candidates: &CandidateSet<'v>, script: &'a [Word], depth: usize) -> Result<&'a Word> {
        match script.get(depth - 1) {
            Some(scripted) => Ok(scripted),
            None => self.selector.choose(candidates),
        }
    }

    /// Count the candidates the solver cannot pin down within the turn limit
    ///
    /// # Errors
    ///
    /// `InvalidWordLength` for a bad script word, `EmptyCandidateSet` for an
    /// empty starting set.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::solver::{SolverConfig, TreeEvaluator};
    /// use wordle_entropy_engine::wordlists::{Vocabulary, Weighting};
    ///
    /// let vocabulary = Vocabulary::parse("abcde\nfghij\n", Weighting::Raw).unwrap();
    /// let tree = TreeEvaluator::new(&vocabulary, &SolverConfig::default());
    ///
    /// let report = tree.worst_case(&vocabulary.candidates(), &[], &mut |_, _| {}).unwrap();
    /// assert_eq!(report.cost, 0);
    /// assert!(report.unresolved.is_empty());
    /// ```
    pub fn worst_case(
        &self,
        candidates: &CandidateSet<'v>,
        script: &[Word],
        progress: Progress<'_>,
    ) -> Result<SearchReport<'v>> {
        self.check_script(script)?;
        if candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        let mut report = SearchReport::default();
        self.search(candidates, script, 1, &mut report, progress)?;
        log::debug!(
            "worst-case search done: cost {}, {} unresolved sets",
            report.cost,
            report.unresolved.len()
        );
        Ok(report)
    }

    fn search(
        &self,
        candidates: &CandidateSet<'v>,
        script: &[Word],
        depth: usize,
        report: &mut SearchReport<'v>,
        progress: Progress<'_>,
    ) -> Result<()> {
        if candidates.len() == 1 {
            return Ok(());
        }
        if depth >= self.max_turns {
            log::info!(
                "unresolved at turn {depth}: {}",
                candidates.words().map(Word::text).collect::<Vec<_>>().join(" ")
            );
            report.cost += candidates.len() - 1;
            report.unresolved.push(candidates.clone());
            return Ok(());
        }

        let guess = self.guess_at(candidates, script, depth)?;
        let branches = candidates.partition(guess);
        let total = branches.len();
        for (done, (_, branch)) in branches.iter().enumerate() {
            self.search(branch, script, depth + 1, report, &mut |_, _| {})?;
            if depth == 1 {
                progress(done + 1, total);
            }
        }
        Ok(())
    }

    /// Weighted mean number of guesses needed to win
    ///
    /// Each answer contributes the depth at which it is the only candidate
    /// left, weighted by its share of the starting set's total weight. A guess
    /// that turns out to be the answer still leaves a singleton branch one
    /// level down, so it is counted there like every other answer.
    ///
    /// # Errors
    ///
    /// `InvalidWordLength` for a bad script word, `EmptyCandidateSet` for an
    /// empty starting set.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::solver::{SolverConfig, TreeEvaluator};
    /// use wordle_entropy_engine::wordlists::{Vocabulary, Weighting};
    ///
    /// let vocabulary = Vocabulary::parse("abcde\nfghij\n", Weighting::Raw).unwrap();
    /// let tree = TreeEvaluator::new(&vocabulary, &SolverConfig::default());
    ///
    /// // The first guess splits the pair; each answer is alone at depth 2
    /// let mean = tree.expected(&vocabulary.candidates(), &[], &mut |_, _| {}).unwrap();
    /// assert!((mean - 2.0).abs() < 1e-12);
    /// ```
    pub fn expected(&self, candidates: &CandidateSet<'v>, script: &[Word], progress: Progress<'_>) -> Result<f64> {
        self.check_script(script)?;
        let total = candidates.total_weight();
        if candidates.is_empty() || total <= 0.0 {
            return Err(SolverError::EmptyCandidateSet);
        }

        let mean = self.mean_turns(candidates, script, 1, total, progress)?;
        log::debug!("expected guesses: {mean:.4}");
        Ok(mean)
    }

    fn mean_turns(
        &self,
        candidates: &CandidateSet<'v>,
        script: &[Word],
        depth: usize,
        total: f64,
        progress: Progress<'_>,
    ) -> Result<f64> {
        if let Some(only) = candidates.single() {
            return Ok(depth as f64 * only.weight / total);
        }

        let guess = self.guess_at(candidates, script, depth)?;
        let branches = candidates.partition(guess);
        let count = branches.len();
        let mut sum = 0.0;
        for (done, (_, branch)) in branches.iter().enumerate() {
            sum += self.mean_turns(branch, script, depth + 1, total, &mut |_, _| {})?;
            if depth == 1 {
                progress(done + 1, count);
            }
        }
        Ok(sum)
    }

    /// Share of the starting weight still ambiguous after `depth_limit - 1` guesses
    ///
    /// # Errors
    ///
    /// `EmptyCandidateSet` for an empty starting set.
    pub fn failure_rate(&self, candidates: &CandidateSet<'v>, depth_limit: usize, progress: Progress<'_>) -> Result<f64> {
        let total = candidates.total_weight();
        if candidates.is_empty() || total <= 0.0 {
            return Err(SolverError::EmptyCandidateSet);
        }

        let rate = self.ambiguous_weight(candidates, 1, depth_limit, total, progress)?;
        log::debug!("failure rate at depth {depth_limit}: {rate:.4}");
        Ok(rate)
    }

    fn ambiguous_weight(
        &self,
        candidates: &CandidateSet<'v>,
        depth: usize,
        depth_limit: usize,
        total: f64,
        progress: Progress<'_>,
    ) -> Result<f64> {
        if candidates.len() == 1 {
            return Ok(0.0);
        }
        if depth >= depth_limit {
            return Ok(candidates.total_weight() / total);
        }

        let guess = self.selector.choose(candidates)?;
        let branches = candidates.partition(guess);
        let count = branches.len();
        let mut sum = 0.0;
        for (done, (_, branch)) in branches.iter().enumerate() {
            sum += self.ambiguous_weight(branch, depth + 1, depth_limit, total, &mut |_, _| {})?;
            if depth == 1 {
                progress(done + 1, count);
            }
        }
        Ok(sum)
    }
}

/// Score a fixed guess sequence
///
/// Partitions `candidates` by each guess in turn and sums `metric` for the last
/// guess over every branch the earlier guesses leave. With no guesses at all the
/// candidates form a single partition.
///
/// # Errors
///
/// `EmptyCandidateSet` for an empty starting set, `InvalidWordLength` if a
/// guess differs in length from the candidates.
///
/// # Examples
/// ```
/// use wordle_entropy_engine::core::Word;
/// use wordle_entropy_engine::solver::{Metric, evaluate_sequence};
/// use wordle_entropy_engine::wordlists::{Vocabulary, Weighting};
///
/// let vocabulary = Vocabulary::parse("slate\nirate\ncrate\ngrate\n", Weighting::Raw).unwrap();
/// let guesses = vec![Word::new("crane").unwrap()];
///
/// let buckets = evaluate_sequence(&vocabulary.candidates(), &guesses, Metric::BucketCount).unwrap();
/// assert_eq!(buckets, 3.0);
/// ```
pub fn evaluate_sequence(candidates: &CandidateSet<'_>, guesses: &[Word], metric: Metric) -> Result<f64> {
    let Some(first) = candidates.iter().next() else {
        return Err(SolverError::EmptyCandidateSet);
    };
    let word_len = first.word.len();
    if let Some(bad) = guesses.iter().find(|w| w.len() != word_len) {
        return Err(SolverError::InvalidWordLength {
            word: bad.text().to_string(),
            expected: word_len,
            actual: bad.len(),
        });
    }

    let mut tally = PatternTally::new(word_len);
    Ok(sequence_score(candidates, guesses, metric, &mut tally))
}

fn sequence_score(candidates: &CandidateSet<'_>, guesses: &[Word], metric: Metric, tally: &mut PatternTally) -> f64 {
    match guesses {
        [] => {
            tally.clear();
            for entry in candidates.iter() {
                tally.add(Pattern::perfect(entry.word.len()), entry.weight);
            }
            metric.score(tally.buckets())
        }
        [last] => {
            tally.fill(last, candidates);
            metric.score(tally.buckets())
        }
        [next, rest @ ..] => candidates
            .partition(next)
            .iter()
            .map(|(_, branch)| sequence_score(branch, rest, metric, tally))
            .sum(),
    }
}
