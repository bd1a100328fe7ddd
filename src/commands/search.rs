//! Decision tree commands
//!
//! Worst-case search, expected guess count, failure rate and fixed-sequence
//! evaluation over the whole vocabulary. The tree walks can take minutes on a
//! full word list, so each one drives a progress bar over the top-level
//! branches.

use crate::error::Result;
use crate::solver::{Metric, SearchReport, SolverConfig, TreeEvaluator, evaluate_sequence};
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};

fn branch_bar(label: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} branches ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    bar.set_message(label);
    bar
}

/// Run a tree walk with a progress bar attached
fn with_progress<T>(label: &'static str, walk: impl FnOnce(&mut dyn FnMut(usize, usize)) -> Result<T>) -> Result<T> {
    let bar = branch_bar(label);
    let result = walk(&mut |done, total| {
        bar.set_length(total as u64);
        bar.set_position(done as u64);
    });
    bar.finish_and_clear();
    result
}

/// Worst-case search from the full vocabulary
///
/// # Errors
///
/// Returns an error if a script word is invalid or has the wrong length.
pub fn run_search<'v, S: AsRef<str>>(
    vocabulary: &'v Vocabulary,
    config: &SolverConfig,
    script: &[S],
) -> Result<SearchReport<'v>> {
    let script = vocabulary.words(script)?;
    let tree = TreeEvaluator::new(vocabulary, config);
    let candidates = vocabulary.candidates();

    with_progress("search", |progress| tree.worst_case(&candidates, &script, progress))
}

/// Expected number of guesses from the full vocabulary
///
/// # Errors
///
/// Returns an error if a script word is invalid or has the wrong length.
pub fn run_expected<S: AsRef<str>>(vocabulary: &Vocabulary, config: &SolverConfig, script: &[S]) -> Result<f64> {
    let script = vocabulary.words(script)?;
    let tree = TreeEvaluator::new(vocabulary, config);
    let candidates = vocabulary.candidates();

    with_progress("expected", |progress| tree.expected(&candidates, &script, progress))
}

/// Weight left ambiguous at `depth_limit`
///
/// # Errors
///
/// Returns an error if the vocabulary has no weight.
pub fn run_failure(vocabulary: &Vocabulary, config: &SolverConfig, depth_limit: usize) -> Result<f64> {
    let tree = TreeEvaluator::new(vocabulary, config);
    let candidates = vocabulary.candidates();

    with_progress("failure", |progress| tree.failure_rate(&candidates, depth_limit, progress))
}

/// Score a fixed guess sequence with `metric`
///
/// # Errors
///
/// Returns an error if a guess is invalid or has the wrong length.
pub fn run_sequence<S: AsRef<str>>(vocabulary: &Vocabulary, metric: Metric, guesses: &[S]) -> Result<f64> {
    let guesses = vocabulary.words(guesses)?;
    evaluate_sequence(&vocabulary.candidates(), &guesses, metric)
}
