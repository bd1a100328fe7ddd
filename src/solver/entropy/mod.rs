//! Entropy-based guess evaluation and selection

mod calculator;
mod selector;

pub use calculator::{
    Bucket, GuessMetrics, GuessScore, PatternTally, RankedGuess, calculate_metrics, evaluate,
    evaluate_with, rank_guesses, score_guess,
};
pub use selector::Selector;
