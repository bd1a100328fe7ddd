//! Decision engine
//!
//! Guess evaluation and selection, the adversary, the game loop, the
//! decision tree evaluators and grid deduction. Every component takes the
//! vocabulary and a [`SolverConfig`] explicitly.

pub mod adversary;
pub mod crowd;
mod engine;
pub mod entropy;
pub mod strategy;
mod tree;

pub use crowd::{CrowdMatch, crowd_filter};
pub use engine::{
    AdversaryFeedback, FeedbackSource, Game, GameOutcome, GameStatus, InteractiveFeedback, KnownAnswer,
    TurnRecord,
};
pub use entropy::{Bucket, GuessMetrics, RankedGuess, Selector};
pub use strategy::{DEFAULT_MAX_TURNS, Metric, SolverConfig};
pub use tree::{DEFAULT_FAILURE_DEPTH, Progress, SearchReport, TreeEvaluator, evaluate_sequence};
