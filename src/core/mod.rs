//! Core domain types
//!
//! Words, feedback patterns and candidate sets. Everything here is pure and
//! deterministic; the scorer and the filter are the only ways feedback enters
//! the engine.

mod candidates;
mod pattern;
mod word;

pub use candidates::{CandidateSet, WeightedWord};
pub use pattern::{Mark, Pattern};
pub use word::{MAX_WORD_LEN, Word, WordError};
