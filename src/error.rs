//! Error types shared by the engine

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for engine operations
pub type Result<T, E = SolverError> = std::result::Result<T, E>;

/// Failures surfaced by the decision engine and the vocabulary loader
#[derive(Debug, Error)]
pub enum SolverError {
    /// A guess or hidden word does not match the vocabulary's word length
    #[error("'{word}' has {actual} symbols, expected {expected}")]
    InvalidWordLength {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// Feedback text is the wrong length or uses symbols outside `-`, `y`, `g`
    #[error("invalid feedback '{input}': {reason}")]
    InvalidFeedbackFormat { input: String, reason: String },

    /// Feedback eliminated every candidate, or a selection was asked of nothing
    #[error("no candidates remain; the feedback sequence is contradictory")]
    EmptyCandidateSet,

    /// A word that must come from the vocabulary does not
    #[error("'{0}' is not in the vocabulary")]
    UnknownWord(String),

    #[error("invalid word '{text}': {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },

    #[error("failed to read vocabulary {}: {source}", path.display())]
    VocabularyIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("vocabulary contains no words")]
    EmptyVocabulary,

    #[error("vocabulary line {line}: '{word}' has {actual} symbols, expected {expected}")]
    InconsistentWordLength {
        line: usize,
        word: String,
        expected: usize,
        actual: usize,
    },

    /// Raised when entries built in code disagree on length; `entry` is 1-based
    #[error("vocabulary entry {entry}: '{word}' has {actual} symbols, expected {expected}")]
    MixedWordLength {
        entry: usize,
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("vocabulary line {line}: {reason}")]
    InvalidVocabularyLine { line: usize, reason: String },

    /// Interactive input ended before the game did
    #[error("input closed before feedback was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SolverError {
    pub(crate) fn invalid_word(text: &str, source: WordError) -> Self {
        Self::InvalidWord {
            text: text.to_string(),
            source,
        }
    }
}
