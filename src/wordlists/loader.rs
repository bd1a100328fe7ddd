//! Word list parsing
//!
//! One word per line, optionally followed by whitespace and an integer
//! frequency. A missing frequency counts as 1.

use crate::core::{WeightedWord, Word};
use crate::error::{Result, SolverError};
use std::fs;
use std::path::Path;

/// How raw frequencies become weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Weighting {
    /// Use the frequency column as-is
    #[default]
    Raw,
    /// Squash frequencies through a logistic curve centred on 80 (width 15)
    Sigmoid,
}

impl Weighting {
    const SIGMOID_CENTER: f64 = 80.0;
    const SIGMOID_WIDTH: f64 = 15.0;

    /// Weight for a raw frequency
    #[must_use]
    pub fn apply(self, frequency: u64) -> f64 {
        match self {
            Self::Raw => frequency as f64,
            Self::Sigmoid => {
                1.0 / (1.0 + (-(frequency as f64 - Self::SIGMOID_CENTER) / Self::SIGMOID_WIDTH).exp())
            }
        }
    }
}

/// Parse word list text into weighted entries, in file order
///
/// # Errors
///
/// Returns `InvalidVocabularyLine` for a bad word or frequency (1-based line
/// numbers) and `InconsistentWordLength` when a word's length differs from the
/// first word's.
///
/// # Examples
/// ```
/// use wordle_entropy_engine::wordlists::loader::{parse_word_list, Weighting};
///
/// let entries = parse_word_list("crane 40\nslate\n\n", Weighting::Raw).unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].weight, 40.0);
/// assert_eq!(entries[1].weight, 1.0);
/// ```
pub fn parse_word_list(content: &str, weighting: Weighting) -> Result<Vec<WeightedWord>> {
    let mut entries: Vec<WeightedWord> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();

        let Some(text) = fields.next() else {
            continue;
        };

        let word = Word::new(text).map_err(|e| SolverError::InvalidVocabularyLine {
            line: line_no,
            reason: format!("'{text}': {e}"),
        })?;

        let frequency = match fields.next() {
            Some(raw) => raw.parse::<u64>().map_err(|e| SolverError::InvalidVocabularyLine {
                line: line_no,
                reason: format!("frequency '{raw}': {e}"),
            })?,
            None => 1,
        };

        if frequency == 0 {
            return Err(SolverError::InvalidVocabularyLine {
                line: line_no,
                reason: "frequency must be positive".to_string(),
            });
        }

        if let Some(extra) = fields.next() {
            return Err(SolverError::InvalidVocabularyLine {
                line: line_no,
                reason: format!("unexpected trailing field '{extra}'"),
            });
        }

        if let Some(first) = entries.first()
            && first.word.len() != word.len()
        {
            return Err(SolverError::InconsistentWordLength {
                line: line_no,
                word: word.text().to_string(),
                expected: first.word.len(),
                actual: word.len(),
            });
        }

        entries.push(WeightedWord::new(word, weighting.apply(frequency)));
    }

    Ok(entries)
}

/// Load weighted entries from a file
///
/// # Errors
///
/// Returns `VocabularyIo` if the file cannot be read, or any error from
/// [`parse_word_list`].
pub fn load_from_file<P: AsRef<Path>>(path: P, weighting: Weighting) -> Result<Vec<WeightedWord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SolverError::VocabularyIo {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content, weighting)
}
