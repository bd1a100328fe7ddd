//! The loaded vocabulary

use super::loader::{self, Weighting};
use crate::core::{CandidateSet, WeightedWord, Word};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Every word the game knows, with weights, most common first
///
/// All words share one length. The vocabulary is immutable once built; games
/// and tree evaluations borrow candidate sets from it.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<WeightedWord>,
    word_len: usize,
    total_weight: f64,
}

impl Vocabulary {
    /// Build a vocabulary from entries
    ///
    /// Entries are stably sorted by weight, heaviest first. Repeated words keep
    /// their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `EmptyVocabulary` for no entries and `MixedWordLength` if the
    /// entries disagree on length.
    pub fn new(entries: Vec<WeightedWord>) -> Result<Self> {
        let word_len = entries
            .first()
            .map(|entry| entry.word.len())
            .ok_or(SolverError::EmptyVocabulary)?;

        if let Some((idx, odd)) = entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.word.len() != word_len)
        {
            return Err(SolverError::MixedWordLength {
                entry: idx + 1,
                word: odd.word.text().to_string(),
                expected: word_len,
                actual: odd.word.len(),
            });
        }

        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut entries: Vec<WeightedWord> = entries
            .into_iter()
            .filter(|entry| {
                let fresh = seen.insert(entry.word.clone());
                if !fresh {
                    log::warn!("duplicate vocabulary word '{}' ignored", entry.word);
                }
                fresh
            })
            .collect();

        entries.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        let total_weight = entries.iter().map(|entry| entry.weight).sum();

        Ok(Self {
            entries,
            word_len,
            total_weight,
        })
    }

    /// Parse a vocabulary from word list text
    ///
    /// # Errors
    ///
    /// Any parse error, or `EmptyVocabulary` if the text holds no words.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::wordlists::{Vocabulary, Weighting};
    ///
    /// let vocabulary = Vocabulary::parse("slate 3\ncrane 9\n", Weighting::Raw).unwrap();
    /// assert_eq!(vocabulary.word_len(), 5);
    /// assert_eq!(vocabulary.entries()[0].word.text(), "crane");
    /// assert_eq!(vocabulary.total_weight(), 12.0);
    /// ```
    pub fn parse(content: &str, weighting: Weighting) -> Result<Self> {
        Self::new(loader::parse_word_list(content, weighting)?)
    }

    /// Load a vocabulary from a word list file
    ///
    /// # Errors
    ///
    /// `VocabularyIo` on read failure, otherwise as [`Vocabulary::parse`].
    pub fn load<P: AsRef<Path>>(path: P, weighting: Weighting) -> Result<Self> {
        let path = path.as_ref();
        let vocabulary = Self::new(loader::load_from_file(path, weighting)?)?;
        log::info!(
            "loaded {} words of length {} from {}",
            vocabulary.len(),
            vocabulary.word_len,
            path.display()
        );
        Ok(vocabulary)
    }

    #[must_use]
    pub fn entries(&self) -> &[WeightedWord] {
        &self.entries
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a word's entry
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&WeightedWord> {
        let text = text.to_lowercase();
        self.entries.iter().find(|entry| entry.word.text() == text)
    }

    /// Look up a word that must be in the vocabulary
    ///
    /// # Errors
    ///
    /// `UnknownWord` if it is not.
    pub fn require(&self, text: &str) -> Result<&WeightedWord> {
        self.get(text)
            .ok_or_else(|| SolverError::UnknownWord(text.to_string()))
    }

    /// The full vocabulary as a fresh candidate set
    #[must_use]
    pub fn candidates(&self) -> CandidateSet<'_> {
        self.entries.iter().collect()
    }

    /// Validate a word supplied from outside the vocabulary
    ///
    /// The word need not be in the vocabulary, but it must have the right length.
    ///
    /// # Errors
    ///
    /// `InvalidWord` if the text is not a word, `InvalidWordLength` if its length
    /// differs from the vocabulary's.
    pub fn word(&self, text: &str) -> Result<Word> {
        let word = Word::new(text).map_err(|e| SolverError::invalid_word(text, e))?;
        if word.len() != self.word_len {
            return Err(SolverError::InvalidWordLength {
                word: word.text().to_string(),
                expected: self.word_len,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Validate several words, see [`Vocabulary::word`]
    ///
    /// # Errors
    ///
    /// The first invalid word's error.
    pub fn words<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Word>> {
        texts.iter().map(|text| self.word(text.as_ref())).collect()
    }
}
