//! Candidate sets and feedback filtering
//!
//! A candidate set borrows its members from the vocabulary, so filtering and
//! branching only copy references.

use super::{Pattern, Word};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;

/// A vocabulary word paired with its frequency weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedWord {
    pub word: Word,
    pub weight: f64,
}

impl WeightedWord {
    #[must_use]
    pub const fn new(word: Word, weight: f64) -> Self {
        Self { word, weight }
    }
}

/// Words still consistent with every feedback pattern seen so far
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<'a> {
    members: Vec<&'a WeightedWord>,
}

impl<'a> CandidateSet<'a> {
    #[must_use]
    pub const fn new(members: Vec<&'a WeightedWord>) -> Self {
        Self { members }
    }

    #[must_use]
    pub fn members(&self) -> &[&'a WeightedWord] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a WeightedWord> + '_ {
        self.members.iter().copied()
    }

    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.iter().map(|entry| &entry.word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of member weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.members.iter().map(|entry| entry.weight).sum()
    }

    /// The sole remaining member, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&'a WeightedWord> {
        match self.members.as_slice() {
            &[only] => Some(only),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.iter().any(|entry| entry.word == *word)
    }

    /// Members that would have produced `pattern` for `guess`
    ///
    /// Exact: a member is kept iff scoring `guess` against it yields `pattern`.
    /// The input set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::core::{CandidateSet, Pattern, WeightedWord, Word};
    ///
    /// let entries: Vec<WeightedWord> = ["limbo", "mambo", "jumbo"]
    ///     .into_iter()
    ///     .map(|t| WeightedWord::new(Word::new(t).unwrap(), 1.0))
    ///     .collect();
    /// let set = CandidateSet::new(entries.iter().collect());
    ///
    /// let guess = Word::new("phono").unwrap();
    /// let pattern = Pattern::calculate(&guess, &entries[0].word);
    /// let narrowed = set.filter(&guess, pattern);
    ///
    /// assert!(narrowed.contains(&entries[0].word));
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn filter(&self, guess: &Word, pattern: Pattern) -> Self {
        Self {
            members: self
                .members
                .iter()
                .copied()
                .filter(|entry| Pattern::calculate(guess, &entry.word) == pattern)
                .collect(),
        }
    }

    /// Like [`CandidateSet::filter`], but a result with no members is an error
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` when the feedback contradicts every member.
    pub fn narrow(&self, guess: &Word, pattern: Pattern) -> Result<Self> {
        let narrowed = self.filter(guess, pattern);
        if narrowed.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }
        Ok(narrowed)
    }

    /// Split members by the pattern `guess` produces against each
    ///
    /// Branches come back in order of first appearance, so the result is
    /// deterministic for a given member order.
    #[must_use]
    pub fn partition(&self, guess: &Word) -> Vec<(Pattern, Self)> {
        let mut index: FxHashMap<Pattern, usize> = FxHashMap::default();
        let mut branches: Vec<(Pattern, Self)> = Vec::new();

        for &entry in &self.members {
            let pattern = Pattern::calculate(guess, &entry.word);
            let slot = *index.entry(pattern).or_insert_with(|| {
                branches.push((pattern, Self::default()));
                branches.len() - 1
            });
            branches[slot].1.members.push(entry);
        }

        branches
    }
}

impl<'a> FromIterator<&'a WeightedWord> for CandidateSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a WeightedWord>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
