//! Feedback pattern calculation and representation
//!
//! A pattern packs one [`Mark`] per position into a `u32`, two bits each,
//! most-significant position first:
//! - 0 = Absent (symbol not in the hidden word, or every occurrence already claimed)
//! - 1 = Present (symbol in the hidden word at another position)
//! - 2 = Correct (symbol in the correct position)
//!
//! The pattern also remembers its length so it can render and validate itself.

use super::Word;
use super::word::MAX_WORD_LEN;
use crate::error::{Result, SolverError};
use std::fmt;

/// Per-position feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    const fn from_bits(bits: u32) -> Self {
        match bits {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Symbol used in the text notation
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'y',
            Self::Correct => 'g',
        }
    }

    /// Parse one symbol of the text notation (case-insensitive)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Absent),
            'y' | 'Y' => Some(Self::Present),
            'g' | 'G' => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Feedback pattern for one guess against one hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    value: u32,
    len: u8,
}

impl Pattern {
    /// The all-correct pattern for words of `len` symbols
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds [`MAX_WORD_LEN`]
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LEN);
        let mut value = 0u32;
        let mut i = 0;
        while i < len {
            value = (value << 2) | Mark::Correct as u32;
            i += 1;
        }
        Self {
            value,
            len: len as u8,
        }
    }

    /// Build a pattern from marks, first position first
    ///
    /// # Panics
    /// Panics in debug mode if more than [`MAX_WORD_LEN`] marks are given
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LEN);
        let value = marks
            .iter()
            .fold(0u32, |acc, &mark| (acc << 2) | mark as u32);
        Self {
            value,
            len: marks.len() as u8,
        }
    }

    /// Get the packed value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of positions this pattern covers
    #[inline]
    #[must_use]
    pub const fn word_len(self) -> usize {
        self.len as usize
    }

    /// Check if this is the winning pattern
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.value == Self::perfect(self.len as usize).value
    }

    /// Mark at a position (0 = first symbol)
    ///
    /// # Panics
    /// Panics in debug mode if `position` is out of range
    #[must_use]
    pub const fn mark_at(self, position: usize) -> Mark {
        debug_assert!(position < self.len as usize);
        let shift = 2 * (self.len as usize - 1 - position);
        Mark::from_bits((self.value >> shift) & 0b11)
    }

    /// Iterate marks from the first position
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        (0..self.word_len()).map(move |i| self.mark_at(i))
    }

    /// Count the number of correct-position marks
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.marks().filter(|&m| m == Mark::Correct).count()
    }

    /// Count the number of present-elsewhere marks
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Score `guess` against `hidden`
    ///
    /// Greens are claimed first; the remaining occurrences of each hidden symbol
    /// are then handed out as yellows to guess positions from left to right, so a
    /// repeated guess symbol never earns more marks than the hidden word holds.
    ///
    /// Both words must have the same length. Use [`Pattern::try_calculate`] when
    /// that has not been checked already.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::core::{Pattern, Word};
    ///
    /// let guess = Word::new("phono").unwrap();
    /// let hidden = Word::new("limbo").unwrap();
    /// let pattern = Pattern::calculate(&guess, &hidden);
    ///
    /// // Only the final O scores; the first O finds no unclaimed O left.
    /// assert_eq!(pattern.to_string(), "----g");
    /// assert_eq!(pattern.value(), 0b10);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, hidden: &Word) -> Self {
        let guess = guess.bytes();
        let hidden = hidden.bytes();
        debug_assert_eq!(guess.len(), hidden.len(), "score of mismatched lengths");

        let len = guess.len().min(hidden.len());
        let mut marks = [Mark::Absent; MAX_WORD_LEN];
        let mut unclaimed = [0u8; 128];

        // Allow: index pairs guess[i] with hidden[i] and marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess[i] == hidden[i] {
                marks[i] = Mark::Correct;
            } else {
                unclaimed[usize::from(hidden[i] & 0x7f)] += 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if marks[i] == Mark::Absent {
                let count = &mut unclaimed[usize::from(guess[i] & 0x7f)];
                if *count > 0 {
                    marks[i] = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self::from_marks(&marks[..len])
    }

    /// Score `guess` against `hidden`, rejecting mismatched lengths
    ///
    /// # Errors
    /// Returns `InvalidWordLength` naming the guess when the lengths differ.
    pub fn try_calculate(guess: &Word, hidden: &Word) -> Result<Self> {
        if guess.len() != hidden.len() {
            return Err(SolverError::InvalidWordLength {
                word: guess.text().to_string(),
                expected: hidden.len(),
                actual: guess.len(),
            });
        }
        Ok(Self::calculate(guess, hidden))
    }

    /// Parse the `-`/`y`/`g` notation for a word of `len` symbols
    ///
    /// # Errors
    /// Returns `InvalidFeedbackFormat` if the text has the wrong length or an
    /// unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::core::Pattern;
    ///
    /// let pattern = Pattern::from_text("-Yg--", 5).unwrap();
    /// assert_eq!(pattern.to_string(), "-yg--");
    /// assert!(Pattern::from_text("-yg-", 5).is_err());
    /// assert!(Pattern::from_text("-yx--", 5).is_err());
    /// ```
    pub fn from_text(text: &str, len: usize) -> Result<Self> {
        let invalid = |reason: String| SolverError::InvalidFeedbackFormat {
            input: text.to_string(),
            reason,
        };

        let count = text.chars().count();
        if count != len {
            return Err(invalid(format!("expected {len} characters, got {count}")));
        }

        let marks = text
            .chars()
            .map(|c| Mark::from_char(c).ok_or_else(|| invalid(format!("'{c}' is not one of -, y, g"))))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_marks(&marks))
    }

    /// Canonical `-`/`y`/`g` notation
    #[must_use]
    pub fn to_text(self) -> String {
        self.marks().map(Mark::to_char).collect()
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn score(guess: &str, hidden: &str) -> String {
        Pattern::calculate(&w(guess), &w(hidden)).to_text()
    }

    #[test]
    fn perfect_pattern_packing() {
        assert_eq!(Pattern::perfect(5).value(), 0b10_10_10_10_10);
        assert!(Pattern::perfect(5).is_perfect());
        assert_eq!(Pattern::perfect(5).count_correct(), 5);
        assert_eq!(Pattern::perfect(8).to_text(), "gggggggg");
    }

    #[test]
    fn perfect_depends_on_length() {
        assert_ne!(Pattern::perfect(5), Pattern::perfect(6));
        assert!(!Pattern::from_text("gggg-", 5).unwrap().is_perfect());
    }

    #[test]
    fn most_significant_position_first() {
        let pattern = Pattern::from_text("g----", 5).unwrap();
        assert_eq!(pattern.value(), 0b10 << 8);
        assert_eq!(pattern.mark_at(0), Mark::Correct);
        assert_eq!(pattern.mark_at(4), Mark::Absent);
    }

    #[test]
    fn reference_fixtures() {
        // (hidden, guess, expected)
        let fixtures = [
            ("limbo", "phono", "----g"),
            ("limbo", "hello", "--y-g"),
            ("hello", "hello", "ggggg"),
            ("tares", "stare", "yyyyy"),
            ("limbo", "could", "-y-y-"),
            ("hello", "could", "-y-g-"),
            ("could", "hello", "---gy"),
            ("colds", "llama", "y----"),
            ("abroad", "action", "g---y-"),
            ("absolute", "disposal", "--g-y-yy"),
            ("2+4*5=22", "9*3-1=26", "-y---gg-"),
        ];
        for (hidden, guess, expected) in fixtures {
            assert_eq!(score(guess, hidden), expected, "guess={guess} hidden={hidden}");
        }
    }

    #[test]
    fn limbo_phono_matches_packed_fixture() {
        let pattern = Pattern::calculate(&w("phono"), &w("limbo"));
        assert_eq!(pattern.value(), 0x00002);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(score("robot", "floor"), "yy-g-");
        // SPEED vs ERASE: both E's yellow, ERASE has two
        assert_eq!(score("speed", "erase"), "y-yy-");
        // earlier positions claim repeated letters first
        assert_eq!(score("eerie", "there"), "y-y-g");
    }

    #[test]
    fn text_roundtrip_and_errors() {
        let pattern = Pattern::from_text("gy-Gy", 5).unwrap();
        assert_eq!(pattern.to_text(), "gy-gy");
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜🟩🟨");

        assert!(matches!(
            Pattern::from_text("gy-g", 5),
            Err(SolverError::InvalidFeedbackFormat { .. })
        ));
        assert!(matches!(
            Pattern::from_text("gy-gx", 5),
            Err(SolverError::InvalidFeedbackFormat { .. })
        ));
        assert!(Pattern::from_text("", 5).is_err());
    }

    #[test]
    fn try_calculate_rejects_length_mismatch() {
        let result = Pattern::try_calculate(&w("abroad"), &w("limbo"));
        assert!(matches!(
            result,
            Err(SolverError::InvalidWordLength {
                expected: 5,
                actual: 6,
                ..
            })
        ));
        assert!(Pattern::try_calculate(&w("crane"), &w("limbo")).is_ok());
    }

    fn random_word(rng: &mut StdRng, alphabet: &[u8], len: usize) -> Word {
        let text: String = (0..len)
            .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
            .collect();
        w(&text)
    }

    #[test]
    fn scoring_properties_hold_for_random_words() {
        // Small alphabet so repeated letters are common
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2000 {
            let guess = random_word(&mut rng, b"abcde", 5);
            let hidden = random_word(&mut rng, b"abcde", 5);
            let pattern = Pattern::calculate(&guess, &hidden);

            assert_eq!(pattern.is_perfect(), guess == hidden);

            let matching = (0..5)
                .filter(|&i| guess.char_at(i) == hidden.char_at(i))
                .count();
            assert_eq!(pattern.count_correct(), matching);

            // No symbol earns more marks than the hidden word holds
            for symbol in b"abcde" {
                let marked = (0..5)
                    .filter(|&i| guess.char_at(i) == *symbol && pattern.mark_at(i) != Mark::Absent)
                    .count();
                let held = hidden.bytes().iter().filter(|&&b| b == *symbol).count();
                assert!(marked <= held);
            }

            assert_eq!(Pattern::from_text(&pattern.to_text(), 5).unwrap(), pattern);
        }
    }
}
