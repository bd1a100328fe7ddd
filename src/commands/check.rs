//! Scoring self-check and single-pair scoring
//!
//! The fixture table writes each expected pattern as one hex digit per
//! position (0 absent, 1 present, 2 correct), so `0x00102` reads `--y-g`.

use crate::core::{Mark, Pattern, Word};
use crate::error::{Result, SolverError};

/// (hidden, guess, expected pattern as hex digits)
pub const SCORE_FIXTURES: &[(&str, &str, u64)] = &[
    ("limbo", "phono", 0x00002),
    ("limbo", "hello", 0x00102),
    ("hello", "hello", 0x22222),
    ("tares", "stare", 0x11111),
    ("limbo", "could", 0x01010),
    ("hello", "could", 0x01020),
    ("could", "hello", 0x00021),
    ("colds", "llama", 0x10000),
    ("abroad", "action", 0x20_0010),
    ("absolute", "disposal", 0x0020_1011),
    ("2+4*5=22", "9*3-1=26", 0x0100_0220),
];

/// A fixture the scorer disagrees with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub hidden: String,
    pub guess: String,
    pub expected: Pattern,
    pub actual: Pattern,
}

/// Outcome of the self-check
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Decode one-hex-digit-per-position notation
fn decode_digits(packed: u64, len: usize) -> Option<Pattern> {
    if len == 0 || len > 16 || (len < 16 && packed >> (4 * len) != 0) {
        return None;
    }
    let marks = (0..len)
        .map(|i| match (packed >> (4 * (len - 1 - i))) & 0xF {
            0 => Some(Mark::Absent),
            1 => Some(Mark::Present),
            2 => Some(Mark::Correct),
            _ => None,
        })
        .collect::<Option<Vec<Mark>>>()?;
    Some(Pattern::from_marks(&marks))
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).map_err(|e| SolverError::invalid_word(text, e))
}

/// Check the scorer against every fixture
///
/// # Errors
///
/// Returns an error if a fixture itself is malformed.
pub fn run_self_check() -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for &(hidden, guess, packed) in SCORE_FIXTURES {
        let actual = score_words(guess, hidden)?;
        let expected = decode_digits(packed, hidden.len()).ok_or_else(|| SolverError::InvalidFeedbackFormat {
            input: format!("{packed:x}"),
            reason: format!("not a {}-position pattern", hidden.len()),
        })?;

        report.checked += 1;
        if actual != expected {
            log::warn!("h={hidden} g={guess} actual={actual} expected={expected}");
            report.mismatches.push(Mismatch {
                hidden: hidden.to_string(),
                guess: guess.to_string(),
                expected,
                actual,
            });
        }
    }

    Ok(report)
}

/// Score `guess` against `hidden`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_words(guess: &str, hidden: &str) -> Result<Pattern> {
    Pattern::try_calculate(&parse_word(guess)?, &parse_word(hidden)?)
}
