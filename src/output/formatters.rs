//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::Colorize;

/// Render a guess with each symbol on the background color of its mark
///
/// Green for correct, yellow for present, black for absent.
#[must_use]
pub fn colored_feedback(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.marks())
        .map(|(symbol, mark)| {
            let tile = format!(" {} ", symbol.to_ascii_uppercase()).white().bold();
            let tile = match mark {
                Mark::Correct => tile.on_green(),
                Mark::Present => tile.on_yellow(),
                Mark::Absent => tile.on_black(),
            };
            tile.to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the best possible split of `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
