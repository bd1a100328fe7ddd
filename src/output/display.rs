//! Display functions for command results

use super::formatters::{colored_feedback, entropy_bar};
use crate::commands::{CheckReport, OpenerPair};
use crate::core::{Pattern, Word};
use crate::solver::{CrowdMatch, GameOutcome, GameStatus, RankedGuess, SearchReport};
use colored::Colorize;

/// Print a finished game turn by turn
pub fn print_game_outcome(outcome: &GameOutcome) {
    println!("\n{}", "─".repeat(60).cyan());
    for (i, turn) in outcome.turns.iter().enumerate() {
        println!(
            "Turn {}: {}  {}  {}",
            i + 1,
            colored_feedback(&turn.guess, turn.pattern),
            turn.pattern.to_emoji(),
            format!("({} candidates)", turn.candidates_before).bright_black()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    match outcome.status {
        GameStatus::Won { turns } => {
            println!(
                "{}",
                format!("Solved in {turns} {}", if turns == 1 { "guess" } else { "guesses" })
                    .green()
                    .bold()
            );
        }
        GameStatus::Exhausted => {
            println!(
                "{}",
                format!("Not solved in {} guesses", outcome.turns.len()).red().bold()
            );
            let remaining: Vec<String> = outcome.remaining.iter().map(|w| w.text().to_uppercase()).collect();
            println!("Still possible: {}", remaining.join(" "));
        }
    }
}

/// Print the result of a worst-case search
pub fn print_search_report(report: &SearchReport<'_>) {
    for set in &report.unresolved {
        let words: Vec<String> = set.words().map(|w| w.text().to_uppercase()).collect();
        println!("{} {}", "unresolved:".yellow(), words.join(" "));
    }
    let cost = if report.cost == 0 {
        report.cost.to_string().green().bold()
    } else {
        report.cost.to_string().red().bold()
    };
    println!("Unresolved candidates: {cost}");
}

/// Print an expected guess count
pub fn print_expected(mean: f64) {
    println!(
        "Expected guesses: {}",
        format!("{mean:.4}").bright_yellow().bold()
    );
}

/// Print a failure rate
pub fn print_failure(rate: f64, depth_limit: usize) {
    println!(
        "Ambiguous after {} guesses: {}",
        depth_limit.saturating_sub(1),
        format!("{:.2}%", rate * 100.0).bright_yellow().bold()
    );
}

/// Print the score of a fixed guess sequence
pub fn print_sequence_score(guesses: &[String], score: f64) {
    println!(
        "{}: {}",
        guesses.join(" ").to_uppercase(),
        format!("{score:.4}").bright_yellow().bold()
    );
}

/// Print the opener ranking, best first
///
/// Columns: entropy, distinct patterns, largest bucket, word.
pub fn print_ranking(ranked: &[RankedGuess<'_>], candidates: usize, limit: Option<usize>) {
    for guess in ranked.iter().take(limit.unwrap_or(ranked.len())) {
        println!(
            "{:.4} {} {:5} {:5} {}",
            guess.metrics.entropy,
            entropy_bar(guess.metrics.entropy, candidates, 20).green(),
            guess.metrics.patterns,
            guess.metrics.max_partition,
            guess.entry.word
        );
    }
}

/// Print the best two-word opening
pub fn print_opener_pair(pair: &OpenerPair<'_>) {
    println!(
        "{} / {}: {}",
        pair.first.word.text().to_uppercase().bold(),
        pair.second.word.text().to_uppercase().bold(),
        format!("{:.4}", pair.score).bright_yellow().bold()
    );
}

/// Print crowd filter matches, most plausible first
pub fn print_crowd_matches(matches: &[CrowdMatch<'_>]) {
    if matches.is_empty() {
        println!("{}", "No word fits every grid".red().bold());
        return;
    }
    for found in matches {
        println!("{:>10.0} {}", found.plausibility, found.entry.word);
    }
}

/// Print the scoring self-check
pub fn print_check_report(report: &CheckReport) {
    for mismatch in &report.mismatches {
        println!(
            "h={} g={}, actual={}, expected={}",
            mismatch.hidden, mismatch.guess, mismatch.actual, mismatch.expected
        );
    }
    if report.passed() {
        println!("{}", format!("All {} fixtures pass", report.checked).green().bold());
    } else {
        println!(
            "{}",
            format!("{} of {} fixtures failed", report.mismatches.len(), report.checked)
                .red()
                .bold()
        );
    }
}

/// Print a single pattern in every notation
pub fn print_score(guess: &Word, pattern: Pattern) {
    println!(
        "{}  {}  {}  {}",
        colored_feedback(guess, pattern),
        pattern.to_emoji(),
        pattern,
        format!("{:b}", pattern.value()).bright_black()
    );
}
