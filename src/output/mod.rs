//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, print_crowd_matches, print_expected, print_failure, print_game_outcome, print_opener_pair,
    print_ranking, print_score, print_search_report, print_sequence_score,
};
pub use formatters::colored_feedback;
