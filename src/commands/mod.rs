//! Command implementations

pub mod check;
pub mod filter;
pub mod interactive;
pub mod pairs;
pub mod play;
pub mod search;
pub mod top;

pub use check::{CheckReport, Mismatch, SCORE_FIXTURES, run_self_check, score_words};
pub use filter::{parse_grids, run_filter};
pub use interactive::run_interactive;
pub use pairs::{OpenerPair, best_pair};
pub use play::{play_adversary, play_known};
pub use search::{run_expected, run_failure, run_search, run_sequence};
pub use top::rank_openers;
