//! Non-interactive games
//!
//! Plays against a known hidden word (optionally in hard mode) or against the
//! adversary, with an optional opening script.

use crate::error::Result;
use crate::solver::{AdversaryFeedback, Game, GameOutcome, KnownAnswer, SolverConfig};
use crate::wordlists::Vocabulary;

/// Solve a hidden word from the vocabulary
///
/// Hard mode comes from `config`.
///
/// # Errors
///
/// Returns an error if:
/// - The hidden word is not in the vocabulary
/// - A script word is invalid or has the wrong length
pub fn play_known<S: AsRef<str>>(
    vocabulary: &Vocabulary,
    config: &SolverConfig,
    hidden: &str,
    script: &[S],
) -> Result<GameOutcome> {
    let hidden = vocabulary.require(hidden)?.word.clone();
    let script = vocabulary.words(script)?;

    log::debug!("playing against '{hidden}' (hard mode: {})", config.hard_mode);
    Game::new(vocabulary, config).play(&script, &mut KnownAnswer::new(hidden))
}

/// Play against the adversary
///
/// # Errors
///
/// Returns an error if a script word is invalid or has the wrong length.
pub fn play_adversary<S: AsRef<str>>(
    vocabulary: &Vocabulary,
    config: &SolverConfig,
    script: &[S],
) -> Result<GameOutcome> {
    let script = vocabulary.words(script)?;
    Game::new(vocabulary, config).play(&script, &mut AdversaryFeedback::new(vocabulary))
}
