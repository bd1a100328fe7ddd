//! Interactive play
//!
//! The engine suggests each guess and the player types the feedback the game
//! showed them.

use crate::error::Result;
use crate::solver::{Game, GameOutcome, InteractiveFeedback, SolverConfig};
use crate::wordlists::Vocabulary;
use std::io::{BufRead, Write};

/// Run an interactive game over the given input and output streams
///
/// # Errors
///
/// Returns an error if:
/// - A script word is invalid or has the wrong length
/// - The entered feedback contradicts every word in the vocabulary
/// - The input ends before the game does, or an I/O error occurs
pub fn run_interactive<R, W, S>(
    vocabulary: &Vocabulary,
    config: &SolverConfig,
    script: &[S],
    input: R,
    mut output: W,
) -> Result<GameOutcome>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    let script = vocabulary.words(script)?;

    writeln!(
        output,
        "{} words of length {} loaded. Enter feedback with '-' absent, 'y' present, 'g' correct.",
        vocabulary.len(),
        vocabulary.word_len()
    )?;

    let mut source = InteractiveFeedback::new(input, &mut output, vocabulary.word_len());
    Game::new(vocabulary, config).play(&script, &mut source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::solver::GameStatus;
    use crate::wordlists::Weighting;
    use std::io::Cursor;

    #[test]
    fn typed_feedback_drives_the_game() {
        let vocabulary = Vocabulary::parse("abcde\nfghij\n", Weighting::Raw).unwrap();
        // abcde is suggested first; answer says it's wrong, then fghij is right
        let input = Cursor::new("-----\nggggg\n");
        let mut output: Vec<u8> = Vec::new();

        let outcome = run_interactive::<_, _, &str>(&vocabulary, &SolverConfig::default(), &[], input, &mut output)
            .unwrap();
        assert_eq!(outcome.status, GameStatus::Won { turns: 2 });

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Guess 1: ABCDE"));
        assert!(transcript.contains("Guess 2: FGHIJ"));
        assert!(transcript.contains("Remaining: 1"));
    }

    #[test]
    fn malformed_feedback_is_not_fatal() {
        let vocabulary = Vocabulary::parse("abcde\nfghij\n", Weighting::Raw).unwrap();
        let input = Cursor::new("ggg\nxxxxx\nGGGGG\n");
        let mut output: Vec<u8> = Vec::new();

        let outcome = run_interactive(&vocabulary, &SolverConfig::default(), &["fghij"], input, &mut output).unwrap();
        assert_eq!(outcome.status, GameStatus::Won { turns: 1 });
        assert_eq!(
            String::from_utf8(output).unwrap().matches("Enter score").count(),
            3
        );
    }

    #[test]
    fn contradictory_feedback_is_reported() {
        let vocabulary = Vocabulary::parse("abcde\nfghij\n", Weighting::Raw).unwrap();
        let input = Cursor::new("yyyyy\n");

        let result = run_interactive::<_, _, &str>(&vocabulary, &SolverConfig::default(), &[], input, Vec::new());
        assert!(matches!(result, Err(SolverError::EmptyCandidateSet)));
    }
}
