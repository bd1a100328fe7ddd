//! Game loop
//!
//! Plays one game: each turn takes a guess from the script or the selector,
//! asks a feedback source for the pattern, and narrows the candidates until the
//! word is found or the turn budget runs out.

use super::adversary;
use super::entropy::Selector;
use super::strategy::SolverConfig;
use crate::core::{CandidateSet, Pattern, Word};
use crate::error::{Result, SolverError};
use crate::wordlists::Vocabulary;
use std::io::{BufRead, Write};

/// Supplies the feedback pattern for each guess
pub trait FeedbackSource {
    /// Pattern for `guess` on `turn` (1-based), given the candidates before it
    ///
    /// # Errors
    ///
    /// Any error aborts the game.
    fn feedback(&mut self, turn: usize, guess: &Word, candidates: &CandidateSet<'_>) -> Result<Pattern>;
}

/// Scores guesses against a known hidden word
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    hidden: Word,
}

impl KnownAnswer {
    #[must_use]
    pub const fn new(hidden: Word) -> Self {
        Self { hidden }
    }
}

impl FeedbackSource for KnownAnswer {
    fn feedback(&mut self, _turn: usize, guess: &Word, _candidates: &CandidateSet<'_>) -> Result<Pattern> {
        Pattern::try_calculate(guess, &self.hidden)
    }
}

/// Answers every guess with the adversary's least helpful pattern
#[derive(Debug, Clone, Copy)]
pub struct AdversaryFeedback {
    total: f64,
}

impl AdversaryFeedback {
    /// Surprisal is measured against the whole vocabulary's weight
    #[must_use]
    pub const fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            total: vocabulary.total_weight(),
        }
    }
}

impl FeedbackSource for AdversaryFeedback {
    fn feedback(&mut self, _turn: usize, guess: &Word, candidates: &CandidateSet<'_>) -> Result<Pattern> {
        adversary::worst(candidates, guess, self.total)
    }
}

/// Reads feedback typed by a player, re-prompting on malformed input
pub struct InteractiveFeedback<R, W> {
    input: R,
    output: W,
    word_len: usize,
}

impl<R: BufRead, W: Write> InteractiveFeedback<R, W> {
    pub const fn new(input: R, output: W, word_len: usize) -> Self {
        Self {
            input,
            output,
            word_len,
        }
    }

    fn read_pattern(&mut self) -> Result<Pattern> {
        loop {
            write!(self.output, "Enter score using -yg: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SolverError::InputClosed);
            }

            match Pattern::from_text(line.trim(), self.word_len) {
                Ok(pattern) => return Ok(pattern),
                Err(SolverError::InvalidFeedbackFormat { reason, .. }) => {
                    writeln!(self.output, "{reason}")?;
                }
                Err(other) => return Err(other),
            }
        }
    }
}

impl<R: BufRead, W: Write> FeedbackSource for InteractiveFeedback<R, W> {
    fn feedback(&mut self, turn: usize, guess: &Word, candidates: &CandidateSet<'_>) -> Result<Pattern> {
        writeln!(self.output, "Remaining: {}", candidates.len())?;
        writeln!(self.output, "Guess {turn}: {}", guess.text().to_uppercase())?;
        self.read_pattern()
    }
}

/// One completed turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates consistent with the feedback before this guess
    pub candidates_before: usize,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Won { turns: usize },
    Exhausted,
}

/// Full record of a game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub turns: Vec<TurnRecord>,
    /// Candidates still consistent when the game ended (empty after a win)
    pub remaining: Vec<Word>,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }
}

/// Turn-by-turn game driver over a vocabulary
pub struct Game<'v> {
    vocabulary: &'v Vocabulary,
    selector: Selector<'v>,
    max_turns: usize,
}

impl<'v> Game<'v> {
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary, config: &SolverConfig) -> Self {
        Self {
            vocabulary,
            selector: Selector::new(vocabulary, config),
            max_turns: config.max_turns,
        }
    }

    /// Play until the pattern is all-correct or the turn budget is spent
    ///
    /// `script` overrides the selector for the first `script.len()` turns.
    ///
    /// # Errors
    ///
    /// - `InvalidWordLength` if a script word has the wrong length
    /// - `EmptyCandidateSet` if the feedback contradicts every word
    /// - any error from the feedback source
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy_engine::solver::{Game, GameStatus, KnownAnswer, SolverConfig};
    /// use wordle_entropy_engine::wordlists::{Vocabulary, Weighting};
    ///
    /// let vocabulary = Vocabulary::parse("abcde\nfghij\n", Weighting::Raw).unwrap();
    /// let game = Game::new(&vocabulary, &SolverConfig::default());
    /// let hidden = vocabulary.word("abcde").unwrap();
    /// let script = vocabulary.words(&["abcde"]).unwrap();
    ///
    /// let outcome = game.play(&script, &mut KnownAnswer::new(hidden)).unwrap();
    /// assert_eq!(outcome.status, GameStatus::Won { turns: 1 });
    /// ```
    pub fn play(&self, script: &[Word], source: &mut dyn FeedbackSource) -> Result<GameOutcome> {
        let word_len = self.vocabulary.word_len();
        if let Some(bad) = script.iter().find(|w| w.len() != word_len) {
            return Err(SolverError::InvalidWordLength {
                word: bad.text().to_string(),
                expected: word_len,
                actual: bad.len(),
            });
        }

        let mut candidates = self.vocabulary.candidates();
        let mut turns: Vec<TurnRecord> = Vec::new();

        for turn in 1..=self.max_turns {
            let guess = match script.get(turn - 1) {
                Some(scripted) => scripted.clone(),
                None => self.selector.choose(&candidates)?.clone(),
            };
            log::debug!("turn {turn}: {} candidates, guessing {guess}", candidates.len());

            let pattern = source.feedback(turn, &guess, &candidates)?;
            if pattern.word_len() != word_len {
                return Err(SolverError::InvalidFeedbackFormat {
                    input: pattern.to_text(),
                    reason: format!("expected {word_len} marks"),
                });
            }

            turns.push(TurnRecord {
                guess: guess.clone(),
                pattern,
                candidates_before: candidates.len(),
            });

            if pattern.is_perfect() {
                log::debug!("solved on turn {turn}");
                return Ok(GameOutcome {
                    status: GameStatus::Won { turns: turn },
                    turns,
                    remaining: Vec::new(),
                });
            }

            candidates = candidates.narrow(&guess, pattern)?;
        }

        log::debug!("turn budget spent with {} candidates left", candidates.len());
        Ok(GameOutcome {
            status: GameStatus::Exhausted,
            turns,
            remaining: candidates.words().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Weighting;
    use std::io::Cursor;

    const WORDS: &str = "crane 50\nslate 40\nirate 30\ncrate 20\ngrate 10\ntrace 9\nlimbo 8\nmambo 7\njumbo 6\nhello 5\n";

    fn vocabulary(text: &str) -> Vocabulary {
        Vocabulary::parse(text, Weighting::Raw).unwrap()
    }

    #[test]
    fn two_word_game_won_on_first_turn() {
        let vocabulary = vocabulary("abcde\nfghij\n");
        let game = Game::new(&vocabulary, &SolverConfig::default());
        let hidden = vocabulary.word("abcde").unwrap();
        let script = vocabulary.words(&["abcde"]).unwrap();

        let outcome = game.play(&script, &mut KnownAnswer::new(hidden)).unwrap();
        assert!(outcome.is_won());
        assert_eq!(outcome.turns.len(), 1);
        assert!(outcome.turns[0].pattern.is_perfect());
    }

    #[test]
    fn solver_finds_every_word() {
        // Every guess removes at least one candidate, so ten turns always suffice
        let vocabulary = vocabulary(WORDS);
        let config = SolverConfig::default().with_max_turns(10);
        let game = Game::new(&vocabulary, &config);

        for entry in vocabulary.entries() {
            let outcome = game
                .play(&[], &mut KnownAnswer::new(entry.word.clone()))
                .unwrap();
            assert!(outcome.is_won(), "failed to solve {}", entry.word);
            assert_eq!(outcome.turns.last().map(|t| &t.guess), Some(&entry.word));
        }
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let vocabulary = vocabulary(WORDS);
        let game = Game::new(&vocabulary, &SolverConfig::default());
        let hidden = vocabulary.word("mambo").unwrap();

        let outcome = game.play(&[], &mut KnownAnswer::new(hidden)).unwrap();
        for pair in outcome.turns.windows(2) {
            assert!(pair[1].candidates_before < pair[0].candidates_before);
        }
        assert_eq!(outcome.turns[0].candidates_before, vocabulary.len());
    }

    #[test]
    fn script_overrides_opening_turns() {
        let vocabulary = vocabulary(WORDS);
        let config = SolverConfig::default().with_max_turns(12);
        let game = Game::new(&vocabulary, &config);
        let hidden = vocabulary.word("hello").unwrap();
        let script = vocabulary.words(&["zzzzz", "qqqqq"]).unwrap();

        let outcome = game.play(&script, &mut KnownAnswer::new(hidden)).unwrap();
        assert_eq!(outcome.turns[0].guess.text(), "zzzzz");
        assert_eq!(outcome.turns[1].guess.text(), "qqqqq");
        assert!(outcome.is_won());
    }

    #[test]
    fn script_word_length_checked() {
        let vocabulary = vocabulary(WORDS);
        let game = Game::new(&vocabulary, &SolverConfig::default());
        let script = [Word::new("abroad").unwrap()];
        let hidden = vocabulary.word("hello").unwrap();

        let result = game.play(&script, &mut KnownAnswer::new(hidden));
        assert!(matches!(result, Err(SolverError::InvalidWordLength { .. })));
    }

    #[test]
    fn exhausts_turn_budget() {
        let vocabulary = vocabulary(WORDS);
        let config = SolverConfig::default().with_max_turns(2);
        let game = Game::new(&vocabulary, &config);
        let script = vocabulary.words(&["zzzzz", "qqqqq"]).unwrap();
        let hidden = vocabulary.word("hello").unwrap();

        let outcome = game.play(&script, &mut KnownAnswer::new(hidden)).unwrap();
        assert_eq!(outcome.status, GameStatus::Exhausted);
        assert_eq!(outcome.turns.len(), 2);
        assert_eq!(outcome.remaining.len(), vocabulary.len());
    }

    #[test]
    fn hidden_word_outside_vocabulary_is_contradiction() {
        let vocabulary = vocabulary("abcde\nfghij\n");
        let game = Game::new(&vocabulary, &SolverConfig::default());
        let hidden = vocabulary.word("qqqqq").unwrap();

        let result = game.play(&[], &mut KnownAnswer::new(hidden));
        assert!(matches!(result, Err(SolverError::EmptyCandidateSet)));
    }

    #[test]
    fn adversary_game_stays_consistent() {
        let vocabulary = vocabulary(WORDS);
        let game = Game::new(&vocabulary, &SolverConfig::default());

        // Every adversary pattern leaves at least one candidate, so no contradiction
        let outcome = game.play(&[], &mut AdversaryFeedback::new(&vocabulary)).unwrap();
        assert!(!outcome.turns.is_empty());
        if outcome.is_won() {
            assert!(outcome.turns.last().unwrap().pattern.is_perfect());
        } else {
            assert!(!outcome.remaining.is_empty());
        }
    }

    #[test]
    fn adversary_weighs_against_whole_vocabulary() {
        let vocabulary = vocabulary("zzzzz 979\nirate 10\ngrate 10\nslate 1\n");
        let game = Game::new(&vocabulary, &SolverConfig::default());
        let script = vocabulary.words(&["zzzzz", "crane"]).unwrap();

        let outcome = game.play(&script, &mut AdversaryFeedback::new(&vocabulary)).unwrap();
        // zzzzz is denied, then crane keeps the two common words alive over slate
        assert_eq!(outcome.turns[0].pattern.to_text(), "-----");
        assert_eq!(outcome.turns[1].pattern.to_text(), "-gg-g");
        assert_eq!(outcome.turns[1].candidates_before, 3);
    }

    #[test]
    fn interactive_reprompts_on_bad_input() {
        let vocabulary = vocabulary("abcde\nfghij\n");
        let game = Game::new(&vocabulary, &SolverConfig::default());
        let script = vocabulary.words(&["abcde"]).unwrap();

        let input = Cursor::new("gg\nggggx\nggggg\n");
        let mut output: Vec<u8> = Vec::new();
        let mut source = InteractiveFeedback::new(input, &mut output, 5);

        let outcome = game.play(&script, &mut source).unwrap();
        assert_eq!(outcome.status, GameStatus::Won { turns: 1 });

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Guess 1: ABCDE"));
        assert_eq!(transcript.matches("Enter score using -yg: ").count(), 3);
    }

    #[test]
    fn interactive_contradiction_surfaces() {
        let vocabulary = vocabulary("abcde\nfghij\n");
        let game = Game::new(&vocabulary, &SolverConfig::default());
        let script = vocabulary.words(&["abcde"]).unwrap();

        // g---- for abcde matches neither word
        let input = Cursor::new("g----\n");
        let mut source = InteractiveFeedback::new(input, Vec::new(), 5);

        let result = game.play(&script, &mut source);
        assert!(matches!(result, Err(SolverError::EmptyCandidateSet)));
    }

    #[test]
    fn interactive_input_closed() {
        let vocabulary = vocabulary("abcde\nfghij\n");
        let game = Game::new(&vocabulary, &SolverConfig::default());

        let mut source = InteractiveFeedback::new(Cursor::new(""), Vec::new(), 5);
        let result = game.play(&[], &mut source);
        assert!(matches!(result, Err(SolverError::InputClosed)));
    }
}
