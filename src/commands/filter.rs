//! Crowd filter command
//!
//! Reads shared score grids from the command line, one pattern per argument,
//! with a lone `/` between grids.

use crate::core::Pattern;
use crate::error::Result;
use crate::solver::{CrowdMatch, crowd_filter};
use crate::wordlists::Vocabulary;

const GRID_SEPARATOR: &str = "/";

/// Split arguments into grids of patterns
///
/// # Errors
///
/// `InvalidFeedbackFormat` for a pattern of the wrong length or with unknown
/// marks.
pub fn parse_grids<S: AsRef<str>>(args: &[S], word_len: usize) -> Result<Vec<Vec<Pattern>>> {
    let mut grids = Vec::new();
    let mut current = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if arg == GRID_SEPARATOR {
            if !current.is_empty() {
                grids.push(std::mem::take(&mut current));
            }
        } else {
            current.push(Pattern::from_text(arg, word_len)?);
        }
    }
    if !current.is_empty() {
        grids.push(current);
    }
    Ok(grids)
}

/// Hidden words in the vocabulary consistent with every grid
///
/// # Errors
///
/// Returns an error if a pattern is malformed.
pub fn run_filter<'v, S: AsRef<str>>(vocabulary: &'v Vocabulary, args: &[S]) -> Result<Vec<CrowdMatch<'v>>> {
    let grids = parse_grids(args, vocabulary.word_len())?;
    Ok(crowd_filter(&vocabulary.candidates(), &grids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::wordlists::Weighting;

    #[test]
    fn separators_split_grids() {
        let grids = parse_grids(&["--ggg", "ggggg", "/", "/", "-y---", "ggggg"], 5).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].len(), 2);
        assert_eq!(grids[1][0].to_text(), "-y---");
    }

    #[test]
    fn last_grid_counts_without_trailing_separator() {
        let vocabulary = Vocabulary::parse("crane\nslate\nirate\ncrate\ngrate\n", Weighting::Raw).unwrap();
        let args = ["--ggg", "ggggg", "/", "--ggg", "--ggg", "ggggg"];

        let matches = run_filter(&vocabulary, &args).unwrap();
        let words: Vec<&str> = matches.iter().map(|m| m.entry.word.text()).collect();
        assert_eq!(words, vec!["slate"]);
    }

    #[test]
    fn malformed_pattern_rejected() {
        let vocabulary = Vocabulary::parse("crane\nslate\n", Weighting::Raw).unwrap();
        assert!(matches!(
            run_filter(&vocabulary, &["--gg"]),
            Err(SolverError::InvalidFeedbackFormat { .. })
        ));
        assert!(matches!(
            run_filter(&vocabulary, &["--gxg"]),
            Err(SolverError::InvalidFeedbackFormat { .. })
        ));
    }
}
