//! Wordle Entropy Engine - CLI
//!
//! Entropy-driven guessing for Wordle-family games, an adversary, and
//! evaluators for the full decision tree.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_entropy_engine::{
    commands::{
        best_pair, play_adversary, play_known, rank_openers, run_expected, run_failure, run_filter, run_interactive,
        run_search, run_self_check, run_sequence, score_words,
    },
    core::Word,
    output::{
        print_check_report, print_crowd_matches, print_expected, print_failure, print_game_outcome,
        print_opener_pair, print_ranking, print_score, print_search_report, print_sequence_score,
    },
    solver::{DEFAULT_FAILURE_DEPTH, DEFAULT_MAX_TURNS, Metric, SolverConfig},
    wordlists::{Vocabulary, Weighting},
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy_engine",
    about = "Entropy-maximizing Wordle solver with adversarial and game-tree modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: one word per line, optionally followed by a frequency
    #[arg(short = 'w', long, global = true, default_value = "words")]
    words: PathBuf,

    /// How frequencies become weights
    #[arg(long, global = true, value_enum, default_value_t = Weighting::Raw)]
    weighting: Weighting,

    /// Guess scoring metric
    #[arg(short, long, global = true, value_enum, default_value_t = Metric::Entropy)]
    metric: Metric,

    /// Turn budget per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Log game turns and tree progress
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses and read feedback from stdin (default)
    Interactive {
        /// Opening guesses to use before the solver takes over
        guesses: Vec<String>,
    },

    /// Solve a known hidden word
    Play {
        hidden: String,
        /// Opening guesses to use before the solver takes over
        guesses: Vec<String>,
    },

    /// Solve a known hidden word, guessing only live candidates
    Hard {
        hidden: String,
        /// Opening guesses to use before the solver takes over
        guesses: Vec<String>,
    },

    /// Play against feedback chosen to be as unhelpful as possible
    Adversary {
        /// Opening guesses to use before the solver takes over
        guesses: Vec<String>,
    },

    /// Count candidates the solver cannot resolve within the turn budget
    Search {
        /// Opening guesses to use before the solver takes over
        guesses: Vec<String>,
    },

    /// Expected number of guesses over the whole vocabulary
    #[command(alias = "exp")]
    Expected {
        /// Opening guesses to use before the solver takes over
        guesses: Vec<String>,
    },

    /// Share of the vocabulary still ambiguous at a depth limit
    Fail {
        #[arg(short, long, default_value_t = DEFAULT_FAILURE_DEPTH)]
        depth: usize,
    },

    /// Score a fixed guess sequence with the selected metric
    Eval {
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Rank every vocabulary word as an opener
    Top {
        /// Show only the best N
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Find the best pair of opening guesses
    Pairs,

    /// List hidden words consistent with shared score grids
    Filter {
        /// Patterns such as -yg-g, with a lone / between grids
        #[arg(required = true, allow_hyphen_values = true)]
        patterns: Vec<String>,
    },

    /// Print the pattern of GUESS against HIDDEN
    Score { hidden: String, guess: String },

    /// Check the scorer against known patterns
    Check,
}

fn load_vocabulary(path: &Path, weighting: Weighting) -> Result<Vocabulary> {
    Vocabulary::load(path, weighting)
        .with_context(|| format!("Failed to load vocabulary from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = SolverConfig::default()
        .with_metric(cli.metric)
        .with_max_turns(cli.max_turns);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive { guesses: Vec::new() });

    let load = || load_vocabulary(&cli.words, cli.weighting);

    match command {
        Commands::Interactive { guesses } => {
            let vocabulary = load()?;
            let stdin = io::stdin();
            let outcome = run_interactive(&vocabulary, &config, &guesses, stdin.lock(), io::stdout())
                .context("Interactive game ended early")?;
            print_game_outcome(&outcome);
        }
        Commands::Play { hidden, guesses } => {
            let vocabulary = load()?;
            let outcome = play_known(&vocabulary, &config, &hidden, &guesses)
                .with_context(|| format!("Failed to solve '{hidden}'"))?;
            print_game_outcome(&outcome);
        }
        Commands::Hard { hidden, guesses } => {
            let vocabulary = load()?;
            let config = config.with_hard_mode(true);
            let outcome = play_known(&vocabulary, &config, &hidden, &guesses)
                .with_context(|| format!("Failed to solve '{hidden}' in hard mode"))?;
            print_game_outcome(&outcome);
        }
        Commands::Adversary { guesses } => {
            let vocabulary = load()?;
            let outcome = play_adversary(&vocabulary, &config, &guesses).context("Adversary game failed")?;
            print_game_outcome(&outcome);
        }
        Commands::Search { guesses } => {
            let vocabulary = load()?;
            let report = run_search(&vocabulary, &config, &guesses).context("Worst-case search failed")?;
            print_search_report(&report);
        }
        Commands::Expected { guesses } => {
            let vocabulary = load()?;
            let mean = run_expected(&vocabulary, &config, &guesses).context("Expected-value evaluation failed")?;
            print_expected(mean);
        }
        Commands::Fail { depth } => {
            let vocabulary = load()?;
            let rate = run_failure(&vocabulary, &config, depth).context("Failure-rate evaluation failed")?;
            print_failure(rate, depth);
        }
        Commands::Eval { guesses } => {
            let vocabulary = load()?;
            let score = run_sequence(&vocabulary, config.metric, &guesses).context("Sequence evaluation failed")?;
            print_sequence_score(&guesses, score);
        }
        Commands::Top { limit } => {
            let vocabulary = load()?;
            let ranked = rank_openers(&vocabulary);
            print_ranking(&ranked, vocabulary.len(), limit);
        }
        Commands::Pairs => {
            let vocabulary = load()?;
            let pair = best_pair(&vocabulary, config.metric).context("Pair search needs at least two words")?;
            print_opener_pair(&pair);
        }
        Commands::Filter { patterns } => {
            let vocabulary = load()?;
            let matches = run_filter(&vocabulary, &patterns).context("Invalid score grid")?;
            print_crowd_matches(&matches);
        }
        Commands::Score { hidden, guess } => run_score_command(&guess, &hidden)?,
        Commands::Check => run_check_command()?,
    }
    Ok(())
}

fn run_score_command(guess: &str, hidden: &str) -> Result<()> {
    let pattern = score_words(guess, hidden).with_context(|| format!("Cannot score '{guess}' against '{hidden}'"))?;
    let guess = Word::new(guess).context("Invalid guess")?;
    print_score(&guess, pattern);
    Ok(())
}

fn run_check_command() -> Result<()> {
    let report = run_self_check().context("Malformed scoring fixture")?;
    print_check_report(&report);
    if !report.passed() {
        bail!("{} scoring fixtures failed", report.mismatches.len());
    }
    Ok(())
}
