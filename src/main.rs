//! Wordle Openers - CLI
//!
//! Searches for multi-word Wordle openings with the best worst case, or
//! scores a specific opening.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_openers::{
    commands::{run_rank, run_score},
    core::Word,
    output::{print_rank_results, print_score_outcome},
    solver::SearchConfig,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_openers",
    about = "Evaluates multi-word Wordle openings by worst-case remaining solutions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search sampled guess tuples and rank them by worst case
    Rank {
        /// File with the solution vocabulary, one word per line
        #[arg(short, long)]
        solutions: PathBuf,

        /// File with the guess vocabulary, one word per line
        #[arg(short, long)]
        guesses: PathBuf,

        /// Words sampled per tuple position, e.g. 20,10,3 for triples
        #[arg(long, value_delimiter = ',', default_value = "20,10,3")]
        samples: Vec<usize>,

        /// Random seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// How many of the best tuples to report
        #[arg(long, default_value = "100")]
        top_k: usize,

        /// Abandon unscored tuples after this many seconds
        #[arg(long)]
        deadline_secs: Option<u64>,
    },

    /// Score one specific opening
    Score {
        /// File with the solution vocabulary, one word per line
        #[arg(short, long)]
        solutions: PathBuf,

        /// The guess words, in order
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            solutions,
            guesses,
            samples,
            seed,
            top_k,
            deadline_secs,
        } => {
            let solution_words = load_words(&solutions)?;
            let guess_words = load_words(&guesses)?;

            let config = SearchConfig {
                sample_sizes: samples,
                top_k,
                deadline: deadline_secs.map(Duration::from_secs),
            };

            let result = run_rank(&solution_words, &guess_words, config, seed)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_rank_results(&result);
            Ok(())
        }
        Commands::Score { solutions, words } => {
            let solution_words = load_words(&solutions)?;

            let outcome = run_score(&words, &solution_words).map_err(|e| anyhow::anyhow!(e))?;
            print_score_outcome(&outcome);
            Ok(())
        }
    }
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    let words = load_from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    Ok(words)
}
