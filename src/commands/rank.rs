//! Opening search command
//!
//! Orchestrates one search run: validate the vocabularies, build the index,
//! sample and score guess tuples, rank the survivors.

use crate::core::Word;
use crate::index::WordIndex;
use crate::solver::{ScoreResult, SearchConfig, SearchDriver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Result of a search run
#[derive(Debug)]
pub struct RankResult {
    /// Retained tuples, worst-first (the last entry is the best opening)
    pub results: Vec<ScoreResult>,
    pub tuples_sampled: usize,
    pub tuples_scored: usize,
    pub solution_count: usize,
    pub guess_count: usize,
    pub duration: Duration,
}

/// Run a sampled opening search
///
/// Both vocabularies must share one word length; sampling is reproducible
/// when `seed` is given.
///
/// # Errors
///
/// Returns an error before any scoring work if:
/// - The solution vocabulary is empty or mixes word lengths
/// - The guess vocabulary is empty or disagrees with the solution length
/// - The search configuration cannot be satisfied
pub fn run_rank(
    solutions: &[Word],
    guesses: &[Word],
    config: SearchConfig,
    seed: Option<u64>,
) -> Result<RankResult, String> {
    let index = WordIndex::build(solutions).map_err(|e| format!("Invalid solution list: {e}"))?;

    if guesses.is_empty() {
        return Err("Guess vocabulary is empty".to_string());
    }
    if let Some(odd) = guesses.iter().find(|w| w.len() != index.word_len()) {
        return Err(format!(
            "Guess word '{odd}' has {} letters, expected {}",
            odd.len(),
            index.word_len()
        ));
    }

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let driver = SearchDriver::new(config);
    let tuples = driver
        .sample_tuples(guesses, &mut rng)
        .map_err(|e| e.to_string())?;

    let pb = ProgressBar::new(tuples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let scored = driver.score_tuples(&tuples, &index, Some(&pb));
    let duration = start.elapsed();
    pb.finish_and_clear();

    let tuples_scored = scored.len();
    let results = driver.rank(scored);

    Ok(RankResult {
        results,
        tuples_sampled: tuples.len(),
        tuples_scored,
        solution_count: index.len(),
        guess_count: guesses.len(),
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup() -> (Vec<Word>, Vec<Word>) {
        let solutions = words_from_slice(&["rat", "cat", "bat", "cot", "car", "ran"]);
        let guesses = words_from_slice(&[
            "rat", "cat", "bat", "cot", "car", "ran", "tar", "rot", "ton", "net",
        ]);
        (solutions, guesses)
    }

    fn config(sample_sizes: Vec<usize>, top_k: usize) -> SearchConfig {
        SearchConfig {
            sample_sizes,
            top_k,
            deadline: None,
        }
    }

    #[test]
    fn rank_produces_ranked_results() {
        let (solutions, guesses) = setup();

        let result = run_rank(&solutions, &guesses, config(vec![4, 3], 5), Some(17)).unwrap();

        assert!(result.tuples_sampled > 0);
        assert_eq!(result.tuples_scored, result.tuples_sampled);
        assert!(result.results.len() <= 5);
        assert_eq!(result.solution_count, 6);
        for pair in result.results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn rank_is_seed_reproducible() {
        let (solutions, guesses) = setup();

        let first = run_rank(&solutions, &guesses, config(vec![4, 3], 10), Some(23)).unwrap();
        let second = run_rank(&solutions, &guesses, config(vec![4, 3], 10), Some(23)).unwrap();
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn rank_rejects_empty_solutions() {
        let (_, guesses) = setup();
        assert!(run_rank(&[], &guesses, config(vec![2], 5), Some(1)).is_err());
    }

    #[test]
    fn rank_rejects_mixed_length_guesses() {
        let (solutions, mut guesses) = setup();
        guesses.push(Word::new("crane").unwrap());

        let err = run_rank(&solutions, &guesses, config(vec![2], 5), Some(1)).unwrap_err();
        assert!(err.contains("crane"));
    }

    #[test]
    fn rank_rejects_oversized_sample() {
        let (solutions, guesses) = setup();
        assert!(run_rank(&solutions, &guesses, config(vec![999], 5), Some(1)).is_err());
    }
}
