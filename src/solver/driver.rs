//! Sampled tuple search
//!
//! Scoring one tuple costs O(2^(L·N)) combinations, so the driver never
//! enumerates all guess tuples. Instead it draws a bounded sample per tuple
//! position, scores the cross product of the samples in parallel, and keeps
//! the best results. The random source is injected so a fixed seed
//! reproduces the sampled tuples and the ranking exactly.

use super::MinimaxScorer;
use crate::core::{GuessTuple, Word};
use crate::index::WordIndex;
use indicatif::ProgressBar;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Error type for search configuration problems
///
/// Surfaced before any scoring work begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No sample sizes were configured, so no tuple shape is defined
    EmptySampleSpec,
    /// A position's sample size exceeds the guess vocabulary
    ///
    /// Sampling is without replacement, so this cannot be satisfied.
    SampleExceedsVocabulary {
        position: usize,
        requested: usize,
        available: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySampleSpec => write!(f, "At least one sample size is required"),
            Self::SampleExceedsVocabulary {
                position,
                requested,
                available,
            } => write!(
                f,
                "Sample size {requested} for tuple position {position} exceeds the {available}-word guess vocabulary"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Words drawn per tuple position; the tuple length N is the number of
    /// entries, and the cross product of the samples is the search space
    pub sample_sizes: Vec<usize>,
    /// How many of the best (lowest-score) tuples to retain
    pub top_k: usize,
    /// Optional wall-clock budget; tuples not yet scored when it elapses
    /// are abandoned
    pub deadline: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sample_sizes: vec![20, 10, 3],
            top_k: 100,
            deadline: None,
        }
    }
}

/// One scored tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// Worst-case remaining candidates after the tuple's guesses
    pub score: usize,
    pub tuple: GuessTuple,
}

/// Samples, scores, and ranks guess tuples
///
/// This is a heuristic search: it finds the best tuple among the sampled
/// ones, not the global optimum.
#[derive(Debug, Clone, Default)]
pub struct SearchDriver {
    config: SearchConfig,
}

impl SearchDriver {
    /// Create a driver with the given configuration
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The driver's configuration
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Draw the candidate tuples for one search run
    ///
    /// Per tuple position, `sample_sizes[i]` words are drawn without
    /// replacement from `guess_vocab`; the returned tuples are the cross
    /// product of the position samples, minus combinations that repeat a
    /// word across positions.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if no sample sizes are configured or a
    /// sample size exceeds the vocabulary.
    pub fn sample_tuples<R: Rng + ?Sized>(
        &self,
        guess_vocab: &[Word],
        rng: &mut R,
    ) -> Result<Vec<GuessTuple>, ConfigurationError> {
        if self.config.sample_sizes.is_empty() {
            return Err(ConfigurationError::EmptySampleSpec);
        }

        for (position, &requested) in self.config.sample_sizes.iter().enumerate() {
            if requested > guess_vocab.len() {
                return Err(ConfigurationError::SampleExceedsVocabulary {
                    position,
                    requested,
                    available: guess_vocab.len(),
                });
            }
        }

        let samples: Vec<Vec<Word>> = self
            .config
            .sample_sizes
            .iter()
            .map(|&size| {
                guess_vocab
                    .choose_multiple(rng, size)
                    .cloned()
                    .collect::<Vec<Word>>()
            })
            .collect();

        let mut tuples = Vec::new();
        let mut selection = Vec::with_capacity(samples.len());
        cross_product(&samples, &mut selection, &mut tuples);
        Ok(tuples)
    }

    /// Score tuples in parallel
    ///
    /// Each worker owns a private scorer (and so private caches) via
    /// `map_init`; the index is shared read-only. Results come back in
    /// tuple order regardless of scheduling. If a deadline is configured,
    /// tuples reached after it elapses are skipped.
    #[must_use]
    pub fn score_tuples(
        &self,
        tuples: &[GuessTuple],
        index: &WordIndex,
        progress: Option<&ProgressBar>,
    ) -> Vec<ScoreResult> {
        let started = Instant::now();
        let expired = AtomicBool::new(false);

        tuples
            .par_iter()
            .map_init(
                || MinimaxScorer::new(index),
                |scorer, tuple| {
                    if let Some(pb) = progress {
                        pb.inc(1);
                    }

                    if self
                        .config
                        .deadline
                        .is_some_and(|budget| started.elapsed() >= budget)
                    {
                        expired.store(true, Ordering::Relaxed);
                    }
                    if expired.load(Ordering::Relaxed) {
                        return None;
                    }

                    Some(ScoreResult {
                        score: scorer.score(tuple),
                        tuple: tuple.clone(),
                    })
                },
            )
            .flatten()
            .collect()
    }

    /// Retain the `top_k` best (lowest-score) results, reported worst-first
    ///
    /// The returned order is descending by score, matching the reference
    /// output: the last line is the strongest opening.
    #[must_use]
    pub fn rank(&self, mut results: Vec<ScoreResult>) -> Vec<ScoreResult> {
        results.sort_by_key(|r| r.score);
        results.truncate(self.config.top_k);
        results.reverse();
        results
    }

    /// Sample, score, and rank in one call
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the configuration cannot be
    /// satisfied against `guess_vocab`.
    pub fn run<R: Rng + ?Sized>(
        &self,
        guess_vocab: &[Word],
        index: &WordIndex,
        rng: &mut R,
    ) -> Result<Vec<ScoreResult>, ConfigurationError> {
        let tuples = self.sample_tuples(guess_vocab, rng)?;
        let scored = self.score_tuples(&tuples, index, None);
        Ok(self.rank(scored))
    }
}

/// Expand the cross product of the position samples, skipping combinations
/// that repeat a word
fn cross_product(samples: &[Vec<Word>], selection: &mut Vec<Word>, out: &mut Vec<GuessTuple>) {
    let Some((sample, rest)) = samples.split_first() else {
        if let Some(tuple) = GuessTuple::new(selection.clone()) {
            out.push(tuple);
        }
        return;
    };

    for word in sample {
        if selection.contains(word) {
            continue;
        }
        selection.push(word.clone());
        cross_product(rest, selection, out);
        selection.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn small_setup() -> (Vec<Word>, WordIndex) {
        let solutions = vocabulary(&["rat", "cat", "bat", "cot", "car", "ran"]);
        let index = WordIndex::build(&solutions).unwrap();
        let guesses = vocabulary(&[
            "rat", "cat", "bat", "cot", "car", "ran", "tar", "rot", "ton", "net",
        ]);
        (guesses, index)
    }

    #[test]
    fn empty_sample_spec_rejected() {
        let (guesses, _) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![],
            ..SearchConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            driver.sample_tuples(&guesses, &mut rng).unwrap_err(),
            ConfigurationError::EmptySampleSpec
        );
    }

    #[test]
    fn oversized_sample_rejected() {
        let (guesses, _) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![3, 99],
            ..SearchConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            driver.sample_tuples(&guesses, &mut rng).unwrap_err(),
            ConfigurationError::SampleExceedsVocabulary {
                position: 1,
                requested: 99,
                available: guesses.len(),
            }
        );
    }

    #[test]
    fn sampled_tuples_have_distinct_words() {
        let (guesses, _) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![5, 4, 3],
            ..SearchConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(7);

        for tuple in driver.sample_tuples(&guesses, &mut rng).unwrap() {
            assert_eq!(tuple.len(), 3);
            for (i, word) in tuple.words().iter().enumerate() {
                assert!(!tuple.words()[..i].contains(word));
            }
        }
    }

    #[test]
    fn sampling_is_seed_reproducible() {
        let (guesses, _) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![4, 3],
            ..SearchConfig::default()
        });

        let first = driver
            .sample_tuples(&guesses, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = driver
            .sample_tuples(&guesses, &mut StdRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn run_is_seed_reproducible() {
        let (guesses, index) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![4, 3],
            top_k: 5,
            deadline: None,
        });

        let first = driver
            .run(&guesses, &index, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let second = driver
            .run(&guesses, &index, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rank_keeps_best_and_reports_worst_first() {
        let (guesses, index) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![5, 4],
            top_k: 3,
            deadline: None,
        });
        let mut rng = StdRng::seed_from_u64(11);

        let tuples = driver.sample_tuples(&guesses, &mut rng).unwrap();
        let scored = driver.score_tuples(&tuples, &index, None);
        let lowest = scored.iter().map(|r| r.score).min().unwrap();

        let ranked = driver.rank(scored);
        assert_eq!(ranked.len(), 3);

        // Descending order, with the overall best score still present.
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked.last().unwrap().score, lowest);
    }

    #[test]
    fn scores_match_a_fresh_scorer() {
        let (guesses, index) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![3, 2],
            top_k: 100,
            deadline: None,
        });
        let mut rng = StdRng::seed_from_u64(5);

        let tuples = driver.sample_tuples(&guesses, &mut rng).unwrap();
        let scored = driver.score_tuples(&tuples, &index, None);

        let mut scorer = MinimaxScorer::new(&index);
        for result in &scored {
            assert_eq!(result.score, scorer.score(&result.tuple));
        }
    }

    #[test]
    fn expired_deadline_abandons_scoring() {
        let (guesses, index) = small_setup();
        let driver = SearchDriver::new(SearchConfig {
            sample_sizes: vec![4, 3],
            top_k: 100,
            deadline: Some(Duration::ZERO),
        });
        let mut rng = StdRng::seed_from_u64(3);

        let tuples = driver.sample_tuples(&guesses, &mut rng).unwrap();
        let scored = driver.score_tuples(&tuples, &index, None);
        assert!(scored.is_empty());
    }

    #[test]
    fn cross_product_size_without_repeats() {
        // Disjoint samples: the cross product is the full size product.
        let samples = vec![
            vocabulary(&["aaa", "bbb"]),
            vocabulary(&["ccc", "ddd", "eee"]),
        ];
        let mut out = Vec::new();
        cross_product(&samples, &mut Vec::new(), &mut out);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn cross_product_skips_repeated_words() {
        let samples = vec![vocabulary(&["aaa", "bbb"]), vocabulary(&["aaa", "ccc"])];
        let mut out = Vec::new();
        cross_product(&samples, &mut Vec::new(), &mut out);

        // (aaa, aaa) is dropped.
        assert_eq!(out.len(), 3);
        for tuple in &out {
            assert_ne!(tuple.words()[0], tuple.words()[1]);
        }
    }
}
