//! Single-tuple scoring command
//!
//! Scores one user-provided guess sequence against a solution vocabulary,
//! for checking a specific opening rather than searching for one.

use crate::core::{GuessTuple, Word};
use crate::index::WordIndex;
use crate::solver::MinimaxScorer;

/// Result of scoring one tuple
#[derive(Debug)]
pub struct ScoreOutcome {
    pub tuple: GuessTuple,
    /// Worst-case remaining solutions after the tuple's guesses
    pub score: usize,
    pub solution_count: usize,
}

/// Score a specific guess sequence
///
/// # Errors
///
/// Returns an error if:
/// - The solution vocabulary is empty or mixes word lengths
/// - A guess word is invalid, repeated, or of the wrong length
pub fn run_score(words: &[String], solutions: &[Word]) -> Result<ScoreOutcome, String> {
    let index = WordIndex::build(solutions).map_err(|e| format!("Invalid solution list: {e}"))?;

    let parsed: Vec<Word> = words
        .iter()
        .map(|text| Word::new(text.as_str()).map_err(|e| format!("Invalid guess '{text}': {e}")))
        .collect::<Result<_, _>>()?;

    if let Some(odd) = parsed.iter().find(|w| w.len() != index.word_len()) {
        return Err(format!(
            "Guess word '{odd}' has {} letters, expected {}",
            odd.len(),
            index.word_len()
        ));
    }

    let tuple =
        GuessTuple::new(parsed).ok_or_else(|| "Guesses must be distinct words".to_string())?;

    let mut scorer = MinimaxScorer::new(&index);
    let score = scorer.score(&tuple);

    Ok(ScoreOutcome {
        tuple,
        score,
        solution_count: index.len(),
    })
}
