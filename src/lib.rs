//! Wordle Openers
//!
//! Evaluates multi-word guessing openings by their worst case: for a
//! candidate sequence of guesses, how many solution words could an
//! adversarial secret still leave standing after all of them? Lower is
//! better.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openers::core::{GuessTuple, Word};
//! use wordle_openers::index::WordIndex;
//! use wordle_openers::solver::MinimaxScorer;
//!
//! let solutions: Vec<Word> = ["rat", "cat", "bat"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let index = WordIndex::build(&solutions).unwrap();
//!
//! let tuple = GuessTuple::new(vec![Word::new("rat").unwrap()]).unwrap();
//! let mut scorer = MinimaxScorer::new(&index);
//! let worst_case = scorer.score(&tuple);
//! assert!(worst_case <= solutions.len());
//! ```

// Core domain types
pub mod core;

// Word index (trie) and candidate sets
pub mod index;

// Scoring engine and sampled search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
