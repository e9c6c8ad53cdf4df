//! Word indexing
//!
//! An immutable trie over the solution vocabulary, built once per run, plus
//! the candidate-set representation its queries produce.

mod candidates;
mod trie;

pub use candidates::CandidateSet;
pub use trie::{InvalidVocabularyError, WordIndex};
