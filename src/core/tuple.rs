//! Guess tuples under evaluation

use super::Word;
use std::fmt;

/// An ordered sequence of distinct guess words
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessTuple {
    words: Vec<Word>,
}

impl GuessTuple {
    /// Create a guess tuple
    ///
    /// Returns `None` if `words` is empty or contains the same word twice.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }

        for (i, word) in words.iter().enumerate() {
            if words[..i].contains(word) {
                return None;
            }
        }

        Some(Self { words })
    }

    /// The words of the tuple, in guess order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of guesses in the tuple
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: empty tuples are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for GuessTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
