//! Guess/solution word representation
//!
//! A Word stores a lowercase ASCII word. Uniform length across a vocabulary
//! is enforced when an index is built, not here, so the engine works for any
//! fixed word length up to [`Word::MAX_LEN`].

use super::LetterSet;
use std::fmt;

/// A lowercase ASCII word, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
    TooLong { len: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
            Self::TooLong { len } => write!(
                f,
                "Word has {len} letters, the maximum is {}",
                Word::MAX_LEN
            ),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Longest accepted word; position subsets are enumerated as `u32`
    /// bit masks downstream
    pub const MAX_LEN: usize = 25;

    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, non-ASCII, longer than
    /// [`Word::MAX_LEN`], or contains anything other than alphabetic
    /// characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() > Self::MAX_LEN {
            return Err(WordError::TooLong { len: text.len() });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The set of distinct letters in this word
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        let mut set = LetterSet::new();
        for &b in self.bytes() {
            set.insert(b);
        }
        set
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
