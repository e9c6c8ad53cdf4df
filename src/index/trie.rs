//! Immutable trie over the solution vocabulary
//!
//! The index answers wildcard-pattern queries without a linear vocabulary
//! scan: a fixed letter follows one child, a wildcard branches into every
//! child and unions the results. The trie is append-only during build and
//! strictly read-only afterwards, so queries are safe from multiple threads.

use super::CandidateSet;
use crate::core::{LetterSet, Pattern, Slot, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for vocabulary validation at index build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidVocabularyError {
    /// The vocabulary contained no words
    Empty,
    /// A word's length differs from the length established by the first word
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for InvalidVocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Vocabulary must contain at least one word"),
            Self::LengthMismatch {
                word,
                expected,
                found,
            } => write!(
                f,
                "Word '{word}' has {found} letters, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for InvalidVocabularyError {}

#[derive(Debug, Default)]
struct Node {
    children: FxHashMap<u8, Node>,
    /// Id of the word terminating at this node, if any
    word: Option<u32>,
}

/// Immutable word index answering wildcard queries
///
/// # Examples
/// ```
/// use wordle_openers::core::{Pattern, Word};
/// use wordle_openers::index::WordIndex;
///
/// let vocabulary = vec![
///     Word::new("rat").unwrap(),
///     Word::new("cat").unwrap(),
///     Word::new("bat").unwrap(),
/// ];
/// let index = WordIndex::build(&vocabulary).unwrap();
///
/// let matches = index.query(&Pattern::from_str(".at").unwrap());
/// assert_eq!(matches.len(), 3);
/// ```
#[derive(Debug)]
pub struct WordIndex {
    root: Node,
    word_len: usize,
    words: Vec<Word>,
    letters: Vec<LetterSet>,
}

impl WordIndex {
    /// Build an index from a vocabulary
    ///
    /// The first word establishes the uniform length L; duplicate words are
    /// inserted once.
    ///
    /// # Errors
    /// Returns `InvalidVocabularyError` if the vocabulary is empty or any
    /// word's length differs from L. A build error is fatal: no partially
    /// built index is returned.
    pub fn build(vocabulary: &[Word]) -> Result<Self, InvalidVocabularyError> {
        let first = vocabulary.first().ok_or(InvalidVocabularyError::Empty)?;

        let mut index = Self {
            root: Node::default(),
            word_len: first.len(),
            words: Vec::new(),
            letters: Vec::new(),
        };

        for word in vocabulary {
            if word.len() != index.word_len {
                return Err(InvalidVocabularyError::LengthMismatch {
                    word: word.text().to_string(),
                    expected: index.word_len,
                    found: word.len(),
                });
            }
            index.insert(word);
        }

        Ok(index)
    }

    fn insert(&mut self, word: &Word) {
        let mut node = &mut self.root;
        for &letter in word.bytes() {
            node = node.children.entry(letter).or_default();
        }

        if node.word.is_none() {
            let id = u32::try_from(self.words.len()).expect("vocabulary fits in u32 ids");
            node.word = Some(id);
            self.words.push(word.clone());
            self.letters.push(word.letters());
        }
    }

    /// The uniform word length L of the indexed vocabulary
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the index holds no words
    ///
    /// Always false for a successfully built index.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The indexed words, id-ordered
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Resolve a word id to its word
    ///
    /// # Panics
    /// Panics if `id` was not produced by this index.
    #[inline]
    #[must_use]
    pub fn resolve(&self, id: u32) -> &Word {
        &self.words[id as usize]
    }

    /// The distinct letters of the word with the given id
    ///
    /// # Panics
    /// Panics if `id` was not produced by this index.
    #[inline]
    #[must_use]
    pub fn letters_of(&self, id: u32) -> LetterSet {
        self.letters[id as usize]
    }

    /// The set of every indexed word
    #[must_use]
    pub fn all_candidates(&self) -> CandidateSet {
        CandidateSet::from_ids((0..self.words.len() as u32).collect())
    }

    /// Query the index with a wildcard pattern
    ///
    /// Returns the set of indexed words matching the pattern. A pattern
    /// whose length differs from L matches nothing. Deterministic, no side
    /// effects, safe to call concurrently.
    #[must_use]
    pub fn query(&self, pattern: &Pattern) -> CandidateSet {
        if pattern.len() != self.word_len {
            return CandidateSet::empty();
        }

        let mut ids = Vec::new();
        Self::collect_matches(&self.root, pattern.slots(), &mut ids);
        CandidateSet::from_ids(ids)
    }

    fn collect_matches(node: &Node, slots: &[Slot], ids: &mut Vec<u32>) {
        let Some((slot, rest)) = slots.split_first() else {
            if let Some(id) = node.word {
                ids.push(id);
            }
            return;
        };

        match slot {
            Slot::Letter(letter) => {
                if let Some(child) = node.children.get(letter) {
                    Self::collect_matches(child, rest, ids);
                }
            }
            Slot::Wildcard => {
                for child in node.children.values() {
                    Self::collect_matches(child, rest, ids);
                }
            }
        }
    }

    /// Exact membership check (a trie walk with no wildcards)
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        let mut node = &self.root;
        for letter in word.bytes() {
            match node.children.get(letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.word.is_some()
    }
}
