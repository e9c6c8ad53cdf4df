//! Wildcard lookup patterns
//!
//! A pattern fixes some positions to exact letters and leaves the rest as
//! wildcards. The string form uses `.` for wildcards, so `".at"` matches
//! "rat", "cat", and "bat" in a 3-letter vocabulary.

use super::{LetterSet, Word};
use std::fmt;

/// One position of a pattern: a fixed letter or a wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// This position must hold exactly this letter
    Letter(u8),
    /// This position matches any letter
    Wildcard,
}

/// A fixed-length wildcard pattern over lowercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    /// Create a pattern from explicit slots
    #[must_use]
    pub const fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Build the pattern that keeps the positions of `word` selected by
    /// `kept`, a bitmask over position indices
    ///
    /// Bit `i` of `kept` set means position `i` shows the word's letter;
    /// unset means wildcard.
    #[must_use]
    pub fn masked(word: &Word, kept: u32) -> Self {
        let slots = word
            .bytes()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if kept & (1 << i) != 0 {
                    Slot::Letter(letter)
                } else {
                    Slot::Wildcard
                }
            })
            .collect();
        Self { slots }
    }

    /// Parse a pattern from a string with `.` as the wildcard
    ///
    /// Returns `None` if the string is empty or contains anything other than
    /// lowercase ASCII letters and `.`.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Pattern;
    ///
    /// let pattern = Pattern::from_str(".at").unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(format!("{pattern}"), ".at");
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        let mut slots = Vec::with_capacity(s.len());
        for b in s.bytes() {
            let slot = match b {
                b'.' => Slot::Wildcard,
                letter if letter.is_ascii_lowercase() => Slot::Letter(letter),
                _ => return None,
            };
            slots.push(slot);
        }

        Some(Self { slots })
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the pattern has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the slots of the pattern
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The set of letters occupying kept (non-wildcard) positions
    #[must_use]
    pub fn kept_letters(&self) -> LetterSet {
        let mut set = LetterSet::new();
        for slot in &self.slots {
            if let Slot::Letter(letter) = slot {
                set.insert(*letter);
            }
        }
        set
    }

    /// Check whether a word matches this pattern
    ///
    /// A word matches when lengths agree and every kept position holds the
    /// pattern's letter.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .slots
                .iter()
                .zip(word.bytes())
                .all(|(slot, &letter)| match slot {
                    Slot::Letter(fixed) => *fixed == letter,
                    Slot::Wildcard => true,
                })
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Letter(letter) => write!(f, "{}", *letter as char)?,
                Slot::Wildcard => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
