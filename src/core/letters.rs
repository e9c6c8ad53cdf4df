//! Compact letter sets
//!
//! A `LetterSet` is a 26-bit mask over `a..=z`. Exclusion constraints are
//! letter sets, and the hot path of candidate filtering is a single
//! disjointness test on two masks.

use std::fmt;

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty letter set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Add a letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Check whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether two sets share no letters
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate over the letters in the set in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", letter as char)?;
        }
        write!(f, "}}")
    }
}
