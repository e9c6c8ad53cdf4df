//! Feedback variants
//!
//! A variant is one hypothetical feedback outcome for a guess word under the
//! simplified kept/unknown model: the pattern fixes the kept positions, and
//! the excluded letters are those of the guess that appear at no kept
//! position, asserted to be absent from the solution entirely.

use super::{LetterSet, Pattern};

/// One feedback outcome for a guess word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    /// Kept positions show the guess letter; the rest are wildcards
    pub pattern: Pattern,
    /// Letters of the guess ruled out of the solution by this outcome
    pub excluded: LetterSet,
}

impl Variant {
    /// Create a variant from a pattern and its exclusion set
    #[must_use]
    pub const fn new(pattern: Pattern, excluded: LetterSet) -> Self {
        Self { pattern, excluded }
    }
}
