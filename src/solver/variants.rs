//! Feedback variant enumeration
//!
//! For a guess word of length L there are exactly 2^L variants, one per
//! subset of positions marked kept. Enumeration is a pure function of the
//! word, memoized per enumerator instance so tuples sharing a word pay for
//! it once.

use crate::core::{Pattern, Variant, Word};
use rustc_hash::FxHashMap;

/// Enumerates every feedback outcome a guess word could produce
///
/// Owns its cache; separate enumerators share no state.
#[derive(Debug, Default)]
pub struct VariantEnumerator {
    cache: FxHashMap<Word, Vec<Variant>>,
}

impl VariantEnumerator {
    /// Create an enumerator with an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All 2^L feedback variants of a word
    ///
    /// Each variant keeps one subset of positions and excludes the letters
    /// of `word` absent from those kept positions. Words with repeated
    /// letters yield some variants that coincide by value; all 2^L entries
    /// are returned regardless.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Word;
    /// use wordle_openers::solver::VariantEnumerator;
    ///
    /// let mut enumerator = VariantEnumerator::new();
    /// let variants = enumerator.variants_of(&Word::new("cat").unwrap());
    /// assert_eq!(variants.len(), 8); // 2^3
    /// ```
    pub fn variants_of(&mut self, word: &Word) -> &[Variant] {
        self.cache
            .entry(word.clone())
            .or_insert_with(|| enumerate(word))
    }
}

fn enumerate(word: &Word) -> Vec<Variant> {
    // word.len() <= Word::MAX_LEN < 32, so the shift cannot overflow
    let subsets = 1u32 << word.len();
    let word_letters = word.letters();

    (0..subsets)
        .map(|kept| {
            let pattern = Pattern::masked(word, kept);
            let excluded = word_letters.difference(pattern.kept_letters());
            Variant::new(pattern, excluded)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;

    #[test]
    fn variant_count_is_two_to_the_length() {
        let mut enumerator = VariantEnumerator::new();
        for (text, expected) in [("cat", 8), ("crane", 32)] {
            let word = Word::new(text).unwrap();
            assert_eq!(enumerator.variants_of(&word).len(), expected);
        }
    }

    #[test]
    fn patterns_have_word_length() {
        let mut enumerator = VariantEnumerator::new();
        let word = Word::new("crane").unwrap();
        for variant in enumerator.variants_of(&word) {
            assert_eq!(variant.pattern.len(), 5);
        }
    }

    #[test]
    fn excluded_is_word_letters_minus_kept_letters() {
        let mut enumerator = VariantEnumerator::new();
        let word = Word::new("crane").unwrap();

        for variant in enumerator.variants_of(&word) {
            let expected = word.letters().difference(variant.pattern.kept_letters());
            assert_eq!(variant.excluded, expected);
        }
    }

    #[test]
    fn all_kept_variant_excludes_nothing() {
        let mut enumerator = VariantEnumerator::new();
        let word = Word::new("crane").unwrap();

        let full = enumerator
            .variants_of(&word)
            .iter()
            .find(|v| format!("{}", v.pattern) == "crane")
            .unwrap()
            .clone();
        assert_eq!(full.excluded, LetterSet::EMPTY);
    }

    #[test]
    fn all_wildcard_variant_excludes_every_letter() {
        let mut enumerator = VariantEnumerator::new();
        let word = Word::new("crane").unwrap();

        let blank = enumerator
            .variants_of(&word)
            .iter()
            .find(|v| format!("{}", v.pattern) == ".....")
            .unwrap()
            .clone();
        assert_eq!(blank.excluded, word.letters());
    }

    #[test]
    fn repeated_letters_still_yield_full_count() {
        let mut enumerator = VariantEnumerator::new();
        let word = Word::new("speed").unwrap();
        let variants = enumerator.variants_of(&word).to_vec();

        assert_eq!(variants.len(), 32);

        // Keeping either 'e' alone produces the same exclusion set, so the
        // two variants coincide by value.
        let keep_first_e = variants
            .iter()
            .find(|v| format!("{}", v.pattern) == "..e..")
            .unwrap();
        let keep_second_e = variants
            .iter()
            .find(|v| format!("{}", v.pattern) == "...e.")
            .unwrap();
        assert_eq!(keep_first_e.excluded, keep_second_e.excluded);
    }

    #[test]
    fn cached_result_is_stable() {
        let mut enumerator = VariantEnumerator::new();
        let word = Word::new("crane").unwrap();

        let first = enumerator.variants_of(&word).to_vec();
        let second = enumerator.variants_of(&word).to_vec();
        assert_eq!(first, second);
    }
}
