//! Excluded-letter candidate filtering
//!
//! Narrows a matched candidate set to the words containing none of a
//! variant's excluded letters. Results are cached by the *content* of the
//! inputs: two equal-by-value candidate sets hit the same entry no matter
//! where they came from.

use crate::core::LetterSet;
use crate::index::{CandidateSet, WordIndex};
use rustc_hash::FxHashMap;

/// Filters candidate sets by excluded-letter constraints
///
/// Bound to one index for its whole lifetime: cached entries hold that
/// index's word ids, so they never outlive the vocabulary they describe.
/// Separate filters share no state.
#[derive(Debug)]
pub struct CandidateFilter<'a> {
    index: &'a WordIndex,
    cache: FxHashMap<(CandidateSet, LetterSet), CandidateSet>,
}

impl<'a> CandidateFilter<'a> {
    /// Create a filter over `index` with an empty cache
    #[must_use]
    pub fn new(index: &'a WordIndex) -> Self {
        Self {
            index,
            cache: FxHashMap::default(),
        }
    }

    /// Keep the candidates containing no excluded letter
    ///
    /// The result is always a subset of `candidates`, and filtering an
    /// already-filtered set by the same exclusions is a no-op.
    pub fn filter(&mut self, candidates: &CandidateSet, excluded: LetterSet) -> CandidateSet {
        if excluded.is_empty() {
            return candidates.clone();
        }

        let index = self.index;
        self.cache
            .entry((candidates.clone(), excluded))
            .or_insert_with(|| {
                let ids = candidates
                    .ids()
                    .iter()
                    .copied()
                    .filter(|&id| index.letters_of(id).is_disjoint(excluded))
                    .collect();
                CandidateSet::from_ids(ids)
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn index(texts: &[&str]) -> WordIndex {
        let vocab: Vec<Word> = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        WordIndex::build(&vocab).unwrap()
    }

    fn texts(set: &CandidateSet, index: &WordIndex) -> Vec<String> {
        let mut out: Vec<String> = set.words(index).map(|w| w.text().to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn removes_words_with_excluded_letters() {
        let index = index(&["rat", "cat", "bat", "cot"]);
        let mut filter = CandidateFilter::new(&index);

        let all = index.all_candidates();
        let excluded: LetterSet = [b'c'].into_iter().collect();

        let kept = filter.filter(&all, excluded);
        assert_eq!(texts(&kept, &index), vec!["bat", "rat"]);
    }

    #[test]
    fn result_is_subset_of_input() {
        let index = index(&["rat", "cat", "bat", "cot", "car"]);
        let mut filter = CandidateFilter::new(&index);

        let all = index.all_candidates();
        let excluded: LetterSet = [b'a', b'o'].into_iter().collect();

        let kept = filter.filter(&all, excluded);
        assert!(kept.is_subset(&all));
        assert!(kept.is_empty()); // every word here has an 'a' or an 'o'
    }

    #[test]
    fn empty_exclusions_keep_everything() {
        let index = index(&["rat", "cat"]);
        let mut filter = CandidateFilter::new(&index);

        let all = index.all_candidates();
        let kept = filter.filter(&all, LetterSet::EMPTY);
        assert_eq!(kept, all);
    }

    #[test]
    fn idempotent() {
        let index = index(&["rat", "cat", "bat", "cot"]);
        let mut filter = CandidateFilter::new(&index);

        let all = index.all_candidates();
        let excluded: LetterSet = [b'c', b'o'].into_iter().collect();

        let once = filter.filter(&all, excluded);
        let twice = filter.filter(&once, excluded);
        assert_eq!(once, twice);
    }

    #[test]
    fn cache_keyed_by_value_not_identity() {
        let index = index(&["rat", "cat", "bat"]);
        let mut filter = CandidateFilter::new(&index);
        let excluded: LetterSet = [b'b'].into_iter().collect();

        // Two distinct but equal-by-value sets must produce equal results.
        let first_input = CandidateSet::from_ids(vec![0, 1, 2]);
        let second_input = CandidateSet::from_ids(vec![2, 0, 1]);
        assert_eq!(first_input, second_input);

        let first = filter.filter(&first_input, excluded);
        let second = filter.filter(&second_input, excluded);
        assert_eq!(first, second);
        assert_eq!(filter.cache.len(), 1);
    }

    #[test]
    fn each_filter_answers_from_its_own_index() {
        // Equal id sets mean different words in different vocabularies; a
        // filter only ever consults the index it was built over.
        let first = index(&["rat", "cat"]);
        let second = index(&["cab", "tot"]);
        let excluded: LetterSet = [b'c'].into_iter().collect();
        let ids = CandidateSet::from_ids(vec![0, 1]);

        let mut over_first = CandidateFilter::new(&first);
        let mut over_second = CandidateFilter::new(&second);

        assert_eq!(texts(&over_first.filter(&ids, excluded), &first), vec!["rat"]);
        assert_eq!(texts(&over_second.filter(&ids, excluded), &second), vec!["tot"]);
    }
}
