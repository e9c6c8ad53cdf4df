//! Candidate sets
//!
//! A candidate set is a sorted, deduplicated vector of word ids into one
//! index's vocabulary. Sorted ids make intersection a linear merge and make
//! the set usable as a value-keyed cache key.

use super::WordIndex;
use crate::core::Word;

/// A set of vocabulary word ids, always sorted and deduplicated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CandidateSet {
    ids: Vec<u32>,
}

impl CandidateSet {
    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Create a set from ids in any order
    #[must_use]
    pub fn from_ids(mut ids: Vec<u32>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    /// Number of candidates in the set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether the set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The ids of the set, in ascending order
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Check whether an id is in the set
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Check whether every id of `self` is in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.ids.iter().all(|&id| other.contains(id))
    }

    /// Intersect two sets by merging their sorted ids
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut ids = Vec::with_capacity(self.len().min(other.len()));
        let (mut i, mut j) = (0, 0);

        while i < self.ids.len() && j < other.ids.len() {
            match self.ids[i].cmp(&other.ids[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    ids.push(self.ids[i]);
                    i += 1;
                    j += 1;
                }
            }
        }

        Self { ids }
    }

    /// Resolve the set to words of the index it was produced from
    pub fn words<'a>(&'a self, index: &'a WordIndex) -> impl Iterator<Item = &'a Word> {
        self.ids.iter().map(|&id| index.resolve(id))
    }
}
