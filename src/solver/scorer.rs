//! Worst-case scoring of guess tuples
//!
//! For one ordered guess tuple, every joint feedback outcome is a choice of
//! one variant per word: 2^(L·N) combinations. Each combination pins down a
//! candidate set per word (pattern query, then excluded-letter filter), and
//! a solution must survive all of them at once, so the combination's value
//! is the size of the N-way intersection. The score is the maximum over all
//! combinations: how many solutions an adversary could leave standing.
//!
//! A smaller score is strictly better. The enumeration descends one tuple
//! position at a time carrying the running intersection; intersections only
//! shrink, so a partial no larger than the current maximum is cut off.

use super::{CandidateFilter, VariantEnumerator};
use crate::core::{GuessTuple, Pattern};
use crate::index::{CandidateSet, WordIndex};
use rustc_hash::FxHashMap;

/// Computes worst-case remaining-candidate counts for guess tuples
///
/// Bound to one index for its whole lifetime: the query memo and filter
/// cache hold that index's word ids, so a scorer can never serve an answer
/// computed against a different vocabulary. Owns a variant cache, a filter
/// cache, and a pattern-query memo, so scoring many tuples that share words
/// stays cheap. Scorers share no state with each other; in a parallel
/// search each worker gets its own.
#[derive(Debug)]
pub struct MinimaxScorer<'a> {
    index: &'a WordIndex,
    variants: VariantEnumerator,
    filter: CandidateFilter<'a>,
    query_memo: FxHashMap<Pattern, CandidateSet>,
}

impl<'a> MinimaxScorer<'a> {
    /// Create a scorer over `index` with empty caches
    #[must_use]
    pub fn new(index: &'a WordIndex) -> Self {
        Self {
            index,
            variants: VariantEnumerator::new(),
            filter: CandidateFilter::new(index),
            query_memo: FxHashMap::default(),
        }
    }

    /// Worst-case number of solution words remaining after this exact guess
    /// sequence, over all possible true solutions
    ///
    /// Deterministic: the same tuple against the same index always produces
    /// the same score. Total over well-formed inputs; a tuple whose word
    /// length does not match the index scores 0 (no pattern can match).
    pub fn score(&mut self, tuple: &GuessTuple) -> usize {
        let mut per_word: Vec<Vec<CandidateSet>> = Vec::with_capacity(tuple.len());

        for word in tuple.words() {
            let variants = self.variants.variants_of(word);
            let mut sets = Vec::with_capacity(variants.len());

            for variant in variants {
                let matched = match self.query_memo.get(&variant.pattern) {
                    Some(hit) => hit.clone(),
                    None => {
                        let set = self.index.query(&variant.pattern);
                        self.query_memo.insert(variant.pattern.clone(), set.clone());
                        set
                    }
                };
                sets.push(self.filter.filter(&matched, variant.excluded));
            }

            per_word.push(sets);
        }

        let mut best = 0;
        descend(&per_word, &self.index.all_candidates(), &mut best);
        best
    }
}

/// Walk one tuple position per level, intersecting as we go
fn descend(levels: &[Vec<CandidateSet>], partial: &CandidateSet, best: &mut usize) {
    // The intersection can only shrink from here
    if partial.len() <= *best {
        return;
    }

    let Some((sets, rest)) = levels.split_first() else {
        *best = partial.len();
        return;
    };

    for set in sets {
        descend(rest, &partial.intersect(set), best);
    }
}
