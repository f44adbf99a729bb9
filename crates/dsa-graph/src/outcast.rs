//! Outcast detection: the noun least related to the others.
//!
//! A synset's remoteness is the sum of its shortest-ancestral-path
//! distances to every synset in the wordnet; the outcast of a noun list
//! is the candidate with the largest sum. Candidate sums are independent,
//! so they are computed in parallel.

use crate::directed_bfs::DirectedBreadthFirstPaths;
use crate::wordnet::{WordNet, WordNetError};
use rayon::prelude::*;

/// Outcast queries against a [`WordNet`].
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// Sum of the semantic distances from `synset` to every synset, or
    /// `None` when some pair shares no ancestor.
    ///
    /// # Panics
    ///
    /// Panics if `synset` is not a synset id.
    pub fn distance_sum(&self, synset: usize) -> Option<usize> {
        let digraph = self.wordnet.hypernym_digraph();
        let from_candidate = DirectedBreadthFirstPaths::new(digraph, synset);
        let mut total = 0;
        for target in 0..digraph.v() {
            let from_target = DirectedBreadthFirstPaths::new(digraph, target);
            let mut best: Option<usize> = None;
            for v in 0..digraph.v() {
                let (Some(up), Some(down)) = (from_candidate.dist_to(v), from_target.dist_to(v))
                else {
                    continue;
                };
                let length = up + down;
                match best {
                    Some(top) if top <= length => {}
                    _ => best = Some(length),
                }
            }
            total += best?;
        }
        Some(total)
    }

    /// The synset among the given nouns' synsets that lies furthest from
    /// the wordnet as a whole. Ties go to the smallest synset id.
    ///
    /// # Panics
    ///
    /// Panics if `nouns` is empty.
    pub fn outcast(&self, nouns: &[&str]) -> Result<usize, WordNetError> {
        assert!(!nouns.is_empty(), "outcast needs at least one noun");
        let mut candidates = Vec::new();
        for noun in nouns {
            candidates.extend_from_slice(self.wordnet.resolve(noun)?);
        }
        candidates.sort_unstable();
        candidates.dedup();
        self.furthest(&candidates).ok_or(WordNetError::NoCommonAncestor)
    }

    /// The outcast over every synset at once, or `None` for an empty
    /// wordnet.
    pub fn outcast_all(&self) -> Option<usize> {
        let candidates: Vec<usize> = (0..self.wordnet.len()).collect();
        self.furthest(&candidates)
    }

    fn furthest(&self, candidates: &[usize]) -> Option<usize> {
        let sums: Vec<(usize, usize)> = candidates
            .par_iter()
            .filter_map(|&id| self.distance_sum(id).map(|sum| (id, sum)))
            .collect();

        let mut winner: Option<(usize, usize)> = None;
        for (id, sum) in sums {
            match winner {
                Some((_, top)) if top >= sum => {}
                _ => winner = Some((id, sum)),
            }
        }
        winner.map(|(id, _)| id)
    }
}

// ---------------------------------------------------------------------------
