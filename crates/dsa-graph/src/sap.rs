//! Shortest ancestral paths in the hypernym DAG.
//!
//! An ancestral path between two synsets climbs from each toward the root
//! until the climbs meet; the shortest one defines both the semantic
//! distance and the closest common ancestor. Each query runs one
//! multi-source breadth-first sweep per side and scans the vertices for
//! the smallest combined distance, so ties go to the smallest synset id.

use crate::directed_bfs::DirectedBreadthFirstPaths;
use crate::wordnet::{WordNet, WordNetError};
use serde::{Deserialize, Serialize};

/// A resolved shortest ancestral path.
///
/// `path` runs from a synset of the first noun up through `ancestor` and
/// back down to a synset of the second noun; `length` counts its edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SapResult {
    pub path: Vec<usize>,
    pub length: usize,
    pub ancestor: usize,
}

/// Shortest-ancestral-path queries against a [`WordNet`].
#[derive(Debug, Clone, Copy)]
pub struct Sap<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Sap<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// Length of the shortest ancestral path between the two synset sets,
    /// or `None` when either set is empty.
    ///
    /// # Panics
    ///
    /// Panics if any id is not a synset id.
    pub fn length(&self, a: &[usize], b: &[usize]) -> Option<usize> {
        self.closest(a, b).map(|(_, length)| length)
    }

    /// The closest common ancestor of the two synset sets, or `None` when
    /// either set is empty.
    ///
    /// # Panics
    ///
    /// Panics if any id is not a synset id.
    pub fn ancestor(&self, a: &[usize], b: &[usize]) -> Option<usize> {
        self.closest(a, b).map(|(ancestor, _)| ancestor)
    }

    fn closest(&self, a: &[usize], b: &[usize]) -> Option<(usize, usize)> {
        let (_, _, best) = self.sweep(a, b);
        best
    }

    fn sweep(
        &self,
        a: &[usize],
        b: &[usize],
    ) -> (
        DirectedBreadthFirstPaths,
        DirectedBreadthFirstPaths,
        Option<(usize, usize)>,
    ) {
        let digraph = self.wordnet.hypernym_digraph();
        let from_a = DirectedBreadthFirstPaths::from_sources(digraph, a);
        let from_b = DirectedBreadthFirstPaths::from_sources(digraph, b);
        let mut best: Option<(usize, usize)> = None;
        for v in 0..digraph.v() {
            let (Some(up), Some(down)) = (from_a.dist_to(v), from_b.dist_to(v)) else {
                continue;
            };
            let total = up + down;
            match best {
                Some((_, top)) if top <= total => {}
                _ => best = Some((v, total)),
            }
        }
        (from_a, from_b, best)
    }

    /// The full shortest ancestral path between two nouns.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> Result<SapResult, WordNetError> {
        let a = self.wordnet.resolve(noun_a)?;
        let b = self.wordnet.resolve(noun_b)?;
        let (from_a, from_b, best) = self.sweep(a, b);
        let (ancestor, length) = best.ok_or(WordNetError::NoCommonAncestor)?;
        let mut path = from_a
            .path_to(ancestor)
            .ok_or(WordNetError::NoCommonAncestor)?;
        let descent = from_b
            .path_to(ancestor)
            .ok_or(WordNetError::NoCommonAncestor)?;
        path.extend(descent.iter().rev().skip(1));
        Ok(SapResult {
            path,
            length,
            ancestor,
        })
    }

    /// The semantic distance between two nouns: the length of their
    /// shortest ancestral path.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<usize, WordNetError> {
        self.sap(noun_a, noun_b).map(|result| result.length)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SYNSETS: &str = "\
0,0,the root
1,1,first branch
2,2,second branch
3,3,leaf three
4,4,leaf four
5,5,inner five
6,6,inner six
7,7,leaf seven
8,8,leaf eight
9,9,leaf nine
";

    const HYPERNYMS: &str = "\
0
1,0
2,0
3,1,5
4,1
5,1,2
6,2,0
7,5
8,6
9,8,0
";

    fn fixture() -> WordNet {
        WordNet::from_strs(SYNSETS, HYPERNYMS).unwrap()
    }

    #[test]
    fn a_noun_is_at_distance_zero_from_itself() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        for id in 0..10 {
            let noun = id.to_string();
            let result = sap.sap(&noun, &noun).unwrap();
            assert_eq!(result.length, 0);
            assert_eq!(result.ancestor, id);
            assert_eq!(result.path, vec![id]);
        }
    }

    #[test]
    fn a_direct_hypernym_is_one_step_away() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        let result = sap.sap("1", "4").unwrap();
        assert_eq!(result.length, 1);
        assert_eq!(result.ancestor, 1);
        assert_eq!(result.path, vec![1, 4]);
    }

    #[test]
    fn the_path_climbs_and_descends_through_the_ancestor() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);

        let result = sap.sap("5", "9").unwrap();
        assert_eq!(result.length, 3);
        assert_eq!(result.ancestor, 0);
        assert_eq!(result.path, vec![5, 1, 0, 9]);

        let result = sap.sap("9", "2").unwrap();
        assert_eq!(result.length, 2);
        assert_eq!(result.ancestor, 0);
        assert_eq!(result.path, vec![9, 0, 2]);

        let result = sap.sap("4", "8").unwrap();
        assert_eq!(result.length, 4);
        assert_eq!(result.ancestor, 0);
        assert_eq!(result.path, vec![4, 1, 0, 6, 8]);
    }

    #[test]
    fn the_closest_ancestor_wins_over_the_root() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        // 3 and 7 meet at 5 two steps apart; the root is five steps.
        assert_eq!(sap.length(&[3], &[7]), Some(2));
        assert_eq!(sap.ancestor(&[3], &[7]), Some(5));
    }

    #[test]
    fn a_tie_between_ancestors_goes_to_the_smallest_id() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        // 3 and 6 meet at both 0 and 2 three steps apart.
        assert_eq!(sap.length(&[3], &[6]), Some(3));
        assert_eq!(sap.ancestor(&[3], &[6]), Some(0));
    }

    #[test]
    fn a_set_query_uses_its_nearest_member() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        assert_eq!(sap.length(&[3, 4], &[9]), Some(3));
        assert_eq!(sap.ancestor(&[3, 4], &[9]), Some(0));
    }

    #[test]
    fn an_empty_set_has_no_ancestor() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        assert_eq!(sap.length(&[], &[0]), None);
        assert_eq!(sap.ancestor(&[0], &[]), None);
    }

    #[test]
    fn an_unknown_noun_is_reported_with_a_suggestion() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        let err = sap.sap("10", "3").unwrap_err();
        match err {
            WordNetError::UnknownNoun { word, suggestion } => {
                assert_eq!(word, "10");
                assert_eq!(suggestion.as_deref(), Some("1"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn distance_is_the_path_length() {
        let wordnet = fixture();
        let sap = Sap::new(&wordnet);
        assert_eq!(sap.distance("3", "7").unwrap(), 2);
        assert_eq!(sap.distance("7", "3").unwrap(), 2);
    }
}
