//! Disjoint-sets (union-find) structures.
//!
//! Models a collection of sets over elements named `0` through `n - 1`.
//! Each element's value is its parent; an element that is its own parent is
//! the canonical (root) element of its set. Four variants trade off the cost
//! of `union` against the cost of `find`: [`QuickFind`], [`QuickUnion`],
//! [`WeightedQuickUnion`] (by subtree size), and [`RankedQuickUnion`]
//! (by tree height).

/// Common operations of the union-find variants.
///
/// All element arguments must be in `0..len()`; out-of-range elements
/// panic.
pub trait UnionFind {
    /// Returns the canonical (root) element of the set containing `p`.
    fn find(&self, p: usize) -> usize;

    /// Merges the set containing `p` with the set containing `q` and
    /// returns the remaining number of disjoint sets.
    fn union(&mut self, p: usize, q: usize) -> usize;

    /// Number of disjoint sets.
    fn count(&self) -> usize;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` iff `p` and `q` share a root.
    fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}

fn validate(n: usize, elements: &[usize]) {
    for &e in elements {
        assert!(e < n, "element {e} is not in a structure of {n} elements");
    }
}

/// Union-find with constant-time `find`: the parent array is kept flat, so
/// every element points directly at its root. `union` pays for this by
/// repointing an entire component.
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl QuickFind {
    pub fn new(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            count: n,
        }
    }
}

impl UnionFind for QuickFind {
    fn find(&self, p: usize) -> usize {
        validate(self.id.len(), &[p]);
        self.id[p]
    }

    fn union(&mut self, p: usize, q: usize) -> usize {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p != root_q {
            for entry in &mut self.id {
                if *entry == root_p {
                    *entry = root_q;
                }
            }
            self.count -= 1;
        }

        self.count
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.id.len()
    }
}

/// The unimproved quick-union structure: `union` links one root under the
/// other, `find` chases parent links (hopping to the grandparent each step
/// to shorten the walk).
#[derive(Debug, Clone)]
pub struct QuickUnion {
    parent: Vec<usize>,
    count: usize,
}

impl QuickUnion {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            count: n,
        }
    }
}

impl UnionFind for QuickUnion {
    fn find(&self, p: usize) -> usize {
        validate(self.parent.len(), &[p]);

        let mut element = p;
        while element != self.parent[element] {
            element = self.parent[self.parent[element]];
        }
        element
    }

    fn union(&mut self, p: usize, q: usize) -> usize {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p != root_q {
            self.parent[root_p] = root_q;
            self.count -= 1;
        }

        self.count
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// Weighted quick-union: each union attaches the smaller tree (by element
/// count) under the root of the larger, keeping tree height logarithmic.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnion {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements in the set containing `p`.
    pub fn size_of(&self, p: usize) -> usize {
        self.size[self.find(p)]
    }
}

impl UnionFind for WeightedQuickUnion {
    fn find(&self, p: usize) -> usize {
        validate(self.parent.len(), &[p]);

        let mut element = p;
        while element != self.parent[element] {
            element = self.parent[self.parent[element]];
        }
        element
    }

    fn union(&mut self, p: usize, q: usize) -> usize {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p == root_q {
            return self.count;
        }

        if self.size[root_p] >= self.size[root_q] {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        } else {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        }

        self.count -= 1;
        self.count
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// Weighted quick-union by height: the taller tree's root wins, and equal
/// heights grow the merged tree by one.
#[derive(Debug, Clone)]
pub struct RankedQuickUnion {
    parent: Vec<usize>,
    height: Vec<usize>,
    count: usize,
}

impl RankedQuickUnion {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            height: vec![0; n],
            count: n,
        }
    }

    /// Height of the tree containing `p`.
    pub fn height_of(&self, p: usize) -> usize {
        self.height[self.find(p)]
    }
}

impl UnionFind for RankedQuickUnion {
    fn find(&self, p: usize) -> usize {
        validate(self.parent.len(), &[p]);

        let mut element = p;
        while element != self.parent[element] {
            element = self.parent[self.parent[element]];
        }
        element
    }

    fn union(&mut self, p: usize, q: usize) -> usize {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p == root_q {
            return self.count;
        }

        if self.height[root_p] == self.height[root_q] {
            self.parent[root_q] = root_p;
            self.height[root_p] += 1;
        } else if self.height[root_p] > self.height[root_q] {
            self.parent[root_q] = root_p;
        } else {
            self.parent[root_p] = root_q;
        }

        self.count -= 1;
        self.count
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

// ---------------------------------------------------------------------------
