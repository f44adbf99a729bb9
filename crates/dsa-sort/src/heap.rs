//! Binary max-heap and heapsort.
//!
//! The heap is a complete binary tree in level order over a flat array,
//! with every parent no smaller than its children, so the maximum sits at
//! the root. Storage is 0-indexed: the parent of `k` is `(k - 1) / 2` and
//! its children are `2k + 1` and `2k + 2`.

/// An array-backed max-oriented priority queue.
#[derive(Debug, Clone, Default)]
pub struct MaxHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends the item at the end and swims it up until heap order is
    /// restored.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.swim(self.items.len() - 1);
    }

    /// The largest item, or `None` when the heap is empty.
    pub fn max(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the largest item: swap the root with the last
    /// item, pop it off, sink the new root back down.
    pub fn del_max(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let max = self.items.pop();
        sink(&mut self.items, 0);
        max
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drains the heap into an ascending vector.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(item) = self.del_max() {
            out.push(item);
        }
        out.reverse();
        out
    }

    /// Bottom-up reheapify: exchange the item at `k` with its parent until
    /// the parent is no smaller.
    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.items[k] <= self.items[parent] {
                break;
            }
            self.items.swap(k, parent);
            k = parent;
        }
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for item in iter {
            heap.insert(item);
        }
        heap
    }
}

/// Top-down reheapify over `a[..]`: exchange the item at `k` with its
/// larger child until both children are no larger (ties pick the left
/// child, as the original ordering does).
fn sink<T: Ord>(a: &mut [T], mut k: usize) {
    let n = a.len();
    loop {
        let left = 2 * k + 1;
        if left >= n {
            break;
        }
        let mut larger = left;
        let right = left + 1;
        if right < n && a[right] > a[left] {
            larger = right;
        }
        if a[k] >= a[larger] {
            break;
        }
        a.swap(k, larger);
        k = larger;
    }
}

/// In-place heapsort: heapify by sinking every parent from the deepest up,
/// then repeatedly swap the maximum to the shrinking tail.
///
/// Sorting only a prefix is spelled `heap_sort(&mut a[..k])`.
pub fn heap_sort<T: Ord>(a: &mut [T]) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    for k in (0..n / 2).rev() {
        sink(a, k);
    }
    for end in (1..n).rev() {
        a.swap(0, end);
        sink(&mut a[..end], 0);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::shuffle::knuth_shuffle_with;

    #[test]
    fn empty_heap() {
        let mut heap: MaxHeap<i32> = MaxHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.max(), None);
        assert_eq!(heap.del_max(), None);
    }

    #[test]
    fn insert_keeps_level_order() {
        let heap: MaxHeap<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(heap.items, vec![3, 1, 2]);
    }

    #[test]
    fn insert_strings() {
        let mut heap = MaxHeap::new();
        heap.insert("first");
        assert_eq!(heap.items, vec!["first"]);
        heap.insert("last");
        assert_eq!(heap.items, vec!["last", "first"]);
        heap.insert("middle");
        assert_eq!(heap.items, vec!["middle", "first", "last"]);
    }

    #[test]
    fn swim_promotes_a_large_leaf() {
        let mut heap = MaxHeap {
            items: vec![6, 5, 4, 3, 2, 1, 7],
        };
        heap.swim(6);
        assert_eq!(heap.items, vec![7, 5, 6, 3, 2, 1, 4]);
    }

    #[test]
    fn del_max_drains_in_descending_order() {
        let mut heap: MaxHeap<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(heap.del_max(), Some(3));
        assert_eq!(heap.del_max(), Some(2));
        assert_eq!(heap.del_max(), Some(1));
        assert_eq!(heap.del_max(), None);
    }

    #[test]
    fn max_peeks_without_removing() {
        let heap: MaxHeap<i32> = [2, 9, 4].into_iter().collect();
        assert_eq!(heap.max(), Some(&9));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn into_sorted_vec_is_ascending() {
        let heap: MaxHeap<i32> = [5, 1, 4, 2, 3].into_iter().collect();
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn heap_handles_duplicates() {
        let heap: MaxHeap<i32> = [2, 2, 1, 2, 1].into_iter().collect();
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn heap_sort_edge_inputs() {
        let mut empty: Vec<i32> = vec![];
        heap_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec!["one"];
        heap_sort(&mut single);
        assert_eq!(single, vec!["one"]);
    }

    #[test]
    fn heap_sort_sorts() {
        let mut a = vec![5, 4, 3, 2, 1];
        heap_sort(&mut a);
        assert_eq!(a, vec![1, 2, 3, 4, 5]);

        let mut b = vec![2, 1, 2, 1, 2];
        heap_sort(&mut b);
        assert_eq!(b, vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn heap_sort_on_a_prefix_leaves_the_tail_alone() {
        let mut a = vec![5, 4, 3, 2, 1];
        heap_sort(&mut a[..1]);
        assert_eq!(a, vec![5, 4, 3, 2, 1]);

        let mut b = vec![5, 4, 3, 2, 1];
        heap_sort(&mut b[..2]);
        assert_eq!(b, vec![4, 5, 3, 2, 1]);

        let mut c = vec![5, 4, 3, 2, 1];
        heap_sort(&mut c[..3]);
        assert_eq!(c, vec![3, 4, 5, 2, 1]);

        let mut d = vec![5, 4, 3, 2, 1];
        heap_sort(&mut d[..4]);
        assert_eq!(d, vec![2, 3, 4, 5, 1]);
    }

    #[test]
    fn heap_sort_shuffled_ranges() {
        let mut rng = StdRng::seed_from_u64(23);
        for n in [2, 3, 10, 100, 10_000] {
            let expected: Vec<i32> = (0..n).collect();
            let mut a = expected.clone();
            knuth_shuffle_with(&mut rng, &mut a);
            heap_sort(&mut a);
            assert_eq!(a, expected, "n = {n}");
        }
    }
}
