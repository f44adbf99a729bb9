//! Capacity-bounded priority queue over an unordered array.
//!
//! The elementary formulation that precedes the binary heap: keys live in
//! insertion order and the extremes are found by scanning. Once the queue
//! is full, inserting evicts the smallest key to make room.

#[derive(Debug, Clone)]
pub struct BoundedPq<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> BoundedPq<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds a key, evicting the current minimum first when the queue is
    /// full.
    pub fn insert(&mut self, item: T) {
        if self.is_full() {
            self.remove_min();
        }
        self.items.push(item);
    }

    /// Removes and returns the largest key (first occurrence under ties),
    /// or `None` when the queue is empty.
    pub fn remove_max(&mut self) -> Option<T> {
        let index = self.max_index()?;
        self.swap_out(index)
    }

    /// Removes and returns the smallest key (first occurrence under ties),
    /// or `None` when the queue is empty.
    pub fn remove_min(&mut self) -> Option<T> {
        let index = self.min_index()?;
        self.swap_out(index)
    }

    /// The largest key without removing it.
    pub fn max(&self) -> Option<&T> {
        self.max_index().map(|index| &self.items[index])
    }

    /// The smallest key without removing it.
    pub fn min(&self) -> Option<&T> {
        self.min_index().map(|index| &self.items[index])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Swap the key at `index` with the last one, then pop it off.
    fn swap_out(&mut self, index: usize) -> Option<T> {
        let last = self.items.len() - 1;
        self.items.swap(index, last);
        self.items.pop()
    }

    fn max_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, item) in self.items.iter().enumerate() {
            match best {
                Some(b) if *item <= self.items[b] => {}
                _ => best = Some(index),
            }
        }
        best
    }

    fn min_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, item) in self.items.iter().enumerate() {
            match best {
                Some(b) if *item >= self.items[b] => {}
                _ => best = Some(index),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_full_transitions() {
        let mut pq = BoundedPq::new(3);
        assert!(pq.is_empty());
        assert!(!pq.is_full());

        pq.insert('a');
        pq.insert('b');
        assert!(!pq.is_empty());
        assert!(!pq.is_full());

        pq.insert('c');
        assert!(pq.is_full());

        pq.remove_max();
        assert!(!pq.is_full());

        pq.remove_max();
        pq.remove_max();
        assert!(pq.is_empty());
    }

    #[test]
    fn peeks_at_the_extremes() {
        let mut pq = BoundedPq::new(3);
        pq.insert(1);
        pq.insert(2);
        pq.insert(0);
        assert_eq!(pq.max(), Some(&2));
        assert_eq!(pq.min(), Some(&0));
        assert_eq!(pq.len(), 3);

        let empty: BoundedPq<i32> = BoundedPq::new(3);
        assert_eq!(empty.max(), None);
        assert_eq!(empty.min(), None);
    }

    #[test]
    fn remove_max_in_descending_order() {
        let mut pq = BoundedPq::new(3);
        pq.insert(2);
        pq.insert(1);
        pq.insert(0);

        assert_eq!(pq.remove_max(), Some(2));
        assert_eq!(pq.items, vec![0, 1]);
        assert_eq!(pq.remove_max(), Some(1));
        assert_eq!(pq.remove_max(), Some(0));
        assert_eq!(pq.remove_max(), None);
    }

    #[test]
    fn remove_min_in_ascending_order() {
        let mut pq = BoundedPq::new(3);
        pq.insert(0);
        pq.insert(2);
        pq.insert(1);

        assert_eq!(pq.remove_min(), Some(0));
        assert_eq!(pq.items, vec![1, 2]);
        assert_eq!(pq.remove_min(), Some(1));
        assert_eq!(pq.remove_min(), Some(2));
        assert_eq!(pq.remove_min(), None);
    }

    #[test]
    fn insert_at_capacity_evicts_the_minimum() {
        let mut pq = BoundedPq::new(3);
        pq.insert(1);
        pq.insert(2);
        pq.insert(0);
        assert!(pq.is_full());

        pq.insert(3);
        assert_eq!(pq.len(), 3);
        assert_eq!(pq.min(), Some(&1));
        assert_eq!(pq.max(), Some(&3));
    }

    #[test]
    fn streaming_inserts_evict_minimums() {
        let mut pq = BoundedPq::new(4);
        for key in [9, 3, 7, 1, 8, 2, 6, 10, 4, 5] {
            pq.insert(key);
        }
        let mut kept = Vec::new();
        while let Some(key) = pq.remove_max() {
            kept.push(key);
        }
        assert_eq!(kept, vec![10, 9, 8, 5]);
    }
}
