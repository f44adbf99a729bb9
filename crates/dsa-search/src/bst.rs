//! Binary search tree symbol table.
//!
//! A binary tree in symmetric order: every key is larger than all keys in
//! its left subtree and smaller than all keys in its right subtree. Each
//! node carries its subtree size, which gives `rank` and `size_of` without
//! extra bookkeeping. Deletion is Hibbard's: a node with two children is
//! replaced by its in-order successor.
//!
//! No balancing is attempted, so the tree shape (and the cost of every
//! operation) depends on the insertion order. [`crate::red_black`] is the
//! balanced variant.

use std::cmp::Ordering;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    size: usize,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            size: 1,
        }
    }

    fn refresh_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// An ordered symbol table over an unbalanced binary search tree.
pub struct Bst<K, V> {
    root: Link<K, V>,
}

impl<K: Ord, V> Default for Bst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Bst<K, V> {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the subtree rooted at `key`, or 0 when the key is absent.
    pub fn size_of(&self, key: &K) -> usize {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match key.cmp(&n.key) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => node = n.right.as_deref(),
                Ordering::Equal => return n.size,
            }
        }
        0
    }

    /// Inserts the key-value pair, overwriting the value if the key is
    /// already present.
    pub fn put(&mut self, key: K, value: V) {
        self.root = Some(put_node(self.root.take(), key, value));
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match key.cmp(&n.key) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => node = n.right.as_deref(),
                Ordering::Equal => return Some(&n.value),
            }
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Largest key less than or equal to `key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        floor_node(&self.root, key).map(|node| &node.key)
    }

    /// Smallest key greater than or equal to `key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        ceiling_node(&self.root, key).map(|node| &node.key)
    }

    /// Number of keys less than or equal to `key`.
    pub fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match key.cmp(&n.key) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => {
                    rank += 1 + size(&n.left);
                    node = n.right.as_deref();
                }
                Ordering::Equal => return rank + 1 + size(&n.left),
            }
        }
        rank
    }

    /// Removes the smallest key; `None` when the table is empty.
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (rest, removed) = delete_min_node(root);
        self.root = rest;
        let node = *removed;
        Some((node.key, node.value))
    }

    /// Removes the largest key; `None` when the table is empty.
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (rest, removed) = delete_max_node(root);
        self.root = rest;
        let node = *removed;
        Some((node.key, node.value))
    }

    /// Removes `key` and returns its value; `None` when the key is absent.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let (root, removed) = delete_node(self.root.take(), key);
        self.root = root;
        removed
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        collect_keys(&self.root, &mut out);
        out
    }
}

fn put_node<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> Box<Node<K, V>> {
    let Some(mut node) = link else {
        return Box::new(Node::new(key, value));
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(put_node(node.left.take(), key, value)),
        Ordering::Greater => node.right = Some(put_node(node.right.take(), key, value)),
        Ordering::Equal => node.value = value,
    }
    node.refresh_size();
    node
}

fn floor_node<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => floor_node(&node.left, key),
        // this node is a candidate; a larger floor may sit to the right
        Ordering::Greater => floor_node(&node.right, key).or(Some(node)),
    }
}

fn ceiling_node<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Greater => ceiling_node(&node.right, key),
        Ordering::Less => ceiling_node(&node.left, key).or(Some(node)),
    }
}

/// Unlinks the smallest node of the subtree; returns the remaining subtree
/// and the removed node.
fn delete_min_node<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, removed) = delete_min_node(left);
            node.left = rest;
            node.refresh_size();
            (Some(node), removed)
        }
    }
}

fn delete_max_node<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.right.take() {
        None => {
            let rest = node.left.take();
            (rest, node)
        }
        Some(right) => {
            let (rest, removed) = delete_max_node(right);
            node.right = rest;
            node.refresh_size();
            (Some(node), removed)
        }
    }
}

fn delete_node<K: Ord, V>(link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>) {
    let Some(mut node) = link else {
        return (None, None);
    };
    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = delete_node(node.left.take(), key);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = delete_node(node.right.take(), key);
            node.right = right;
            removed
        }
        Ordering::Equal => {
            let Node { left, right, value, .. } = *node;
            return match (left, right) {
                (left, None) => (left, Some(value)),
                (None, right) => (right, Some(value)),
                (Some(left), Some(right)) => {
                    // Hibbard deletion: the in-order successor (smallest
                    // key of the right subtree) takes this node's place
                    let (rest, mut successor) = delete_min_node(right);
                    successor.left = Some(left);
                    successor.right = rest;
                    successor.refresh_size();
                    (Some(successor), Some(value))
                }
            };
        }
    };
    node.refresh_size();
    (Some(node), removed)
}

fn collect_keys<'a, K, V>(link: &'a Link<K, V>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_keys(&node.left, out);
        out.push(&node.key);
        collect_keys(&node.right, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric_order<K: Ord, V>(link: &Link<K, V>) {
        if let Some(node) = link {
            if let Some(left) = node.left.as_deref() {
                assert!(left.key < node.key);
            }
            if let Some(right) = node.right.as_deref() {
                assert!(right.key > node.key);
            }
            assert_symmetric_order(&node.left);
            assert_symmetric_order(&node.right);
        }
    }

    fn assert_size_consistent<K, V>(link: &Link<K, V>) {
        if let Some(node) = link {
            assert_eq!(node.size, 1 + size(&node.left) + size(&node.right));
            assert_size_consistent(&node.left);
            assert_size_consistent(&node.right);
        }
    }

    fn sample_tree() -> Bst<i32, i32> {
        let mut bst = Bst::new();
        for key in [50, 70, 30, 10, 80, 40] {
            bst.put(key, key);
        }
        bst
    }

    #[test]
    fn subtree_sizes_follow_insertions() {
        let mut bst = Bst::new();
        assert!(bst.is_empty());
        assert_eq!(bst.len(), 0);

        bst.put(50, 50);
        assert_eq!(bst.size_of(&50), 1);
        bst.put(70, 70);
        assert_eq!(bst.size_of(&50), 2);
        assert_eq!(bst.size_of(&70), 1);
        bst.put(30, 30);
        assert_eq!(bst.size_of(&50), 3);
        bst.put(10, 10);
        assert_eq!(bst.size_of(&50), 4);
        assert_eq!(bst.size_of(&30), 2);
        bst.put(80, 80);
        assert_eq!(bst.size_of(&50), 5);
        assert_eq!(bst.size_of(&70), 2);
        bst.put(40, 40);
        assert_eq!(bst.size_of(&50), 6);
        assert_eq!(bst.size_of(&30), 3);
        assert_eq!(bst.size_of(&40), 1);
        assert_size_consistent(&bst.root);
    }

    #[test]
    fn get_and_contains() {
        let mut bst = Bst::new();
        assert_eq!(bst.get(&5), None);
        assert!(!bst.contains(&1));

        bst.put(5, "apple");
        bst.put(2, "banana");
        bst.put(7, "cherry");

        assert_eq!(bst.get(&2), Some(&"banana"));
        assert_eq!(bst.get(&9), None);
        assert!(bst.contains(&5));
        assert!(bst.contains(&7));
        assert_symmetric_order(&bst.root);
    }

    #[test]
    fn put_overwrites_existing_value() {
        let mut bst = Bst::new();
        bst.put(5, "apple");
        bst.put(5, "banana");
        assert_eq!(bst.get(&5), Some(&"banana"));
        assert_eq!(bst.len(), 1);
    }

    #[test]
    fn min_and_max_track_insertions() {
        let mut bst = Bst::new();
        assert_eq!(bst.min(), None);
        assert_eq!(bst.max(), None);

        bst.put(5, ());
        assert_eq!(bst.min(), Some(&5));
        assert_eq!(bst.max(), Some(&5));

        bst.put(2, ());
        bst.put(7, ());
        bst.put(9, ());
        assert_eq!(bst.min(), Some(&2));
        assert_eq!(bst.max(), Some(&9));
    }

    #[test]
    fn floor_of_present_key_is_itself() {
        let bst = sample_tree();
        for key in [50, 70, 30, 10, 80, 40] {
            assert_eq!(bst.floor(&key), Some(&key));
        }
    }

    #[test]
    fn floor_of_absent_keys() {
        let bst = sample_tree();
        assert_eq!(bst.floor(&1), None);
        assert_eq!(bst.floor(&5), None);
        assert_eq!(bst.floor(&15), Some(&10));
        assert_eq!(bst.floor(&25), Some(&10));
        assert_eq!(bst.floor(&35), Some(&30));
        assert_eq!(bst.floor(&45), Some(&40));
        assert_eq!(bst.floor(&69), Some(&50));
        assert_eq!(bst.floor(&77), Some(&70));
        assert_eq!(bst.floor(&88), Some(&80));
        assert_eq!(bst.floor(&99), Some(&80));
    }

    #[test]
    fn ceiling_of_present_key_is_itself() {
        let bst = sample_tree();
        for key in [50, 70, 30, 10, 80, 40] {
            assert_eq!(bst.ceiling(&key), Some(&key));
        }
    }

    #[test]
    fn ceiling_of_absent_keys() {
        let bst = sample_tree();
        assert_eq!(bst.ceiling(&1), Some(&10));
        assert_eq!(bst.ceiling(&5), Some(&10));
        assert_eq!(bst.ceiling(&15), Some(&30));
        assert_eq!(bst.ceiling(&25), Some(&30));
        assert_eq!(bst.ceiling(&35), Some(&40));
        assert_eq!(bst.ceiling(&45), Some(&50));
        assert_eq!(bst.ceiling(&69), Some(&70));
        assert_eq!(bst.ceiling(&77), Some(&80));
        assert_eq!(bst.ceiling(&88), None);
        assert_eq!(bst.ceiling(&99), None);
    }

    #[test]
    fn rank_counts_keys_up_to_and_including() {
        let mut bst = Bst::new();
        bst.put(50, ());
        assert_eq!(bst.rank(&50), 1);
        bst.put(70, ());
        assert_eq!(bst.rank(&50), 1);
        assert_eq!(bst.rank(&70), 2);
        bst.put(30, ());
        bst.put(10, ());
        bst.put(80, ());
        bst.put(40, ());
        assert_eq!(bst.rank(&10), 1);
        assert_eq!(bst.rank(&30), 2);
        assert_eq!(bst.rank(&40), 3);
        assert_eq!(bst.rank(&50), 4);
        assert_eq!(bst.rank(&70), 5);
        assert_eq!(bst.rank(&80), 6);
        // absent keys count the smaller ones
        assert_eq!(bst.rank(&45), 3);
        assert_eq!(bst.rank(&5), 0);
        assert_eq!(bst.rank(&99), 6);
    }

    #[test]
    fn delete_max_in_descending_order() {
        let mut bst = Bst::new();
        assert_eq!(bst.delete_max(), None);

        bst.put(5, "apple");
        bst.put(2, "banana");
        bst.put(7, "cherry");
        bst.put(4, "date");

        assert_eq!(bst.delete_max(), Some((7, "cherry")));
        assert!(!bst.contains(&7));
        assert_eq!(bst.size_of(&5), 3);
        assert_size_consistent(&bst.root);

        assert_eq!(bst.delete_max(), Some((5, "apple")));
        assert_eq!(bst.size_of(&2), 2);

        assert_eq!(bst.delete_max(), Some((4, "date")));
        assert_eq!(bst.delete_max(), Some((2, "banana")));
        assert!(bst.is_empty());
        assert_eq!(bst.delete_max(), None);
    }

    #[test]
    fn delete_min_in_ascending_order() {
        let mut bst = Bst::new();
        assert_eq!(bst.delete_min(), None);

        bst.put(5, "apple");
        bst.put(2, "banana");
        bst.put(7, "cherry");
        bst.put(4, "date");

        assert_eq!(bst.delete_min(), Some((2, "banana")));
        assert_eq!(bst.size_of(&5), 3);
        assert_symmetric_order(&bst.root);

        assert_eq!(bst.delete_min(), Some((4, "date")));
        assert_eq!(bst.delete_min(), Some((5, "apple")));
        assert_eq!(bst.delete_min(), Some((7, "cherry")));
        assert!(bst.is_empty());
        assert_eq!(bst.delete_min(), None);
    }

    #[test]
    fn delete_replaces_a_two_child_node_with_its_successor() {
        let mut bst = Bst::new();
        assert_eq!(bst.delete(&1), None);

        bst.put(5, "apple");
        bst.put(2, "banana");
        bst.put(7, "cherry");
        bst.put(4, "date");
        bst.put(6, "elephant");

        // the root has both children, so 6 (min of the right subtree)
        // takes its place
        assert_eq!(bst.delete(&5), Some("apple"));
        assert!(!bst.contains(&5));
        let root = bst.root.as_deref().unwrap();
        assert_eq!(root.key, 6);
        assert_eq!(root.right.as_deref().unwrap().key, 7);
        assert_symmetric_order(&bst.root);
        assert_size_consistent(&bst.root);

        bst.put(1, "fig");
        assert_eq!(bst.delete(&2), Some("banana"));
        let root = bst.root.as_deref().unwrap();
        assert_eq!(root.left.as_deref().unwrap().key, 4);
        assert_size_consistent(&bst.root);

        assert_eq!(bst.delete(&1), Some("fig"));
        let root = bst.root.as_deref().unwrap();
        assert!(root.left.as_deref().unwrap().left.is_none());

        assert_eq!(bst.delete(&7), Some("cherry"));
        assert_eq!(bst.delete(&6), Some("elephant"));
        assert_eq!(bst.delete(&4), Some("date"));
        assert!(bst.is_empty());
        assert_eq!(bst.delete(&4), None);
    }

    #[test]
    fn keys_iterate_in_order() {
        let bst = sample_tree();
        let keys: Vec<i32> = bst.keys().into_iter().copied().collect();
        assert_eq!(keys, vec![10, 30, 40, 50, 70, 80]);
    }

    #[test]
    fn large_tree_keeps_its_invariants() {
        let mut bst = Bst::new();
        for i in 1..=100 {
            bst.put(i, i.to_string());
        }
        assert_eq!(bst.get(&77), Some(&"77".to_string()));
        assert_eq!(bst.len(), 100);
        assert_symmetric_order(&bst.root);
        assert_size_consistent(&bst.root);
    }
}
