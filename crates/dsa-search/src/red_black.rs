//! Left-leaning red-black tree symbol table.
//!
//! Encodes a 2-3 tree in a binary tree: a red link binds the two keys of
//! a 3-node, and every red link leans left. Three local operations
//! (rotation in either direction and a color flip) repair the shape on
//! the way up out of every insert and delete, so no root-to-leaf path is
//! more than twice as long as any other and every operation stays
//! logarithmic regardless of insertion order.
//!
//! Same symbol-table surface as [`crate::bst::Bst`], plus the order
//! statistics [`RedBlackBst::select`] and [`RedBlackBst::keys_in_range`].

use std::cmp::Ordering;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    size: usize,
    color: Color,
}

impl<K, V> Node<K, V> {
    /// A new node always joins the tree through a red link.
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            size: 1,
            color: Color::Red,
        }
    }

    fn refresh_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// Null links are black.
fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|node| node.color == Color::Red)
}

fn left_left_is_red<K, V>(node: &Node<K, V>) -> bool {
    node.left.as_ref().is_some_and(|left| is_red(&left.left))
}

fn right_left_is_red<K, V>(node: &Node<K, V>) -> bool {
    node.right.as_ref().is_some_and(|right| is_red(&right.left))
}

/// An ordered symbol table over a left-leaning red-black tree.
pub struct RedBlackBst<K, V> {
    root: Link<K, V>,
}

impl<K: Ord, V> Default for RedBlackBst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> RedBlackBst<K, V> {
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

    /// Inserts the key-value pair, overwriting the value if the key is
    /// already present.
    pub fn put(&mut self, key: K, value: V) {
        let mut root = put_node(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
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

    /// The key with exactly `r` smaller keys; `None` when `r` is out of
    /// range. `select(0)` is the minimum.
    pub fn select(&self, r: usize) -> Option<&K> {
        if r >= self.len() {
            return None;
        }
        let mut node = self.root.as_deref()?;
        let mut r = r;
        loop {
            let smaller = size(&node.left);
            match r.cmp(&smaller) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node = node.left.as_deref()?,
                Ordering::Greater => {
                    r -= smaller + 1;
                    node = node.right.as_deref()?;
                }
            }
        }
    }

    /// Removes the smallest key; `None` when the table is empty.
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        let (rest, removed) = delete_min_node(root);
        self.root = rest;
        self.repaint_root_black();
        let node = *removed;
        Some((node.key, node.value))
    }

    /// Removes the largest key; `None` when the table is empty.
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        let (rest, removed) = delete_max_node(root);
        self.root = rest;
        self.repaint_root_black();
        let node = *removed;
        Some((node.key, node.value))
    }

    /// Removes `key` and returns its value; `None` when the key is absent.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        if !self.contains(key) {
            return None;
        }
        let mut root = self.root.take()?;
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        let (rest, removed) = delete_node(root, key);
        self.root = rest;
        self.repaint_root_black();
        removed
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len());
        collect_keys(&self.root, &mut out);
        out
    }

    /// Keys in `[lo, hi]`, both ends inclusive, in ascending order.
    pub fn keys_in_range(&self, lo: &K, hi: &K) -> Vec<&K> {
        let mut out = Vec::new();
        collect_in_range(&self.root, lo, hi, &mut out);
        out
    }

    fn repaint_root_black(&mut self) {
        if let Some(root) = self.root.as_deref_mut() {
            root.color = Color::Black;
        }
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
    restore_balance(node)
}

/// Turns a right-leaning red link into a left-leaning one. The new root
/// takes over the old root's color and size; the old root turns red.
fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut right) = node.right.take() else {
        return node;
    };
    node.right = right.left.take();
    right.color = node.color;
    node.color = Color::Red;
    right.size = node.size;
    node.refresh_size();
    right.left = Some(node);
    right
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut left) = node.left.take() else {
        return node;
    };
    node.left = left.right.take();
    left.color = node.color;
    node.color = Color::Red;
    left.size = node.size;
    node.refresh_size();
    left.right = Some(node);
    left
}

/// Splits (or joins) a temporary 4-node by inverting the colors of a node
/// and its two children. Does nothing unless both children exist, share a
/// color, and differ from their parent.
fn flip_colors<K, V>(node: &mut Node<K, V>) {
    let (Some(left), Some(right)) = (node.left.as_deref_mut(), node.right.as_deref_mut()) else {
        return;
    };
    if left.color != right.color || node.color == left.color {
        return;
    }
    node.color = node.color.flip();
    left.color = left.color.flip();
    right.color = right.color.flip();
}

/// Assuming `node` is red with a black left child and grandchild, makes
/// the left child or one of its children red.
fn move_red_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if node.color != Color::Red {
        return node;
    }
    if is_red(&node.left) && left_left_is_red(&node) {
        return node;
    }
    flip_colors(&mut node);
    // the right subtree turned red and may now lean the wrong way
    if right_left_is_red(&node) {
        if let Some(right) = node.right.take() {
            node.right = Some(rotate_right(right));
        }
        node = rotate_left(node);
        flip_colors(&mut node);
    }
    node
}

/// Assuming `node` is red with a black right child and that child's left
/// child black, makes the right child or one of its children red.
fn move_red_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if node.color != Color::Red {
        return node;
    }
    if is_red(&node.right) && right_left_is_red(&node) {
        return node;
    }
    flip_colors(&mut node);
    if left_left_is_red(&node) {
        node = rotate_right(node);
        flip_colors(&mut node);
    }
    node
}

/// The fix-up applied on the way up out of every recursive insert and
/// delete: straighten a right-leaning red link, rotate a pair of
/// consecutive left-leaning red links, split a node with two red
/// children, and refresh the subtree size.
fn restore_balance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&node.right) && !is_red(&node.left) {
        node = rotate_left(node);
    }
    if is_red(&node.left) && left_left_is_red(&node) {
        node = rotate_right(node);
    }
    if is_red(&node.left) && is_red(&node.right) {
        flip_colors(&mut node);
    }
    node.refresh_size();
    node
}

fn floor_node<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => floor_node(&node.left, key),
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

/// Unlinks the smallest node of the subtree; returns the rebalanced
/// remainder and the removed node.
fn delete_min_node<K: Ord, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    if node.left.is_none() {
        let rest = node.right.take();
        return (rest, node);
    }
    if !is_red(&node.left) && !left_left_is_red(&node) {
        node = move_red_left(node);
    }
    match node.left.take() {
        Some(left) => {
            let (rest, removed) = delete_min_node(left);
            node.left = rest;
            (Some(restore_balance(node)), removed)
        }
        None => {
            let rest = node.right.take();
            (rest, node)
        }
    }
}

fn delete_max_node<K: Ord, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    if is_red(&node.left) {
        node = rotate_right(node);
    }
    if node.right.is_none() {
        let rest = node.left.take();
        return (rest, node);
    }
    if !is_red(&node.right) && !right_left_is_red(&node) {
        node = move_red_right(node);
    }
    match node.right.take() {
        Some(right) => {
            let (rest, removed) = delete_max_node(right);
            node.right = rest;
            (Some(restore_balance(node)), removed)
        }
        None => {
            let rest = node.left.take();
            (rest, node)
        }
    }
}

/// Removes `key` from the subtree. The caller has already checked that
/// the key is present, so every step can lend red links downward along
/// the search path.
fn delete_node<K: Ord, V>(mut node: Box<Node<K, V>>, key: &K) -> (Link<K, V>, Option<V>) {
    if *key < node.key {
        if !is_red(&node.left) && !left_left_is_red(&node) {
            node = move_red_left(node);
        }
        let removed = match node.left.take() {
            Some(left) => {
                let (rest, value) = delete_node(left, key);
                node.left = rest;
                value
            }
            None => None,
        };
        return (Some(restore_balance(node)), removed);
    }

    if is_red(&node.left) {
        node = rotate_right(node);
    }
    if *key == node.key && node.right.is_none() {
        let unlinked = *node;
        return (unlinked.left, Some(unlinked.value));
    }
    if !is_red(&node.right) && !right_left_is_red(&node) {
        node = move_red_right(node);
    }
    let removed = if *key == node.key {
        match node.right.take() {
            Some(right) => {
                // the in-order successor takes this node's place
                let (rest, successor) = delete_min_node(right);
                let successor = *successor;
                node.key = successor.key;
                let previous = mem::replace(&mut node.value, successor.value);
                node.right = rest;
                Some(previous)
            }
            None => None,
        }
    } else {
        match node.right.take() {
            Some(right) => {
                let (rest, value) = delete_node(right, key);
                node.right = rest;
                value
            }
            None => None,
        }
    };
    (Some(restore_balance(node)), removed)
}

fn collect_keys<'a, K, V>(link: &'a Link<K, V>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_keys(&node.left, out);
        out.push(&node.key);
        collect_keys(&node.right, out);
    }
}

fn collect_in_range<'a, K: Ord, V>(link: &'a Link<K, V>, lo: &K, hi: &K, out: &mut Vec<&'a K>) {
    let Some(node) = link else {
        return;
    };
    if *lo < node.key {
        collect_in_range(&node.left, lo, hi, out);
    }
    if node.key >= *lo && node.key <= *hi {
        out.push(&node.key);
    }
    if *hi > node.key {
        collect_in_range(&node.right, lo, hi, out);
    }
}
