//! Double-ended queue supporting insertion and removal at both ends.

use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds an item at the front.
    pub fn push_first(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Adds an item at the back.
    pub fn push_last(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item, or `None` when empty.
    pub fn pop_first(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes and returns the back item, or `None` when empty.
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
