//! Foundational containers for the dsa workspace.
//!
//! Provides the union-find family ([`union_find::UnionFind`]), LIFO and FIFO
//! collections ([`stack::Stack`], [`queue::Queue`], [`deque::Deque`]), and
//! Dijkstra's two-stack expression evaluator ([`evaluator::evaluate`]).

pub mod deque;
pub mod evaluator;
pub mod queue;
pub mod stack;
pub mod union_find;
