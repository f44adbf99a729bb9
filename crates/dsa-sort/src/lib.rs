//! Sorting algorithms and array-backed priority queues.
//!
//! Covers the elementary sorts (selection, insertion, shell), shuffling,
//! mergesort, the quicksort family with selection, and binary-heap based
//! sorting ([`heap::MaxHeap`], [`heap::heap_sort`]).

pub mod elementary;
pub mod heap;
pub mod merge;
pub mod pq;
pub mod quick;
pub mod shuffle;
