//! Binary min-heap of `(Distance, T)` pairs.
//!
//! Entries pop in ascending lexicographic `(distance, item)` order, so equal
//! distances are broken by `T`'s own ordering.  The router pushes
//! `(&Location, NodeId)` items, which makes ties resolve by location name.
//!
//! There is no decrease-key.  Callers push a fresh entry whenever a better
//! distance is found and discard stale entries when they pop (lazy deletion).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rm_core::Distance;

#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    // Reverse turns std's max-heap into a min-heap.
    inner: BinaryHeap<Reverse<(Distance, T)>>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { inner: BinaryHeap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: BinaryHeap::with_capacity(capacity) }
    }

    /// O(log n).
    #[inline]
    pub fn push(&mut self, distance: Distance, item: T) {
        self.inner.push(Reverse((distance, item)));
    }

    /// Remove and return the minimum pair.  O(log n).
    #[inline]
    pub fn pop(&mut self) -> Option<(Distance, T)> {
        self.inner.pop().map(|Reverse(entry)| entry)
    }

    pub fn peek(&self) -> Option<&(Distance, T)> {
        self.inner.peek().map(|Reverse(entry)| entry)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
