//! Priority frontier for the escape search.
//!
//! Entries are popped by ascending cost; entries of equal cost come out in
//! insertion order (FIFO). The frontier never updates entries in place, so
//! a cell may be queued several times and callers must skip stale pops.

use std::collections::BinaryHeap;

use hexcat_core::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) cost: u32,
    /// Monotonically increasing insertion counter used to break ties.
    seq: u64,
    pub(crate) pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest cost, then the
        // earliest insertion.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cost: u32, pos: Point) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { cost, seq, pos });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
