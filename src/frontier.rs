//! Min-priority queue of cells with deterministic tie-breaking.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct FrontierEntry<K> {
    score: K,
    sequence: u64,
    cell: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.score.eq(&other.score) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap yields the smallest score, and among equal scores
        // the entry that was inserted first
        match other.score.cmp(&self.score) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Queue of cell indices ordered by `(score, sequence)`, where `sequence` is assigned at insertion.
///
/// There is no decrease-key: a cell whose score improves while queued keeps its old entry, and a
/// cell may be present several times. Callers must treat the score tables they maintain as
/// authoritative over anything popped from here.
pub struct FrontierQueue<K> {
    heap: BinaryHeap<FrontierEntry<K>>,
    next_sequence: u64,
}

impl<K: Ord> Default for FrontierQueue<K> {
    fn default() -> Self {
        FrontierQueue::new()
    }
}

impl<K: Ord> FrontierQueue<K> {
    pub fn new() -> FrontierQueue<K> {
        FrontierQueue {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
    pub fn push(&mut self, score: K, cell: usize) {
        self.heap.push(FrontierEntry {
            score,
            sequence: self.next_sequence,
            cell,
        });
        self.next_sequence += 1;
    }
    /// Removes the cell with the smallest `(score, sequence)`.
    pub fn pop_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.cell)
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
