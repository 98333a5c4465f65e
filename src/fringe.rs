//! Max-priority queue of entries waiting to be considered.
//!
//! [`Fringe`] orders items by a `u64` key, largest first. Items with equal keys
//! come out in the order they were pushed, so a selection run over a fixed
//! tree is fully deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Slot<T> {
    key: u64,
    seq: Reverse<u64>,
    item: T,
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for Slot<T> {}

impl<T> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Slot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Larger key first; among equal keys, earlier push first
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A max-heap keyed by size with first-in-first-out tie-breaking.
#[derive(Debug)]
pub struct Fringe<T> {
    heap: BinaryHeap<Slot<T>>,
    next_seq: u64,
}

impl<T> Default for Fringe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fringe<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: u64, item: T) {
        let seq = Reverse(self.next_seq);
        self.next_seq += 1;
        self.heap.push(Slot { key, seq, item });
    }

    /// Removes the item with the largest key and returns it with its key.
    pub fn pop(&mut self) -> Option<(u64, T)> {
        self.heap.pop().map(|slot| (slot.key, slot.item))
    }

    /// Sum of the keys of every item still queued.
    pub fn total_key(&self) -> u64 {
        self.heap.iter().map(|slot| slot.key).sum()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
