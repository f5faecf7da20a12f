use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::Vertex;

/// Contract violations of [`IndexedHeap`]
///
/// These point at a defect in the caller, never at bad input data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("vertex {0} already has a queue entry")]
    DuplicateEntry(String),

    #[error("cannot raise the key of vertex {vertex} from {old} to {new}")]
    KeyIncrease {
        vertex: String,
        old: String,
        new: String,
    },

    #[error("no queue entry for vertex {vertex} with key {key}")]
    EntryNotFound { vertex: String, key: String },

    #[error("pop from an empty queue")]
    Empty,
}

/// A binary min-heap of `(vertex, key)` entries with logarithmic decrease-key
///
/// Every vertex has at most one entry. A side index maps each queued vertex to its
/// slot in the heap array and is kept in step with every swap, so an entry can be
/// located and moved in place instead of being searched for or duplicated.
#[derive(Debug, Clone)]
pub struct IndexedHeap<V, K>
where
    V: Vertex,
    K: PartialOrd + Copy + Debug,
{
    /// Heap-ordered entries; the minimum key is at slot 0
    entries: Vec<(V, K)>,

    /// Slot of each queued vertex in `entries`
    positions: HashMap<V, usize>,
}

impl<V, K> Default for IndexedHeap<V, K>
where
    V: Vertex,
    K: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K> IndexedHeap<V, K>
where
    V: Vertex,
    K: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vertex has a live entry
    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Returns the current key of a queued vertex
    pub fn key_of(&self, vertex: &V) -> Option<K> {
        self.positions.get(vertex).map(|&slot| self.entries[slot].1)
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(&V, K)> {
        self.entries.first().map(|(vertex, key)| (vertex, *key))
    }

    /// Inserts a new entry; a vertex may only be queued once
    pub fn push(&mut self, vertex: V, key: K) -> Result<(), QueueError> {
        if self.positions.contains_key(&vertex) {
            return Err(QueueError::DuplicateEntry(format!("{:?}", vertex)));
        }
        let slot = self.entries.len();
        self.positions.insert(vertex.clone(), slot);
        self.entries.push((vertex, key));
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the entry with the minimum key
    pub fn pop(&mut self) -> Result<(V, K), QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty);
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (vertex, key) = self.entries.pop().ok_or(QueueError::Empty)?;
        self.positions.remove(&vertex);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((vertex, key))
    }

    /// Lowers the key of an existing entry from `old_key` to `new_key`
    ///
    /// Fails if `new_key` is larger than `old_key`, or if the vertex is not queued
    /// with exactly `old_key`.
    pub fn decrease_key(&mut self, vertex: &V, old_key: K, new_key: K) -> Result<(), QueueError> {
        if new_key > old_key {
            return Err(QueueError::KeyIncrease {
                vertex: format!("{:?}", vertex),
                old: format!("{:?}", old_key),
                new: format!("{:?}", new_key),
            });
        }
        let slot = match self.positions.get(vertex) {
            Some(&slot) if self.entries[slot].1 == old_key => slot,
            _ => {
                return Err(QueueError::EntryNotFound {
                    vertex: format!("{:?}", vertex),
                    key: format!("{:?}", old_key),
                })
            }
        };
        self.entries[slot].1 = new_key;
        self.sift_up(slot);
        Ok(())
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].1 < self.entries[parent].1 {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < len && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    /// Swaps two slots and keeps the position index in step
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.entries[a].0) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.entries[b].0) {
            *pos = b;
        }
    }

    /// Checks heap order and index consistency
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|slot| !(self.entries[slot].1 < self.entries[(slot - 1) / 2].1));
        let indexed = self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(slot, (vertex, _))| self.positions.get(vertex) == Some(&slot));
        ordered && indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn pops_in_key_order() {
        let mut heap = IndexedHeap::new();
        for (vertex, key) in [("a", 5), ("b", 1), ("c", 3), ("d", 4), ("e", 2)] {
            heap.push(vertex, key).unwrap();
            assert!(heap.is_consistent());
        }
        let mut order = Vec::new();
        while !heap.is_empty() {
            order.push(heap.pop().unwrap().0);
            assert!(heap.is_consistent());
        }
        assert_eq!(order, vec!["b", "e", "c", "d", "a"]);
    }

    #[test]
    fn decrease_key_moves_entry_to_front() {
        let mut heap = IndexedHeap::new();
        for v in 0..10 {
            heap.push(v, 10 + v).unwrap();
        }
        heap.decrease_key(&9, 19, 0).unwrap();
        assert!(heap.is_consistent());
        assert_eq!(heap.len(), 10);
        assert_eq!(heap.peek(), Some((&9, 0)));
        assert_eq!(heap.pop().unwrap(), (9, 0));
        assert!(!heap.contains(&9));
    }

    #[test]
    fn random_operations_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap: IndexedHeap<u32, u32> = IndexedHeap::new();
        let mut model: HashMap<u32, u32> = HashMap::new();

        for _ in 0..2000 {
            match rng.gen_range(0..3) {
                0 => {
                    let v = rng.gen_range(0..64);
                    let k = rng.gen_range(0..1000);
                    let pushed = heap.push(v, k);
                    assert_eq!(pushed.is_ok(), !model.contains_key(&v));
                    model.entry(v).or_insert(k);
                }
                1 => {
                    let queued = model.keys().choose(&mut rng).copied();
                    if let Some(v) = queued {
                        let old = model[&v];
                        let new = rng.gen_range(0..=old);
                        heap.decrease_key(&v, old, new).unwrap();
                        model.insert(v, new);
                    }
                }
                _ => {
                    if model.is_empty() {
                        assert_eq!(heap.pop(), Err(QueueError::Empty));
                    } else {
                        let min = *model.values().min().unwrap();
                        let (v, k) = heap.pop().unwrap();
                        assert_eq!(k, min);
                        assert_eq!(model.remove(&v), Some(k));
                    }
                }
            }
            assert!(heap.is_consistent());
            assert_eq!(heap.len(), model.len());
        }
    }
}
