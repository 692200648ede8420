pub mod priority_queue;

use crate::collections::FxHashMap;
use crate::errors::HeapError;

use std::{fmt::Debug, hash::Hash};


/// Array backed binary min-heap of keys ordered by cost
/// The membership table maps each queued key to its slot in `entries`,
/// which makes `push` idempotent per key and lets a cheaper push re-sift in place
#[derive(Debug, Clone)]
pub struct SetHeap<K, C> {
    entries: Vec<(K, C)>,
    positions: FxHashMap<K, usize>,
}

impl<K, C> Default for SetHeap<K, C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<K, C> SetHeap<K, C>
where
    K: Copy + Eq + Hash + Debug,
    C: Ord + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Queue `key` at `cost`
    /// Returns false when the key was already queued, in which case the size is unchanged
    /// and the stored cost is only ever lowered
    pub fn push(&mut self, key: K, cost: C) -> bool {
        if let Some(&pos) = self.positions.get(&key) {
            if cost < self.entries[pos].1 {
                self.entries[pos].1 = cost;
                self.sift_up(pos);
            }
            return false;
        }

        let pos = self.entries.len();
        self.entries.push((key, cost));
        self.positions.insert(key, pos);
        self.sift_up(pos);
        true
    }

    /// Remove and return the cheapest entry
    /// Callers are expected to check `len` first, an empty heap is a precondition violation
    pub fn pop(&mut self) -> Result<(K, C), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }

        let top = self.entries.swap_remove(0);
        self.positions.remove(&top.0);

        if let Some(&(moved, _)) = self.entries.first() {
            self.positions.insert(moved, 0);
            self.sift_down(0);
        }

        Ok(top)
    }

    pub fn peek(&self) -> Option<&(K, C)> {
        self.entries.first()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current queued cost of `key`
    pub fn cost_of(&self, key: &K) -> Option<C> {
        self.positions.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Swap with the parent while the parent is strictly more expensive
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if self.entries[i].1 < self.entries[p].1 {
                self.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    // Swap with the cheaper child until neither child is strictly cheaper
    fn sift_down(&mut self, mut i: usize) {
        let size = self.entries.len();
        loop {
            let mut smallest = i;
            let (left, right) = (left_child(i), right_child(i));
            if left < size && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < size && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.positions.insert(self.entries[i].0, i);
        self.positions.insert(self.entries[j].0, j);
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child(i: usize) -> usize {
    2 * i + 1
}

fn right_child(i: usize) -> usize {
    2 * i + 2
}


#[cfg(test)]
mod tests {
    use super::*;

    /// Check the parent/child ordering at every slot
    fn assert_heap_property<K: Copy + Eq + Hash + Debug, C: Ord + Copy + Debug>(heap: &SetHeap<K, C>) {
        for i in 1..heap.entries.len() {
            assert!(heap.entries[parent(i)].1 <= heap.entries[i].1, "heap broken at {i}: {:?}", heap.entries);
        }
        for (pos, (key, _)) in heap.entries.iter().enumerate() {
            assert_eq!(heap.positions.get(key), Some(&pos));
        }
    }

    #[test]
    fn test_pop_returns_in_cost_order() {
        let mut heap = SetHeap::new();
        for (key, cost) in [(0usize, 5), (1, 3), (2, 9), (3, 1), (4, 7), (5, 2)] {
            heap.push(key, cost);
            assert_heap_property(&heap);
        }

        let mut costs = Vec::new();
        while !heap.is_empty() {
            let (_, cost) = heap.pop().unwrap();
            costs.push(cost);
            assert_heap_property(&heap);
        }
        assert_eq!(costs, vec![1, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn test_push_same_key_twice_is_noop() {
        let mut heap = SetHeap::new();
        assert!(heap.push("a", 4));
        assert!(heap.push("b", 6));
        assert!(!heap.push("a", 4));
        assert!(!heap.push("a", 10));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.cost_of(&"a"), Some(4));
    }

    #[test]
    fn test_cheaper_push_resifts() {
        let mut heap = SetHeap::new();
        heap.push('x', 10);
        heap.push('y', 5);
        heap.push('z', 7);
        assert!(!heap.push('x', 1));
        assert_heap_property(&heap);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&('x', 1)));
    }

    #[test]
    fn test_popped_key_can_be_queued_again() {
        let mut heap = SetHeap::new();
        heap.push(1u32, 1);
        assert_eq!(heap.pop(), Ok((1, 1)));
        assert!(!heap.contains(&1));
        assert!(heap.push(1, 3));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_pop_empty_heap() {
        let mut heap: SetHeap<usize, i64> = SetHeap::with_capacity(4);
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }
}
