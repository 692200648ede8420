use crate::errors::QueueError;

use std::{cmp::Ordering, collections::BinaryHeap, fmt::Debug};


/// Queued value
/// - ordered by priority only, reversed so BinaryHeap pops the lowest first
/// - seq breaks ties in insertion order
#[derive(Debug)]
struct Item<T> {
    value: T,
    priority: i64,
    seq: u64,
}

impl<T> Ord for Item<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T> PartialOrd for Item<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> PartialEq for Item<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<T> Eq for Item<T> {}


/// Min-priority queue of owned values
/// Unlike [`super::SetHeap`] values may be queued several times and their priority may go up
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Item<T>>,
    next_seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> PriorityQueue<T> {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T, priority: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Item { value, priority, seq });
    }

    /// Remove the value with the lowest priority
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|item| item.value)
    }

    pub fn pop_with_priority(&mut self) -> Option<(T, i64)> {
        self.heap.pop().map(|item| (item.value, item.priority))
    }

    pub fn peek(&self) -> Option<(&T, i64)> {
        self.heap.peek().map(|item| (&item.value, item.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: PartialEq + Debug> PriorityQueue<T> {

    /// Change the priority of the first queued item equal to `value`
    /// Linear in the queue size
    pub fn set_priority(&mut self, value: &T, priority: i64) -> Result<(), QueueError> {
        let mut items = std::mem::take(&mut self.heap).into_vec();
        let found = items.iter_mut().find(|item| item.value == *value);

        let result = match found {
            Some(item) => {
                item.priority = priority;
                Ok(())
            }
            None => Err(QueueError::ItemNotQueued(format!("{value:?}"))),
        };

        self.heap = BinaryHeap::from(items);
        result
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.push("c", 30);
        queue.push("a", 10);
        queue.push("b", 20);

        assert_eq!(queue.peek(), Some((&"a", 10)));
        assert_eq!(queue.pop(), Some("a"));
        assert_eq!(queue.pop_with_priority(), Some(("b", 20)));
        assert_eq!(queue.pop(), Some("c"));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_equal_priorities_keep_insertion_order() {
        let mut queue = PriorityQueue::new();
        queue.push(1, 5);
        queue.push(2, 5);
        queue.push(3, 5);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
    }

    #[test]
    fn test_set_priority_moves_item() {
        let mut queue = PriorityQueue::new();
        queue.push('x', 1);
        queue.push('y', 2);
        queue.push('z', 3);

        queue.set_priority(&'z', 0).unwrap();
        queue.set_priority(&'x', 9).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some('z'));
        assert_eq!(queue.pop(), Some('y'));
        assert_eq!(queue.pop(), Some('x'));
    }

    #[test]
    fn test_set_priority_unknown_item() {
        let mut queue = PriorityQueue::new();
        queue.push(1, 1);
        let result = queue.set_priority(&7, 0);
        assert!(matches!(result, Err(QueueError::ItemNotQueued(ref v)) if v == "7"));
        // queue is left intact
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(1));
    }
}
