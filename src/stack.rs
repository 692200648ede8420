use crate::errors::StackError;

use std::collections::VecDeque;


/// LIFO stack that can also be fed and drained from the bottom
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: VecDeque<T>,
}

impl<T> Stack<T> {

    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Stack holding `values`, the last value on top
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self { items: values.into_iter().collect() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Push in order, the last item ends on top
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop_back().ok_or(StackError::Empty { requested: 1, available: 0 })
    }

    /// Pop `n` items, top first
    /// Leaves the stack untouched when fewer than `n` are held
    pub fn pop_n(&mut self, n: usize) -> Result<Vec<T>, StackError> {
        let available = self.items.len();
        if n > available {
            return Err(StackError::Empty { requested: n, available });
        }
        Ok(self.items.drain(available - n..).rev().collect())
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Insert at the bottom of the stack
    pub fn unshift(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Insert a batch at the bottom, keeping its order
    /// The first item ends at the very bottom
    pub fn unshift_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let batch: Vec<T> = items.into_iter().collect();
        self.items.reserve(batch.len());
        for item in batch.into_iter().rev() {
            self.items.push_front(item);
        }
    }

    /// Remove from the bottom of the stack
    pub fn shift(&mut self) -> Result<T, StackError> {
        self.items.pop_front().ok_or(StackError::Empty { requested: 1, available: 0 })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = Stack::of(['a', 'b']);
        stack.push('c');
        assert_eq!(stack.peek(), Some(&'c'));
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert_eq!(stack.pop(), Err(StackError::Empty { requested: 1, available: 0 }));
    }

    #[test]
    fn test_pop_n_returns_top_first() {
        let mut stack = Stack::of([1, 2, 3, 4]);
        assert_eq!(stack.pop_n(3), Ok(vec![4, 3, 2]));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_pop_n_is_all_or_nothing() {
        let mut stack = Stack::of([1, 2]);
        assert_eq!(stack.pop_n(3), Err(StackError::Empty { requested: 3, available: 2 }));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_shift_and_unshift_work_on_the_bottom() {
        let mut stack = Stack::new();
        stack.push_all([2, 3]);
        stack.unshift(1);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(stack.shift(), Ok(1));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.shift(), Ok(2));
        assert!(stack.is_empty());
        assert!(stack.shift().is_err());
    }

    #[test]
    fn test_unshift_all_keeps_batch_order() {
        let mut stack = Stack::of([4, 5]);
        stack.unshift_all([1, 2, 3]);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(stack.shift(), Ok(1));
        assert_eq!(stack.pop(), Ok(5));

        stack.unshift_all(Vec::new());
        assert_eq!(stack.len(), 3);
    }
}
