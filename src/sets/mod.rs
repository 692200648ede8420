use crate::collections::FxHashSet;

use std::{fmt, hash::Hash};


/// Unordered collection of distinct values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    values: FxHashSet<T>,
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Set<T> {

    pub fn new() -> Self {
        Self { values: FxHashSet::default() }
    }

    /// Build a set from a sequence, duplicates collapse
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self { values: values.into_iter().collect() }
    }

    pub fn add(&mut self, value: T) {
        self.values.insert(value);
    }

    pub fn remove(&mut self, value: &T) -> bool {
        self.values.remove(value)
    }

    pub fn has(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.values.iter()
    }

    /// Does the receiver hold every value of `other`
    pub fn contains(&self, other: &Set<T>) -> bool {
        if self.len() < other.len() {
            return false;
        }
        other.values.iter().all(|v| self.values.contains(v))
    }

    pub fn overlaps(&self, other: &Set<T>) -> bool {
        let (small, large) = self.by_size(other);
        small.values.iter().any(|v| large.values.contains(v))
    }

    /// (smaller, larger) operand pair
    fn by_size<'a>(&'a self, other: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
        if other.len() < self.len() { (other, self) } else { (self, other) }
    }
}

impl<T: Eq + Hash + Clone> Set<T> {

    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let (small, large) = self.by_size(other);
        let mut out = large.clone();
        out.values.extend(small.values.iter().cloned());
        out
    }

    /// Values present in both, iterates the smaller operand only
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let (small, large) = self.by_size(other);
        small.values.iter().filter(|v| large.values.contains(*v)).cloned().collect()
    }

    pub fn copy(&self) -> Set<T> {
        self.clone()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_collapses_duplicates() {
        let set = Set::of([1, 2, 2, 3, 1]);
        assert_eq!(set.len(), 3);
        assert!(set.has(&2));
        assert!(!set.has(&4));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = Set::new();
        set.add('a');
        set.add('a');
        assert_eq!(set.len(), 1);
        assert!(set.remove(&'a'));
        assert!(set.is_empty());
    }

    #[test]
    fn test_union_and_intersection_leave_inputs_alone() {
        let a = Set::of([1, 2, 3]);
        let b = Set::of([3, 4]);

        let u = a.union(&b);
        assert_eq!(u, Set::of([1, 2, 3, 4]));
        let i = a.intersection(&b);
        assert_eq!(i, Set::of([3]));

        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_contains() {
        let a = Set::of(['a', 'b', 'c']);
        assert!(a.contains(&a));
        assert!(a.contains(&Set::of(['c', 'a'])));
        assert!(a.contains(&Set::new()));
        assert!(!a.contains(&Set::of(['c', 'd'])));
        // larger sets short circuit
        assert!(!Set::of(['a']).contains(&a));
    }

    #[test]
    fn test_overlaps() {
        let a = Set::of([1, 2]);
        assert!(a.overlaps(&Set::of([2, 9])));
        assert!(!a.overlaps(&Set::of([7, 9])));
        assert!(!a.overlaps(&Set::new()));
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Set::of([1]);
        let mut b = a.copy();
        b.add(2);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Set::of([5]).to_string(), "[5]");
        assert_eq!(Set::<i32>::new().to_string(), "[]");
    }
}
