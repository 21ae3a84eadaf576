// Copyright 2025 Cowboy AI, LLC.

//! Capability contract of a base sequence
//!
//! A base type is anything ordered and iterable. Mixins state which of the
//! capabilities below they need, so a composition that asks for more than the
//! base offers fails to type-check instead of failing at runtime.
//!
//! ```text
//! Sequence ──┬── IndexedSequence     (ForEachIndexed, checked access)
//!            └── AppendableSequence  (Map, Filter)
//! ```

use std::collections::{LinkedList, VecDeque};

/// An ordered, iterable container of elements
pub trait Sequence {
    /// Element type
    type Item;

    /// Forward iterator over shared references
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Forward iterator over mutable references
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate in forward order
    fn iter(&self) -> Self::Iter<'_>;

    /// Iterate mutably in forward order
    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}

/// A sequence with positional access
pub trait IndexedSequence: Sequence {
    /// Element at `index`, if any
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Mutable element at `index`, if any
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;
}

/// A sequence that can be built up by appending at the back
pub trait AppendableSequence: Sequence + Default {
    /// Empty sequence sized for `capacity` elements where the container supports it
    fn with_capacity(capacity: usize) -> Self {
        let _ = capacity;
        Self::default()
    }

    /// Append one element at the end
    fn push(&mut self, item: Self::Item);
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = std::slice::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IndexedSequence for Vec<T> {
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}

impl<T> AppendableSequence for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'a> = std::collections::vec_deque::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = std::collections::vec_deque::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        VecDeque::iter_mut(self)
    }
}

impl<T> IndexedSequence for VecDeque<T> {
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

impl<T> AppendableSequence for VecDeque<T> {
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn push(&mut self, item: T) {
        self.push_back(item);
    }
}

// No IndexedSequence: positional access on a linked list is a linear walk.
impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Iter<'a> = std::collections::linked_list::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = std::collections::linked_list::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        LinkedList::iter_mut(self)
    }
}

impl<T> AppendableSequence for LinkedList<T> {
    fn push(&mut self, item: T) {
        self.push_back(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<S: Sequence>(seq: &S) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        Sequence::iter(seq).cloned().collect()
    }

    #[test]
    fn test_vec_capabilities() {
        let mut v: Vec<i32> = AppendableSequence::with_capacity(4);
        AppendableSequence::push(&mut v, 1);
        AppendableSequence::push(&mut v, 2);

        assert_eq!(Sequence::len(&v), 2);
        assert_eq!(IndexedSequence::get(&v, 1), Some(&2));
        assert_eq!(IndexedSequence::get(&v, 2), None);

        for x in Sequence::iter_mut(&mut v) {
            *x += 10;
        }
        assert_eq!(collect(&v), vec![11, 12]);
    }

    #[test]
    fn test_vec_deque_capabilities() {
        let mut d: VecDeque<&str> = AppendableSequence::with_capacity(2);
        AppendableSequence::push(&mut d, "a");
        AppendableSequence::push(&mut d, "b");

        if let Some(first) = IndexedSequence::get_mut(&mut d, 0) {
            *first = "z";
        }
        assert_eq!(collect(&d), vec!["z", "b"]);
    }

    #[test]
    fn test_linked_list_capabilities() {
        let mut l = LinkedList::new();
        AppendableSequence::push(&mut l, 3);
        AppendableSequence::push(&mut l, 4);

        assert!(!Sequence::is_empty(&l));
        assert_eq!(collect(&l), vec![3, 4]);
    }

    #[test]
    fn test_empty_sequence() {
        let v: Vec<u8> = Vec::new();
        assert!(Sequence::is_empty(&v));
        assert_eq!(Sequence::iter(&v).count(), 0);
    }
}
