// Copyright 2025 Cowboy AI, LLC.

//! `map`: build a new sequence of transformed elements

use tracing::trace;

use crate::composed::Mixed;
use crate::mixin_list::{Extends, Has, Mixin};
use crate::sequence::AppendableSequence;

/// Mixin adding [`Mixed::map`]
///
/// Results are built by appending, so the base must be an
/// [`AppendableSequence`]. A fixed-size sequence cannot take `Map`:
///
/// ```compile_fail
/// use cim_mixin::{mixins, Map, MixExt, Sequence};
///
/// struct Window([i32; 3]);
///
/// impl Sequence for Window {
///     type Item = i32;
///     type Iter<'a> = std::slice::Iter<'a, i32> where Self: 'a;
///     type IterMut<'a> = std::slice::IterMut<'a, i32> where Self: 'a;
///
///     fn len(&self) -> usize {
///         3
///     }
///
///     fn iter(&self) -> Self::Iter<'_> {
///         self.0.iter()
///     }
///
///     fn iter_mut(&mut self) -> Self::IterMut<'_> {
///         self.0.iter_mut()
///     }
/// }
///
/// let _ = Window([1, 2, 3]).mix::<mixins![Map]>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Map;

impl Mixin for Map {
    const NAME: &'static str = "map";
}

impl<B: AppendableSequence> Extends<B> for Map {}

impl<B: AppendableSequence, L> Mixed<B, L> {
    /// Apply `transform` to every element, in order, into a new sequence
    ///
    /// The result has the same length and the same composed type as `self`.
    pub fn map<I, F>(&self, mut transform: F) -> Self
    where
        L: Has<Map, I>,
        F: FnMut(&B::Item) -> B::Item,
    {
        let base = self.as_base();
        let mut out = B::with_capacity(base.len());
        for item in base.iter() {
            out.push(transform(item));
        }
        trace!(mixin = Map::NAME, len = out.len(), "mapped sequence");
        Self::wrap(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixins;
    use std::collections::LinkedList;

    #[test]
    fn test_map_transforms_every_element() {
        let seq: Mixed<Vec<i32>, mixins![Map]> = vec![1, 2, 3].into();
        let squared = seq.map(|n| n * n);

        assert_eq!(squared.into_base(), vec![1, 4, 9]);
        assert_eq!(seq.into_base(), vec![1, 2, 3]);
    }

    #[test]
    fn test_map_preserves_length_on_empty_input() {
        let seq: Mixed<Vec<String>, mixins![Map]> = Mixed::default();
        assert_eq!(seq.map(|s| s.to_uppercase()).len(), 0);
    }

    #[test]
    fn test_map_calls_transform_in_order() {
        let seq: Mixed<Vec<&str>, mixins![Map]> = vec!["x", "y", "z"].into();
        let mut order = Vec::new();
        let _ = seq.map(|s| {
            order.push(*s);
            *s
        });
        assert_eq!(order, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_map_over_linked_list() {
        let list: LinkedList<i32> = (1..=3).collect();
        let seq: Mixed<LinkedList<i32>, mixins![Map]> = list.into();
        let shifted: Vec<i32> = seq.map(|n| n + 100).into_iter().collect();
        assert_eq!(shifted, vec![101, 102, 103]);
    }
}
