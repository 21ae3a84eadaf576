// Copyright 2025 Cowboy AI, LLC.

//! `for_each_indexed`: visit every element together with its position

use tracing::trace;

use crate::composed::Mixed;
use crate::mixin_list::{Extends, Has, Mixin};
use crate::sequence::IndexedSequence;

/// Mixin adding [`Mixed::for_each_indexed`]
///
/// Needs positional access, so it only extends an [`IndexedSequence`]:
///
/// ```compile_fail
/// use std::collections::LinkedList;
/// use cim_mixin::{mixins, ForEachIndexed, MixExt};
///
/// let list: LinkedList<i32> = (0..3).collect();
/// let _ = list.mix::<mixins![ForEachIndexed]>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ForEachIndexed;

impl Mixin for ForEachIndexed {
    const NAME: &'static str = "for_each_indexed";
}

impl<B: IndexedSequence> Extends<B> for ForEachIndexed {}

impl<B: IndexedSequence, L> Mixed<B, L> {
    /// Visit every element in forward order with its zero-based index
    ///
    /// Terminal: nothing is returned, mutations happen in place.
    pub fn for_each_indexed<I, F>(&mut self, mut visit: F)
    where
        L: Has<ForEachIndexed, I>,
        F: FnMut(usize, &mut B::Item),
    {
        let len = self.as_base().len();
        trace!(mixin = ForEachIndexed::NAME, len, "visiting indexed elements");
        for index in 0..len {
            if let Some(item) = self.as_base_mut().get_mut(index) {
                visit(index, item);
            }
        }
    }
}
