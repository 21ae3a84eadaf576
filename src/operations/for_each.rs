// Copyright 2025 Cowboy AI, LLC.

//! `for_each`: visit every element in place, then keep chaining

use tracing::trace;

use crate::composed::Mixed;
use crate::mixin_list::{Extends, Has, Mixin};
use crate::sequence::Sequence;

/// Mixin adding [`Mixed::for_each`] and [`Mixed::try_for_each`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ForEach;

impl Mixin for ForEach {
    const NAME: &'static str = "for_each";
}

impl<B: Sequence> Extends<B> for ForEach {}

impl<B: Sequence, L> Mixed<B, L> {
    /// Visit every element in forward order, allowing in-place mutation
    ///
    /// Returns the sequence so further operations can be chained.
    ///
    /// ```rust
    /// use cim_mixin::{mixins, ForEach, Map, MixExt};
    ///
    /// let bumped = vec![1, 2, 3]
    ///     .mix::<mixins![ForEach, Map]>()
    ///     .for_each(|n| *n += 1)
    ///     .map(|n| n * 2);
    /// assert_eq!(bumped.into_base(), vec![4, 6, 8]);
    /// ```
    pub fn for_each<I, F>(mut self, mut visit: F) -> Self
    where
        L: Has<ForEach, I>,
        F: FnMut(&mut B::Item),
    {
        trace!(mixin = ForEach::NAME, len = self.as_base().len(), "visiting elements");
        for item in self.as_base_mut().iter_mut() {
            visit(item);
        }
        self
    }

    /// Like [`for_each`](Self::for_each), stopping at the first error
    ///
    /// Elements visited before the error keep their mutations; the sequence is
    /// dropped together with the error.
    pub fn try_for_each<I, F, E>(mut self, mut visit: F) -> Result<Self, E>
    where
        L: Has<ForEach, I>,
        F: FnMut(&mut B::Item) -> Result<(), E>,
    {
        for (index, item) in self.as_base_mut().iter_mut().enumerate() {
            if let Err(err) = visit(item) {
                trace!(mixin = ForEach::NAME, index, "visitor failed");
                return Err(err);
            }
        }
        Ok(self)
    }
}
