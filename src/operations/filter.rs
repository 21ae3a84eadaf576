// Copyright 2025 Cowboy AI, LLC.

//! `filter`: build a new sequence of the elements a predicate keeps

use tracing::trace;

use crate::composed::Mixed;
use crate::mixin_list::{Extends, Has, Mixin};
use crate::sequence::AppendableSequence;

/// Mixin adding [`Mixed::filter`]
///
/// Kept elements are copied into the result, so the element type must be
/// `Clone`:
///
/// ```compile_fail
/// use cim_mixin::{mixins, Filter, MixExt};
///
/// struct Token;
/// let _ = vec![Token].mix::<mixins![Filter]>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Filter;

impl Mixin for Filter {
    const NAME: &'static str = "filter";
}

impl<B> Extends<B> for Filter
where
    B: AppendableSequence,
    B::Item: Clone,
{
}

impl<B, L> Mixed<B, L>
where
    B: AppendableSequence,
    B::Item: Clone,
{
    /// Keep the elements for which `predicate` holds, preserving their order
    pub fn filter<I, F>(&self, mut predicate: F) -> Self
    where
        L: Has<Filter, I>,
        F: FnMut(&B::Item) -> bool,
    {
        let base = self.as_base();
        let mut out = B::default();
        for item in base.iter() {
            if predicate(item) {
                out.push(item.clone());
            }
        }
        trace!(
            mixin = Filter::NAME,
            input_len = base.len(),
            output_len = out.len(),
            "filtered sequence"
        );
        Self::wrap(out)
    }
}
