// Copyright 2025 Cowboy AI, LLC.

//! Ordered, type-level lists of mixins
//!
//! A composition is named by a cons list of zero-sized mixin markers:
//!
//! ```text
//! mixins![ForEachIndexed, Map, Filter]
//!   = Cons<ForEachIndexed, Cons<Map, Cons<Filter, Nil>>>
//! ```
//!
//! Three questions are answered entirely by the type checker:
//! - [`Applicable<B>`]: can every mixin in the list be layered onto base `B`?
//! - [`Has<M, I>`]: is mixin `M` part of the list (at the inferred position `I`)?
//! - [`MixinList`]: how long is the list and what are its names, in order?

use std::marker::PhantomData;

/// A stateless capability unit that adds operations to a composed sequence
pub trait Mixin {
    /// Stable name used in composition descriptors and log events
    const NAME: &'static str;
}

/// Declares that a mixin can be layered onto base `B`
///
/// Each mixin implements this once, with the capability bounds it needs from
/// the base. That is the whole rejection rule for invalid compositions.
pub trait Extends<B>: Mixin {}

/// Non-empty list: `Head` followed by `Tail`
pub struct Cons<Head, Tail>(PhantomData<fn() -> (Head, Tail)>);

/// Empty list
pub struct Nil;

/// Position marker: the wanted mixin is the head of the list
pub struct Here;

/// Position marker: the wanted mixin is somewhere in the tail, at `I`
pub struct There<I>(PhantomData<fn() -> I>);

/// Build a mixin list type from a comma-separated list of mixin markers
///
/// ```rust
/// use cim_mixin::{mixins, Filter, Map, MixinList};
///
/// type Ops = mixins![Map, Filter];
/// assert_eq!(<Ops as MixinList>::names(), vec!["map", "filter"]);
/// ```
#[macro_export]
macro_rules! mixins {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::mixins![$($tail),*]>
    };
}

/// Length and names of a mixin list
pub trait MixinList {
    /// Number of mixins in the list
    const LEN: usize;

    /// Append the mixin names to `out`, in list order
    fn collect_names(out: &mut Vec<&'static str>);

    /// Mixin names in list order
    fn names() -> Vec<&'static str> {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::collect_names(&mut out);
        out
    }
}

impl MixinList for Nil {
    const LEN: usize = 0;

    fn collect_names(_out: &mut Vec<&'static str>) {}
}

impl<H: Mixin, T: MixinList> MixinList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn collect_names(out: &mut Vec<&'static str>) {
        out.push(H::NAME);
        T::collect_names(out);
    }
}

/// Every mixin in the list can be layered onto base `B`
pub trait Applicable<B>: MixinList {}

impl<B> Applicable<B> for Nil {}

impl<B, H, T> Applicable<B> for Cons<H, T>
where
    H: Extends<B>,
    T: Applicable<B>,
{
}

/// Mixin `M` is a member of the list, at position `I`
///
/// `I` is always inferred; callers never name it. A list that repeats `M`
/// leaves `I` ambiguous and calls to its operations fail to compile.
pub trait Has<M, I> {}

impl<M, T> Has<M, Here> for Cons<M, T> {}

impl<M, H, T, I> Has<M, There<I>> for Cons<H, T> where T: Has<M, I> {}
