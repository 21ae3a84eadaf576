// Copyright 2025 Cowboy AI, LLC.

//! Entry points for composing mixins onto a base sequence
//!
//! Two styles lead to the same `Mixed<B, L>`:
//!
//! - **Value style**: take an existing value and wrap it,
//!   `Mix::<L>::wrap(value)` or `value.mix::<L>()`.
//! - **Type style**: name the composed type, `InClass<B, L>`, and use any of
//!   its constructors (`from`, `collect`, `default`, [`mixed!`](crate::mixed)).

use std::marker::PhantomData;

use tracing::debug;

use crate::composed::Mixed;
use crate::mixin_list::Applicable;
use crate::sequence::Sequence;

/// The composed type of base `B` with mixin list `L`
///
/// ```rust
/// use cim_mixin::{mixins, Filter, ForEachIndexed, InClass, Map};
///
/// type Vector<T> = InClass<Vec<T>, mixins![ForEachIndexed, Map, Filter]>;
///
/// let filled = Vector::from(vec![10; 3]);
/// assert_eq!(filled.len(), 3);
/// ```
pub type InClass<B, L> = Mixed<B, L>;

/// Value-style composer for mixin list `L`
pub struct Mix<L>(PhantomData<fn() -> L>);

impl<L> Mix<L> {
    /// Wrap `base` into the composed type
    ///
    /// ```rust
    /// use cim_mixin::{mixins, Filter, Map, Mix};
    ///
    /// let mixed = Mix::<mixins![Map, Filter]>::wrap(vec![1, 2, 3, 4]);
    /// let odd = mixed.filter(|n| n % 2 == 1);
    /// assert_eq!(odd.into_base(), vec![1, 3]);
    /// ```
    pub fn wrap<B>(base: B) -> Mixed<B, L>
    where
        L: Applicable<B>,
    {
        debug!(
            base = std::any::type_name::<B>(),
            mixins = ?L::names(),
            "composing mixins onto value"
        );
        Mixed::from_base(base)
    }
}

/// Extension method form of [`Mix::wrap`] for every sequence
pub trait MixExt: Sequence + Sized {
    /// Wrap `self` into the composed type with mixin list `L`
    fn mix<L: Applicable<Self>>(self) -> Mixed<Self, L> {
        Mix::<L>::wrap(self)
    }
}

impl<B: Sequence> MixExt for B {}
