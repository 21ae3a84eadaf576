// Copyright 2025 Cowboy AI, LLC.

//! The composed sequence type
//!
//! `Mixed<B, L>` owns exactly one `B` and nothing else; the mixin list `L`
//! only exists at the type level. Every operation of `B` stays reachable
//! through `Deref`, and the operations contributed by `L` all return
//! `Mixed<B, L>` itself so calls chain regardless of list order.
//!
//! Conversions between the composed type and its base are explicit:
//! [`Mixed::from_base`] / `From<B>` wrap, [`Mixed::into_base`] / `From<Mixed>`
//! unwrap. Neither direction touches the elements.

use std::collections::{LinkedList, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::composition::Composition;
use crate::errors::{MixinError, MixinResult};
use crate::mixin_list::Applicable;
use crate::sequence::{AppendableSequence, IndexedSequence, Sequence};

/// A base sequence `B` extended with the operations of mixin list `L`
///
/// # Examples
///
/// ```rust
/// use cim_mixin::{mixins, Filter, ForEachIndexed, InClass, Map};
///
/// type Vector<T> = InClass<Vec<T>, mixins![ForEachIndexed, Map, Filter]>;
///
/// let numbers: Vector<i32> = (0..=10).collect();
/// let scaled = numbers.filter(|n| n % 2 == 0).map(|n| n * 10);
///
/// assert_eq!(scaled.into_base(), vec![0, 20, 40, 60, 80, 100]);
/// ```
pub struct Mixed<B, L> {
    base: B,
    _mixins: PhantomData<fn() -> L>,
}

impl<B, L> Mixed<B, L> {
    /// Wrap without re-checking applicability; callers already hold a valid `Mixed<B, L>`
    pub(crate) fn wrap(base: B) -> Self {
        Self {
            base,
            _mixins: PhantomData,
        }
    }

    /// Unwrap into the base value, dropping the extra operations
    pub fn into_base(self) -> B {
        self.base
    }

    /// Borrow the base value
    pub fn as_base(&self) -> &B {
        &self.base
    }

    /// Mutably borrow the base value
    pub fn as_base_mut(&mut self) -> &mut B {
        &mut self.base
    }
}

impl<B, L: Applicable<B>> Mixed<B, L> {
    /// Wrap an existing base value
    pub fn from_base(base: B) -> Self {
        Self::wrap(base)
    }

    /// Same elements, different operation set
    pub fn remix<L2: Applicable<B>>(self) -> Mixed<B, L2> {
        debug!(
            from = ?L::names(),
            to = ?L2::names(),
            "remixing sequence"
        );
        Mixed::wrap(self.base)
    }

    /// Describe this composition: the base type and the mixin names in order
    pub fn composition() -> Composition {
        Composition::of::<B, L>()
    }
}

impl<B: IndexedSequence, L> Mixed<B, L> {
    /// Checked element access
    pub fn at(&self, index: usize) -> MixinResult<&B::Item> {
        let len = self.base.len();
        self.base
            .get(index)
            .ok_or_else(|| MixinError::out_of_bounds(index, len))
    }

    /// Checked mutable element access
    pub fn at_mut(&mut self, index: usize) -> MixinResult<&mut B::Item> {
        let len = self.base.len();
        self.base
            .get_mut(index)
            .ok_or_else(|| MixinError::out_of_bounds(index, len))
    }
}

#[cfg(feature = "json")]
impl<B, L> Mixed<B, L>
where
    B: Serialize + for<'de> Deserialize<'de>,
    L: Applicable<B>,
{
    /// Serialize the elements as JSON, exactly as the base would be
    pub fn to_json(&self) -> MixinResult<String> {
        Ok(serde_json::to_string(&self.base)?)
    }

    /// Deserialize a base value from JSON and wrap it
    pub fn from_json(json: &str) -> MixinResult<Self> {
        let base: B = serde_json::from_str(json)?;
        Ok(Self::from_base(base))
    }
}

// ===== Base access =====

impl<B, L> Deref for Mixed<B, L> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.base
    }
}

impl<B, L> DerefMut for Mixed<B, L> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.base
    }
}

impl<B, L> AsRef<B> for Mixed<B, L> {
    fn as_ref(&self) -> &B {
        &self.base
    }
}

impl<B, L> AsMut<B> for Mixed<B, L> {
    fn as_mut(&mut self) -> &mut B {
        &mut self.base
    }
}

// A composed sequence is itself a sequence, so it can serve as a base again.
impl<B: Sequence, L> Sequence for Mixed<B, L> {
    type Item = B::Item;
    type Iter<'a> = B::Iter<'a> where Self: 'a;
    type IterMut<'a> = B::IterMut<'a> where Self: 'a;

    fn len(&self) -> usize {
        self.base.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.base.iter()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.base.iter_mut()
    }
}

impl<B: IndexedSequence, L> IndexedSequence for Mixed<B, L> {
    fn get(&self, index: usize) -> Option<&B::Item> {
        self.base.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut B::Item> {
        self.base.get_mut(index)
    }
}

impl<B: AppendableSequence, L: Applicable<B>> AppendableSequence for Mixed<B, L> {
    fn with_capacity(capacity: usize) -> Self {
        Self::wrap(B::with_capacity(capacity))
    }

    fn push(&mut self, item: B::Item) {
        self.base.push(item);
    }
}

// ===== Construction =====

impl<B, L: Applicable<B>> From<B> for Mixed<B, L> {
    fn from(base: B) -> Self {
        Self::from_base(base)
    }
}

impl<B: Default, L: Applicable<B>> Default for Mixed<B, L> {
    fn default() -> Self {
        Self::wrap(B::default())
    }
}

impl<T, B, L> FromIterator<T> for Mixed<B, L>
where
    B: FromIterator<T>,
    L: Applicable<B>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::wrap(B::from_iter(iter))
    }
}

impl<T, B: Extend<T>, L> Extend<T> for Mixed<B, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.base.extend(iter);
    }
}

/// List-style initialisation of a composed sequence
///
/// ```rust
/// use cim_mixin::{mixed, mixins, InClass, Map};
///
/// let doubled: InClass<Vec<u32>, mixins![Map]> = mixed![1, 2, 3];
/// assert_eq!(doubled.map(|n| n * 2).into_base(), vec![2, 4, 6]);
/// ```
#[macro_export]
macro_rules! mixed {
    ($($item:expr),* $(,)?) => {
        ::core::iter::Iterator::collect(::core::iter::IntoIterator::into_iter([$($item),*]))
    };
}

// ===== Conversion back to the base =====

macro_rules! impl_into_base {
    ($($container:ident),* $(,)?) => {
        $(
            impl<T, L> From<Mixed<$container<T>, L>> for $container<T> {
                fn from(mixed: Mixed<$container<T>, L>) -> Self {
                    mixed.into_base()
                }
            }
        )*
    };
}

impl_into_base!(Vec, VecDeque, LinkedList);

// ===== Iteration =====

impl<B: IntoIterator, L> IntoIterator for Mixed<B, L> {
    type Item = B::Item;
    type IntoIter = B::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.base.into_iter()
    }
}

impl<'a, B, L> IntoIterator for &'a Mixed<B, L>
where
    &'a B: IntoIterator,
{
    type Item = <&'a B as IntoIterator>::Item;
    type IntoIter = <&'a B as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.base).into_iter()
    }
}

impl<'a, B, L> IntoIterator for &'a mut Mixed<B, L>
where
    &'a mut B: IntoIterator,
{
    type Item = <&'a mut B as IntoIterator>::Item;
    type IntoIter = <&'a mut B as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&mut self.base).into_iter()
    }
}

// ===== Value semantics, transparent to the base =====

impl<B: Clone, L> Clone for Mixed<B, L> {
    fn clone(&self) -> Self {
        Self::wrap(self.base.clone())
    }
}

impl<B: fmt::Debug, L> fmt::Debug for Mixed<B, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

impl<B: PartialEq, L> PartialEq for Mixed<B, L> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<B: PartialEq, L> PartialEq<B> for Mixed<B, L> {
    fn eq(&self, other: &B) -> bool {
        self.base == *other
    }
}

impl<B: Eq, L> Eq for Mixed<B, L> {}

impl<B: Hash, L> Hash for Mixed<B, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
    }
}

impl<B: Serialize, L> Serialize for Mixed<B, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.base.serialize(serializer)
    }
}

impl<'de, B, L> Deserialize<'de> for Mixed<B, L>
where
    B: Deserialize<'de>,
    L: Applicable<B>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        B::deserialize(deserializer).map(Self::wrap)
    }
}
