// Copyright 2025 Cowboy AI, LLC.

//! Operation mixins for composed sequences
//!
//! Each mixin is a zero-sized marker plus the operations it unlocks on
//! [`Mixed`](crate::Mixed). Mixins know nothing about each other: an operation
//! depends only on the element type and returns the final composed type, so
//! any list order yields the same behaviour.
//!
//! | Mixin | Base capability | Operation |
//! |---|---|---|
//! | [`ForEach`] | `Sequence` | `for_each`, `try_for_each` |
//! | [`ForEachIndexed`] | `IndexedSequence` | `for_each_indexed` |
//! | [`Map`] | `AppendableSequence` | `map` |
//! | [`Filter`] | `AppendableSequence`, `Clone` elements | `filter` |

pub mod filter;
pub mod for_each;
pub mod for_each_indexed;
pub mod map;

pub use filter::Filter;
pub use for_each::ForEach;
pub use for_each_indexed::ForEachIndexed;
pub use map::Map;
