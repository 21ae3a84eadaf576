//! # CIM Mixin
//!
//! Compile-time mixins that graft extension operations onto an existing
//! sequence container without modifying it.
//!
//! This crate provides the building blocks of a composition:
//! - **Sequence capabilities**: what a base container offers (`Sequence`,
//!   `IndexedSequence`, `AppendableSequence`)
//! - **Mixins**: stateless markers that unlock operations (`ForEach`,
//!   `ForEachIndexed`, `Map`, `Filter`)
//! - **Mixin lists**: ordered, type-level lists built with [`mixins!`]
//! - **Composed type**: [`Mixed<B, L>`], the base `B` plus the operations of `L`
//! - **Entry points**: value style ([`Mix`], [`MixExt`]) and type style ([`InClass`])
//!
//! ## Design Principles
//!
//! 1. **Composition over inheritance**: the composed type wraps its base; the
//!    mixin list exists only in the type
//! 2. **Fluent results**: every operation returns the final composed type
//! 3. **Explicit conversion**: wrapping and unwrapping the base are named calls
//! 4. **Compile-time rejection**: a mixin the base cannot support, or an
//!    operation whose mixin is not listed, fails to type-check
//!
//! ## Example
//!
//! ```rust
//! use cim_mixin::{mixins, Filter, ForEachIndexed, Map, MixExt};
//!
//! let numbers: Vec<i32> = (0..=10).collect();
//! let mut scaled = numbers
//!     .mix::<mixins![ForEachIndexed, Map, Filter]>()
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10);
//!
//! let mut rendered = Vec::new();
//! scaled.for_each_indexed(|i, n| rendered.push(format!("{i}:{n}")));
//! assert_eq!(rendered.join(" "), "0:0 1:20 2:40 3:60 4:80 5:100");
//!
//! let plain: Vec<i32> = scaled.into_base();
//! assert_eq!(plain, vec![0, 20, 40, 60, 80, 100]);
//! ```
//!
//! Calling an operation whose mixin was not composed is a type error:
//!
//! ```compile_fail
//! use cim_mixin::{mixins, Map, MixExt};
//!
//! let only_map = vec![1, 2, 3].mix::<mixins![Map]>();
//! let _ = only_map.filter(|n| *n > 1);
//! ```

#![warn(missing_docs)]

mod composed;
mod composition;
mod errors;
mod mix;
mod mixin_list;
mod sequence;
pub mod operations;

// Re-export core types
pub use composed::Mixed;
pub use composition::Composition;
pub use errors::{MixinError, MixinResult};
pub use mix::{InClass, Mix, MixExt};
pub use mixin_list::{Applicable, Cons, Extends, Has, Here, Mixin, MixinList, Nil, There};
pub use operations::{Filter, ForEach, ForEachIndexed, Map};
pub use sequence::{AppendableSequence, IndexedSequence, Sequence};

pub mod prelude {
    //! Everything needed to compose and use mixins
    pub use crate::composed::Mixed;
    pub use crate::mix::{InClass, Mix, MixExt};
    pub use crate::operations::{Filter, ForEach, ForEachIndexed, Map};
    pub use crate::{mixed, mixins};
}
