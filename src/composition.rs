// Copyright 2025 Cowboy AI, LLC.

//! Descriptors of a composition
//!
//! Composition is purely type-level, so a `Composition` carries no behaviour.
//! It records what was composed: the base type and the mixins in the order
//! they were listed. Equal inputs always produce equal descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mixin_list::MixinList;

/// What a composed sequence type is made of
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Composition {
    /// Fully qualified name of the base type, from [`std::any::type_name`]
    ///
    /// That name is diagnostic only: its exact text may change between
    /// compiler versions, so compare stored descriptors by `mixins` and treat
    /// `base` as informational (see [`Composition::same_mixins`]).
    pub base: String,
    /// Mixin names, in list order
    pub mixins: Vec<String>,
}

impl Composition {
    /// Describe the composition of base `B` with mixin list `L`
    pub fn of<B, L: MixinList>() -> Self {
        Self {
            base: std::any::type_name::<B>().to_string(),
            mixins: L::names().into_iter().map(str::to_string).collect(),
        }
    }

    /// Whether the named mixin is part of this composition
    pub fn contains(&self, mixin: &str) -> bool {
        self.mixins.iter().any(|m| m == mixin)
    }

    /// Whether both descriptors list the same mixins in the same order
    ///
    /// Ignores `base`, whose text is not stable across compiler versions.
    pub fn same_mixins(&self, other: &Composition) -> bool {
        self.mixins == other.mixins
    }

    /// Number of mixins layered onto the base
    pub fn depth(&self) -> usize {
        self.mixins.len()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + [{}]", self.base, self.mixins.join(", "))
    }
}
