//! Mixins defined outside the crate
//!
//! A downstream mixin is a marker, an `Extends` impl stating what it needs
//! from the base, and an extension trait implemented for `Mixed<B, L>` when
//! the marker is in `L`. It composes with the built-in mixins in any order.

use std::ops::Add;

use cim_mixin::prelude::*;
use cim_mixin::{AppendableSequence, Applicable, Extends, Has, IndexedSequence, Mixin, Sequence};
use pretty_assertions::assert_eq;

struct Reversed;

impl Mixin for Reversed {
    const NAME: &'static str = "reversed";
}

impl<B> Extends<B> for Reversed
where
    B: AppendableSequence + IndexedSequence,
    B::Item: Clone,
{
}

trait ReversedOps<I> {
    fn reversed(&self) -> Self;
}

impl<B, L, I> ReversedOps<I> for Mixed<B, L>
where
    B: AppendableSequence + IndexedSequence,
    B::Item: Clone,
    L: Applicable<B> + Has<Reversed, I>,
{
    fn reversed(&self) -> Self {
        let len = self.as_base().len();
        let mut out = B::with_capacity(len);
        for index in (0..len).rev() {
            if let Some(item) = self.as_base().get(index) {
                out.push(item.clone());
            }
        }
        Mixed::from_base(out)
    }
}

struct Total;

impl Mixin for Total {
    const NAME: &'static str = "total";
}

impl<B> Extends<B> for Total
where
    B: Sequence,
    B::Item: Copy + Default + Add<Output = B::Item>,
{
}

trait TotalOps<I, T> {
    fn total(&self) -> T;
}

impl<B, L, I> TotalOps<I, B::Item> for Mixed<B, L>
where
    B: Sequence,
    B::Item: Copy + Default + Add<Output = B::Item>,
    L: Has<Total, I>,
{
    fn total(&self) -> B::Item {
        self.as_base()
            .iter()
            .fold(B::Item::default(), |acc, item| acc + *item)
    }
}

type Custom = mixins![Reversed, Map, Total, Filter];

#[test]
fn custom_mixin_chains_with_builtins() {
    let seq: Mixed<Vec<i32>, Custom> = (1..=6).collect();
    let result = seq.filter(|n| n % 2 == 0).reversed().map(|n| n + 1);
    assert_eq!(result.into_base(), vec![7, 5, 3]);
}

#[test]
fn custom_mixin_names_appear_in_composition() {
    let composition = Mixed::<Vec<i32>, Custom>::composition();
    assert_eq!(composition.mixins, vec!["reversed", "map", "total", "filter"]);
}

#[test]
fn custom_terminal_operation() {
    let seq = vec![1.5f64, 2.5, 3.0].mix::<mixins![Map, Total]>();
    assert_eq!(seq.map(|x| x * 2.0).total(), 14.0);
}

#[test]
fn custom_mixin_on_empty_sequence() {
    let seq: Mixed<Vec<u32>, Custom> = Mixed::default();
    assert!(seq.reversed().is_empty());
    assert_eq!(seq.total(), 0);
}
