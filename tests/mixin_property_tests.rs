//! Property tests for composed sequences
//!
//! Properties checked:
//! - wrapping and unwrapping the base never changes the elements
//! - every operation behaves the same whatever the mixin list order
//! - `map` preserves length, `filter` never grows the sequence
//! - `filter` with a constant predicate is identity or empty

use cim_mixin::prelude::*;
use proptest::prelude::*;

type Forward = mixins![ForEach, ForEachIndexed, Map, Filter];
type Backward = mixins![Filter, Map, ForEachIndexed, ForEach];
type Shuffled = mixins![Map, ForEach, Filter, ForEachIndexed];

fn elements() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-1_000i64..1_000, 0..64)
}

fn indexed<L>(mut seq: Mixed<Vec<i64>, L>) -> Vec<(usize, i64)>
where
    L: cim_mixin::Has<ForEachIndexed, cim_mixin::Here>,
{
    let mut out = Vec::new();
    seq.for_each_indexed(|i, n| out.push((i, *n)));
    out
}

proptest! {
    #[test]
    fn round_trip_preserves_elements(v in elements()) {
        let forward: Mixed<Vec<i64>, Forward> = v.clone().into();
        prop_assert_eq!(forward.into_base(), v.clone());

        let backward = v.clone().mix::<Backward>();
        prop_assert_eq!(Vec::from(backward), v.clone());

        let shuffled = Mix::<Shuffled>::wrap(v.clone());
        prop_assert_eq!(shuffled.remix::<Forward>().into_base(), v);
    }

    #[test]
    fn operations_ignore_mixin_order(v in elements(), k in -5i64..5) {
        let forward = v.clone().mix::<Forward>();
        let backward = v.clone().mix::<Backward>();
        let shuffled = v.clone().mix::<Shuffled>();

        let f = |n: &i64| n * k + 1;
        prop_assert_eq!(forward.map(f).into_base(), backward.map(f).into_base());
        prop_assert_eq!(forward.map(f).into_base(), shuffled.map(f).into_base());

        let p = |n: &i64| n % 3 == 0;
        prop_assert_eq!(forward.filter(p).into_base(), backward.filter(p).into_base());
        prop_assert_eq!(forward.filter(p).into_base(), shuffled.filter(p).into_base());

        let bump = |n: &mut i64| *n -= k;
        let visited_forward = forward.clone().for_each(bump).into_base();
        prop_assert_eq!(&visited_forward, &backward.clone().for_each(bump).into_base());
        prop_assert_eq!(&visited_forward, &shuffled.clone().for_each(bump).into_base());

        let expected: Vec<(usize, i64)> = v.iter().copied().enumerate().collect();
        let mut seen_backward = Vec::new();
        let mut backward = backward;
        backward.for_each_indexed(|i, n| seen_backward.push((i, *n)));
        prop_assert_eq!(&seen_backward, &expected);
    }

    #[test]
    fn map_preserves_length(v in elements()) {
        let composed = v.mix::<Forward>();
        let mapped = composed.map(|n| n.wrapping_mul(7));
        prop_assert_eq!(mapped.len(), composed.len());
    }

    #[test]
    fn filter_never_grows(v in elements(), threshold in -1_000i64..1_000) {
        let composed = v.mix::<Forward>();
        let kept = composed.filter(|n| *n >= threshold);
        prop_assert!(kept.len() <= composed.len());
        prop_assert!(kept.iter().all(|n| *n >= threshold));
    }

    #[test]
    fn filter_with_constant_predicate(v in elements()) {
        let composed = v.mix::<Forward>();
        prop_assert_eq!(composed.filter(|_| true), composed.clone());
        prop_assert!(composed.filter(|_| false).is_empty());
    }

    #[test]
    fn filter_preserves_relative_order(v in elements()) {
        let composed = v.clone().mix::<Backward>();
        let kept = composed.filter(|n| *n > 0).into_base();
        let expected: Vec<i64> = v.into_iter().filter(|n| *n > 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn for_each_indexed_matches_enumerate(v in elements()) {
        let composed: Mixed<Vec<i64>, mixins![ForEachIndexed, Map]> = v.clone().into();
        let expected: Vec<(usize, i64)> = v.into_iter().enumerate().collect();
        prop_assert_eq!(indexed(composed), expected);
    }
}
