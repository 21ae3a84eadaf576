//! Object style: mix operations into an existing value
//!
//! This example shows:
//! - Wrapping a plain `Vec` with `mix::<...>()`
//! - Chaining `filter` and `map`
//! - Visiting the result with `for_each_indexed`
//! - Converting back to the plain `Vec`
//!
//! Run with `RUST_LOG=trace` to see the operation events.

use cim_mixin::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Object style syntax: mix things into an object.");
    let a: Vec<i32> = (0..=10).collect();
    let b = a.mix::<mixins![ForEachIndexed, Map, Filter]>();
    let mut c = b.filter(|value| value % 2 == 0).map(|value| value * 10);

    let last = c.len().saturating_sub(1);
    c.for_each_indexed(|idx, n| print!("{n}{}", if idx < last { ", " } else { "" }));
    println!();

    // Explicit conversion back to the plain vector
    let d: Vec<i32> = c.clone().into_base();
    println!("Testing conversion back to Vec");
    let mut flag = true;
    c.for_each_indexed(|idx, v| flag &= *v == d[idx]);
    println!("{}", if flag { "YES!" } else { "NO!" });

    println!("As JSON: {}", c.to_json()?);
    println!();
    Ok(())
}
