//! Class style: declare the composed type and construct it directly
//!
//! This example shows:
//! - Naming the composed type with `InClass`
//! - List initialisation with `mixed![...]` and the usual constructors
//! - Inspecting the composition descriptor

use cim_mixin::prelude::*;
use tracing_subscriber::EnvFilter;

type Vector<T> = InClass<Vec<T>, mixins![ForEachIndexed, Map, Filter]>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Class style syntax: mix things into a class");
    println!("Composition: {}", Vector::<i32>::composition());

    // The usual constructors work too:
    //   Vector::from(vec![10; 3]), Vector::from(vec![0; 2]), Vector::default()
    let a: Vector<i32> = mixed![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut b = a.filter(|value| value % 2 == 0).map(|value| value * 10);

    let last = b.len().saturating_sub(1);
    b.for_each_indexed(|idx, value| print!("{value}{}", if idx < last { ", " } else { "" }));
    println!();

    let c: Vec<i32> = b.clone().into();
    println!("Testing conversion back to Vec");
    let mut flag = true;
    b.for_each_indexed(|idx, value| flag &= *value == c[idx]);
    println!("{}", if flag { "YES!" } else { "NO!" });
    println!();
    Ok(())
}
