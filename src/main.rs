//! Runs the four functional-construct demos in order over one fixed list of
//! records and prints every intermediate result.
//!
//! Run with: cargo run

use colored::Colorize;
use std::error::Error;

use lambda_playground::{
    display_list, expand_flatten, filter, map, project, reduce, reduce_parallel,
    reduce_partitioned, try_map, TransformError, Val,
};

fn main() -> Result<(), Box<dyn Error>> {
    let values = vec![Val::new(1, 1), Val::new(1, 2), Val::new(2, 1), Val::new(2, 2)];

    predicate_demo(&values);
    transform_demo(&values)?;
    reduce_demo(&values);
    flat_map_demo(&values);

    Ok(())
}

/// A hand-rolled Predicate plus a manual filter, instantiated with a
/// closure testing `v1 == 1`.
fn predicate_demo(values: &[Val]) {
    println!("{}", "=== Own Predicate (manual filter) ===".bold().blue());

    println!("Before own Predicate call: {}", display_list(values));

    let result = filter(values, &|v: &Val| v.v1() == 1);

    println!("Own Predicate call Result: {}", display_list(&result));
}

/// A hand-rolled Transform plus a manual map, instantiated with `v1 + v2`.
/// The checked variant goes through `try_map`; a transform failure would
/// abort this demo's remaining output and the process.
fn transform_demo(values: &[Val]) -> Result<(), TransformError> {
    println!("\n{}", "=== Own Function (manual map) ===".bold().blue());

    println!("Before own function call: {}", display_list(values));

    let result = map(values, &|v: &Val| v.v1() + v.v2());

    println!("Function call Result: {:?}", result);

    let checked = try_map(values, |v| {
        v.v1()
            .checked_add(v.v2())
            .ok_or(TransformError::Overflow { v1: v.v1(), v2: v.v2() })
    })?;

    println!("Checked function call Result: {:?}", checked);

    Ok(())
}

/// Reduce with the identity / accumulator / combiner triple. The sequential
/// fold never touches the combiner, so the partitioned run follows to make
/// the combiner's merges visible; the ascii sum goes through the rayon pool.
fn reduce_demo(values: &[Val]) {
    println!("\n{}", "=== Reduce ===".bold().blue());

    let sequential = reduce(values, 0, |a, v: &Val| a + v.v1(), |a, b| a + b);
    println!("Reduce result: {}", sequential);

    let partitioned = reduce_partitioned(
        values,
        2,
        0,
        |a, v: &Val| a + v.v1(),
        |a, b| {
            let c = a + b;
            println!("a: {} b: {} c: {}", a, b, c);
            c
        },
    );
    println!("Reduce result (partitioned): {}", partitioned);

    let ascii_sum = reduce_parallel(
        &['A', 'B', 'C'],
        0,
        |u, c: &char| u + *c as i32,
        |u1, u2| u1 + u2,
    );
    println!("Reduce ascii result: {}", ascii_sum);
}

/// One-to-one projection of `v1` next to the same mapping expressed as a
/// singleton expansion that gets flattened; both sequences come out equal.
fn flat_map_demo(values: &[Val]) {
    println!("\n{}", "=== FlatMap ===".bold().blue());

    println!("Before own FlatMap call: {}", display_list(values));

    let result_map = project(values, |v| v.v1());
    let result_flat_map = expand_flatten(values, |v| vec![v.v1()]);

    println!(
        "FlatMap call Result: {:?} resultFlatMap: {:?}",
        result_map, result_flat_map
    );
}
