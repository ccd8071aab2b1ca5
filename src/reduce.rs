//! Pattern 3: reduce with an identity / accumulator / combiner triple.
//!
//! The three-argument signature exists so one contract covers sequential,
//! partitioned, and parallel evaluation. The combiner only ever merges two
//! independently computed partials; for accumulator/combiner pairs that
//! agree (both "add"), every strategy below yields the value of the strict
//! left fold.

use rayon::prelude::*;

/// Strict sequential left fold. The combiner is part of the reduce contract
/// but this path never partitions, so it is never invoked here.
pub fn reduce<T, U, A, C>(items: &[T], identity: U, accumulator: A, _combiner: C) -> U
where
    A: Fn(U, &T) -> U,
    C: Fn(U, U) -> U,
{
    let mut acc = identity;

    for item in items {
        acc = accumulator(acc, item);
    }

    acc
}

/// Partitioned reduce: split the input into chunks, left-fold each chunk
/// from its own copy of the identity, then merge the partials left-to-right
/// with the combiner. Deterministic, so combiner activity can be observed.
pub fn reduce_partitioned<T, U, A, C>(
    items: &[T],
    chunk_size: usize,
    identity: U,
    accumulator: A,
    combiner: C,
) -> U
where
    U: Clone,
    A: Fn(U, &T) -> U,
    C: Fn(U, U) -> U,
{
    let partials: Vec<U> = items
        .chunks(chunk_size.max(1))
        .map(|chunk| {
            let mut acc = identity.clone();
            for item in chunk {
                acc = accumulator(acc, item);
            }
            acc
        })
        .collect();

    let mut partials = partials.into_iter();
    match partials.next() {
        Some(first) => partials.fold(first, combiner),
        None => identity,
    }
}

/// Parallel reduce on Rayon's work-stealing pool. Each worker folds its
/// portion from a copy of the identity; the combiner merges partials in an
/// unspecified tree order.
pub fn reduce_parallel<T, U, A, C>(items: &[T], identity: U, accumulator: A, combiner: C) -> U
where
    T: Sync,
    U: Clone + Send + Sync,
    A: Fn(U, &T) -> U + Sync + Send,
    C: Fn(U, U) -> U + Sync + Send,
{
    items
        .par_iter()
        .fold(|| identity.clone(), |acc, item| accumulator(acc, item))
        .reduce(|| identity.clone(), combiner)
}
