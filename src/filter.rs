//! Pattern 1: a hand-rolled single-method function type.
//!
//! `Predicate` is the one-method trait a closure satisfies through the
//! blanket impl, so `filter` accepts `|v| v.v1() == 1` and named
//! implementors interchangeably.

/// Single abstract method: decide whether an item passes.
pub trait Predicate<T> {
    fn test(&self, item: &T) -> bool;
}

/// Every `Fn(&T) -> bool` is a `Predicate<T>`.
impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Manual filter: collects the items for which `predicate.test` returns
/// true, preserving input order. The input is never mutated; the result may
/// be empty.
pub fn filter<T, P>(items: &[T], predicate: &P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    let mut result = Vec::new();

    for item in items {
        if predicate.test(item) {
            result.push(item.clone());
        }
    }

    result
}
