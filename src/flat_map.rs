//! Pattern 4: one-to-one projection next to one-to-many expansion.
//!
//! `expand_flatten` accepts expansions producing zero, one, or many elements
//! per item. With a singleton expansion its output is element-wise equal to
//! `project`'s, which is the point the demo makes.

/// One-to-one mapping: one output element per input item, in input order.
pub fn project<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        result.push(f(item));
    }

    result
}

/// One-to-many mapping: each item expands into a sequence and the sequences
/// are concatenated in input order into one flat result.
pub fn expand_flatten<T, R, I, F>(items: &[T], expand: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: Fn(&T) -> I,
{
    let mut result = Vec::new();

    for item in items {
        result.extend(expand(item));
    }

    result
}
