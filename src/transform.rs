//! Pattern 2: a single-method mapping type and a manual map.

use thiserror::Error;

/// Single abstract method: turn an item into a result value.
pub trait Transform<T, R> {
    fn apply(&self, item: &T) -> R;
}

/// Every `Fn(&T) -> R` is a `Transform<T, R>`.
impl<T, R, F> Transform<T, R> for F
where
    F: Fn(&T) -> R,
{
    fn apply(&self, item: &T) -> R {
        self(item)
    }
}

/// Errors a transform can raise.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("integer overflow while transforming Val{{v1={v1}, v2={v2}}}")]
    Overflow { v1: i32, v2: i32 },
}

/// Manual map: output has the same length as the input, with
/// `out[i] = transform(in[i])` and order preserved.
pub fn map<T, R, F>(items: &[T], transform: &F) -> Vec<R>
where
    F: Transform<T, R>,
{
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        result.push(transform.apply(item));
    }

    result
}

/// Fallible map: the first `Err` aborts the mapping and propagates to the
/// caller. There is no retry or recovery.
pub fn try_map<T, R, E, F>(items: &[T], transform: F) -> Result<Vec<R>, E>
where
    F: Fn(&T) -> Result<R, E>,
{
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        result.push(transform(item)?);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Val;

    fn fixture() -> Vec<Val> {
        vec![Val::new(1, 1), Val::new(1, 2), Val::new(2, 1), Val::new(2, 2)]
    }

    #[test]
    fn test_map_sums_fields() {
        let result = map(&fixture(), &|v: &Val| v.v1() + v.v2());
        assert_eq!(result, vec![2, 3, 3, 4]);
    }

    #[test]
    fn test_map_preserves_length_and_positions() {
        let vals = fixture();
        let result = map(&vals, &|v: &Val| v.v2() * 10);

        assert_eq!(result.len(), vals.len());
        for (i, v) in vals.iter().enumerate() {
            assert_eq!(result[i], v.v2() * 10);
        }
    }

    #[test]
    fn test_map_on_empty_input() {
        let none: [Val; 0] = [];
        let result = map(&none, &|v: &Val| v.v1());
        assert!(result.is_empty());
    }

    struct SumFields;

    impl Transform<Val, i32> for SumFields {
        fn apply(&self, item: &Val) -> i32 {
            item.v1() + item.v2()
        }
    }

    #[test]
    fn test_named_implementor_matches_closure() {
        let vals = fixture();
        assert_eq!(map(&vals, &SumFields), map(&vals, &|v: &Val| v.v1() + v.v2()));
    }

    fn checked_sum(v: &Val) -> Result<i32, TransformError> {
        v.v1()
            .checked_add(v.v2())
            .ok_or(TransformError::Overflow { v1: v.v1(), v2: v.v2() })
    }

    #[test]
    fn test_try_map_success() {
        let result = try_map(&fixture(), checked_sum);
        assert_eq!(result, Ok(vec![2, 3, 3, 4]));
    }

    #[test]
    fn test_try_map_propagates_first_error() {
        let vals = vec![Val::new(1, 1), Val::new(i32::MAX, 1), Val::new(2, 2)];
        let result = try_map(&vals, checked_sum);
        assert_eq!(
            result,
            Err(TransformError::Overflow { v1: i32::MAX, v2: 1 })
        );
    }
}
