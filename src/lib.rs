//! # Lambda Playground
//!
//! Hand-rolled functional constructs over a fixed list of two-integer
//! records, to show that the building blocks behind filter / map / reduce /
//! flat_map are small enough to write by hand.
//!
//! ## Patterns Covered
//!
//! 1. **Single-method function types**
//!    - `Predicate<T>` and `Transform<T, R>` each expose exactly one method
//!    - Blanket impls make any matching closure an implementor
//!
//! 2. **Manual filter and map**
//!    - Order-preserving filter over a slice
//!    - Length-preserving map, plus a fallible `try_map` that propagates
//!      the first error
//!
//! 3. **Reduce with identity / accumulator / combiner**
//!    - Sequential left fold (combiner unused)
//!    - Deterministic partitioned reduce that really exercises the combiner
//!    - Rayon-parallel reduce; all three agree for add-style pairs
//!
//! 4. **Projection vs flat expansion**
//!    - `project` maps one-to-one, `expand_flatten` maps one-to-many and
//!      concatenates; a singleton expansion makes them coincide
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! ```

pub mod filter;
pub mod flat_map;
pub mod record;
pub mod reduce;
pub mod transform;

pub use filter::{filter, Predicate};
pub use flat_map::{expand_flatten, project};
pub use record::{display_list, Val};
pub use reduce::{reduce, reduce_parallel, reduce_partitioned};
pub use transform::{map, try_map, Transform, TransformError};
