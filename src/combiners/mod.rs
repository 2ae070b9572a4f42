//! Built-in combiners for `combine_values`, `combine_groups` and `combine_globally`.
//!
//! These are reusable implementations of [`CombineFn`](crate::CombineFn):
//!
//! - [`Sum<T>`] -- sum of values.
//! - [`ToList<T>`] -- all values in arrival order.
//! - [`Average`] -- mean as `f64`, `None` for empty input.
//! - [`DistinctOrdered<T>`] -- distinct values in first-seen order.
//!
//! Each combiner specifies its accumulator type (`A`) and output type (`O`).
//!
//! # Examples
//! ```
//! use prototypes::*;
//!
//! // Sum per key
//! let s = from_vec(vec![("a", 1u64), ("a", 2), ("b", 10)])
//!     .combine_values(Sum::<u64>::default())
//!     .collect_seq();
//! assert_eq!(s, vec![("a", 3), ("b", 10)]);
//!
//! // Average (values must be Into<f64>)
//! let avg = from_vec(vec![("a", 1u32), ("a", 2), ("a", 3)])
//!     .combine_values(Average)
//!     .collect_seq();
//! assert_eq!(avg, vec![("a", Some(2.0))]);
//!
//! // DistinctOrdered (values must be Eq + Hash)
//! let d = from_vec(vec![("a", 2u32), ("a", 1), ("a", 2)])
//!     .combine_values(DistinctOrdered::<u32>::default())
//!     .collect_seq();
//! assert_eq!(d, vec![("a", vec![2, 1])]);
//! ```

mod basic;
mod distinct;
mod statistical;

// Re-export all public combiners
pub use basic::{Sum, ToList};
pub use distinct::DistinctOrdered;
pub use statistical::Average;
