//! In-memory sequence transformations.
//!
//! Every function here borrows a [`crate::types::Sequence`] and produces a
//! fresh sequence, classification result, or scalar. Inputs are never
//! mutated; execution is eager, synchronous, and single-threaded.
//!
//! Implemented operations:
//!
//! - [`map()`] / [`flat_map()`]: element mapping and expansion
//! - [`filter()`] / [`distinct()`] / [`limit()`]: element selection
//! - [`reduce()`] / [`reduce_with_initial()`]: left folds
//! - [`group_by()`] / [`partition_by()`]: classification
//! - [`count()`] / [`min()`] / [`max()`] / [`sum()`] / [`join()`]: aggregates
//! - [`sorted()`]: stable comparator sort
//! - [`for_each()`] / [`peek()`]: ordered element visitors
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use sequence_ops::processing::{filter, map, reduce};
//! use sequence_ops::types::Sequence;
//!
//! let scores = Sequence::new(vec![3, 2, 2, 3, 7, 3, 5]);
//!
//! // Keep odd scores, double them, then take the minimum.
//! let odd = filter(&scores, |v| v % 2 != 0);
//! let doubled = map(&odd, |v| v * 2);
//! let minimum = reduce(&doubled, |x, y| if x <= *y { x } else { *y });
//!
//! assert_eq!(minimum.or_else(0), 6);
//! ```

pub mod aggregate;
pub mod filter;
pub mod group;
pub mod inspect;
pub mod map;
pub mod order;
pub mod reduce;

pub use aggregate::{count, join, max, min, sum};
pub use filter::{distinct, filter, limit};
pub use group::{group_by, partition_by};
pub use inspect::{for_each, peek};
pub use map::{flat_map, map};
pub use order::sorted;
pub use reduce::{reduce, reduce_with_initial};
