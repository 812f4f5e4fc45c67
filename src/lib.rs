//! `sequence-ops` is a small library of pure, in-memory sequence
//! transformations over a generic [`types::Sequence`], plus an explicit
//! present-or-absent value wrapper, [`optional::OptionalValue`].
//!
//! Everything is eager, synchronous, and single-threaded: each operation
//! completes before returning, inputs are caller-owned and never mutated,
//! and there is no shared state between calls.
//!
//! ## What you get
//!
//! **Transformations** (see [`processing`]): `map`, `flat_map`, `filter`,
//! `distinct`, `limit`, `reduce`, `reduce_with_initial`, `sorted`,
//! `for_each`, `peek`.
//!
//! **Classification**: [`processing::group_by`] builds a
//! [`types::GroupingResult`] (key → ordered bucket, keys in first-occurrence
//! order); [`processing::partition_by`] builds a [`types::PartitionResult`]
//! (true-bucket / false-bucket).
//!
//! **Aggregates**: `count`, `sum`, comparator-driven `min`/`max`, and
//! delimiter `join`.
//!
//! **Optionals**: [`optional::OptionalValue`] is a tagged `Present`/`Absent`
//! sum type with eager (`or_else`), lazy (`or_else_get`), and fallible
//! (`or_else_throw`, `into_value`) access.
//!
//! ## Quick example: grouping and partitioning
//!
//! ```rust
//! use sequence_ops::processing::{group_by, partition_by};
//! use sequence_ops::types::Sequence;
//!
//! let fruits = Sequence::new(vec![
//!     "Apple", "Banana", "Cherry", "Date", "Apple", "Banana",
//! ]);
//!
//! let by_length = group_by(&fruits, |fruit| fruit.len());
//! assert_eq!(by_length.get(&4), Some(["Date"].as_slice()));
//!
//! let by_parity = partition_by(&fruits, |fruit| fruit.len() % 2 == 0);
//! assert_eq!(by_parity.unmatched, vec!["Apple", "Apple"]);
//! ```
//!
//! ## Quick example: optional access
//!
//! ```rust
//! use sequence_ops::optional::OptionalValue;
//! use sequence_ops::processing::min;
//! use sequence_ops::types::Sequence;
//!
//! let empty: Sequence<i64> = Sequence::empty();
//! assert_eq!(min(&empty, |a, b| a.cmp(b)).or_else(0), 0);
//!
//! let err = OptionalValue::<i64>::absent()
//!     .or_else_throw(|| "nothing to see")
//!     .unwrap_err();
//! assert_eq!(err, "nothing to see");
//! ```
//!
//! ## Modules
//!
//! - [`types`]: [`types::Sequence`], [`types::GroupingResult`],
//!   [`types::PartitionResult`]
//! - [`optional`]: [`optional::OptionalValue`]
//! - [`processing`]: the transformation and aggregation functions
//! - [`error`]: [`error::SequenceError`] and the [`error::SequenceResult`]
//!   alias
//!
//! ## Error handling
//!
//! The fallible surface is small and synchronous:
//!
//! - [`processing::limit`] rejects a negative count
//!   ([`error::SequenceError::InvalidArgument`])
//! - [`optional::OptionalValue::of`] rejects an absent input
//!   ([`error::SequenceError::NullArgument`])
//! - [`optional::OptionalValue::into_value`] reports access to an absent
//!   value ([`error::SequenceError::AbsentValueAccessed`])

pub mod error;
pub mod optional;
pub mod processing;
pub mod types;

pub use error::{SequenceError, SequenceResult};
pub use optional::OptionalValue;
pub use types::{GroupingResult, PartitionResult, Sequence};
