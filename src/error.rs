use thiserror::Error;

/// Convenience result type for fallible sequence/optional operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Error type returned by fallible operations in this crate.
///
/// This is a single error enum shared by the processing functions and
/// [`crate::optional::OptionalValue`]. Every error is reported synchronously
/// to the immediate caller; nothing is retried or recovered internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// A numeric argument violates its stated constraint (e.g. a negative
    /// element count passed to [`crate::processing::limit`]).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A required value was absent where presence is mandated (e.g.
    /// [`crate::optional::OptionalValue::of`] given `None`).
    #[error("null argument: {message}")]
    NullArgument { message: String },

    /// A value was demanded from an absent optional without a fallback
    /// (see [`crate::optional::OptionalValue::into_value`]).
    #[error("absent value accessed: {message}")]
    AbsentValueAccessed { message: String },
}
