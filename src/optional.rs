//! A present-or-absent value wrapper.
//!
//! [`OptionalValue`] is a tagged two-state sum type: `Present` holds exactly
//! one value, `Absent` holds nothing, and the two are never conflated with a
//! null-equivalent value. Both states are terminal; every constructor and
//! combinator produces a fresh instance.
//!
//! It mirrors `Option<T>` deliberately (and converts to/from it), but adds
//! the fallible access vocabulary used across this crate: defaults, lazy
//! defaults, and caller-supplied errors on absence.

use serde::{Deserialize, Serialize};

use crate::error::{SequenceError, SequenceResult};

/// Either a single contained value or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionalValue<T> {
    /// Exactly one value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> OptionalValue<T> {
    /// Wrap a value that is known to be present.
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent state.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Wrap a value whose presence is mandated.
    ///
    /// Returns a [`SequenceError::NullArgument`] error if `value` is `None`.
    /// Use [`OptionalValue::of_nullable`] when absence is an expected input.
    pub fn of(value: Option<T>) -> SequenceResult<Self> {
        match value {
            Some(v) => Ok(Self::Present(v)),
            None => Err(SequenceError::NullArgument {
                message: "OptionalValue::of requires a present value".to_string(),
            }),
        }
    }

    /// Wrap a possibly-absent value. Never fails.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Absent,
        }
    }

    /// Returns `true` if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Invoke `consumer` with the contained value when present; do nothing
    /// when absent.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            consumer(value);
        }
    }

    /// Transform the contained value, leaving `Absent` as `Absent`.
    pub fn map<U, F>(self, transform: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => OptionalValue::Present(transform(value)),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Returns the contained value, or `default` when absent.
    ///
    /// `default` is evaluated at the call site whether or not it is used;
    /// use [`OptionalValue::or_else_get`] when computing the fallback is
    /// costly or has side effects.
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value, or invokes `supplier` when absent.
    ///
    /// `supplier` is not invoked when a value is present.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns the contained value, or the error produced by `error_factory`
    /// when absent.
    ///
    /// `error_factory` is not invoked when a value is present.
    pub fn or_else_throw<E, F>(self, error_factory: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error_factory()),
        }
    }

    /// Returns the contained value, or a
    /// [`SequenceError::AbsentValueAccessed`] error when absent.
    ///
    /// This is the no-fallback accessor; prefer [`OptionalValue::or_else`]
    /// or [`OptionalValue::or_else_get`] when a default exists.
    pub fn into_value(self) -> SequenceResult<T> {
        self.or_else_throw(|| SequenceError::AbsentValueAccessed {
            message: "no value present".to_string(),
        })
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        match value {
            OptionalValue::Present(v) => Some(v),
            OptionalValue::Absent => None,
        }
    }
}
