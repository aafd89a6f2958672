//! Error types for validator construction and evaluation
//!
//! Every failure the crate itself raises is a [`ValidatorError`]. Errors
//! produced by a caller's factory in
//! [`Validate::valid_or_else`](crate::Validate::valid_or_else) are passed
//! through untouched and never wrapped.

use std::fmt::Debug;

/// Error raised by validators, builders and mapped validators.
///
/// # Examples
///
/// ```rust
/// use keyed_validator::{Validate, Validator, ValidatorError};
///
/// let positive = Validator::with_key(|x: &i32| *x).validating(|x: &i32| *x > 0);
///
/// match positive.valid_or_err(-3) {
///     Err(ValidatorError::InvalidValue { value }) => assert_eq!(value, "-3"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// An argument handed to a composition call cannot be used.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A value failed validation.
    #[error("value is invalid: {value}")]
    InvalidValue {
        /// The rejected value, rendered with `Debug`.
        value: String,
    },

    /// A label was looked up on a builder that never registered it.
    #[error("label {label} is not registered on this builder")]
    MissingLabel {
        /// The missing label, rendered with `Debug`.
        label: String,
    },
}

impl ValidatorError {
    /// Build an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        ValidatorError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Build an [`InvalidValue`](Self::InvalidValue) error from the rejected value.
    pub fn invalid_value<T: Debug + ?Sized>(value: &T) -> Self {
        ValidatorError::InvalidValue {
            value: format!("{value:?}"),
        }
    }

    /// Build a [`MissingLabel`](Self::MissingLabel) error.
    pub fn missing_label<K: Debug + ?Sized>(label: &K) -> Self {
        ValidatorError::MissingLabel {
            label: format!("{label:?}"),
        }
    }
}
