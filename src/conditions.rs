//! Typed condition verbs
//!
//! [`Conditions`] is the chain primitive shared by [`Validator`] and
//! [`ValidatorBuilder`]: add a condition on the current key, or invert the
//! next one. The verb traits layer sugar on top of it for numeric and
//! string keys; every verb is exactly one `validating` call with a
//! predicate from [`crate::predicate`].
//!
//! # Example
//!
//! ```rust
//! use keyed_validator::prelude::*;
//!
//! struct Zoo {
//!     city: String,
//!     visitors: i64,
//! }
//!
//! let zoo = ValidatorBuilder::with_string_key(|z: &Zoo| z.city.clone())
//!     .starts_with("Vie")
//!     .not()
//!     .is_blank()
//!     .long_key(|z: &Zoo| z.visitors)
//!     .in_range_inclusive(0, 10_000)
//!     .build();
//!
//! assert!(zoo.validate(&Zoo { city: "Vienna".into(), visitors: 10_000 }));
//! assert!(!zoo.validate(&Zoo { city: "Vienna".into(), visitors: 10_001 }));
//! ```

#![allow(clippy::wrong_self_convention)]

use crate::builder::ValidatorBuilder;
use crate::error::ValidatorError;
use crate::predicate::{self, Blank, CharLen, Not, NotEmpty, Predicate};
use crate::validator::Validator;

/// Chain primitive: conditions on a key of type `R`.
pub trait Conditions<R>: Sized {
    /// Add a condition on the current key.
    fn validating<P>(self, predicate: P) -> Self
    where
        P: Predicate<R> + 'static;

    /// Invert the next condition only.
    fn not(self) -> Self;
}

impl<T: 'static, R: 'static> Conditions<R> for Validator<T, R> {
    fn validating<P>(self, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        Validator::validating(self, predicate)
    }

    fn not(self) -> Self {
        Validator::not(self)
    }
}

impl<T: 'static, R: 'static> Conditions<R> for ValidatorBuilder<T, R> {
    fn validating<P>(self, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        ValidatorBuilder::validating(self, predicate)
    }

    fn not(self) -> Self {
        ValidatorBuilder::not(self)
    }
}

/// Comparison and range verbs for numeric keys.
///
/// Zero is `N::default()`.
pub trait NumberConditions<N>: Conditions<N>
where
    N: PartialOrd + Default + Copy + Send + Sync + 'static,
{
    /// `min <= x < max`
    fn in_range(self, min: N, max: N) -> Self {
        self.validating(predicate::in_range(min, max))
    }

    /// `min < x < max`
    fn in_range_exclusive(self, min: N, max: N) -> Self {
        self.validating(predicate::in_range_exclusive(min, max))
    }

    /// `min <= x <= max`
    fn in_range_inclusive(self, min: N, max: N) -> Self {
        self.validating(predicate::between(min, max))
    }

    /// `x > value`
    fn greater_than(self, value: N) -> Self {
        self.validating(predicate::gt(value))
    }

    /// `x >= value`
    fn greater_or_equal(self, value: N) -> Self {
        self.validating(predicate::ge(value))
    }

    /// `x < value`
    fn less_than(self, value: N) -> Self {
        self.validating(predicate::lt(value))
    }

    /// `x <= value`
    fn less_or_equal(self, value: N) -> Self {
        self.validating(predicate::le(value))
    }

    /// `x == value`
    fn equal(self, value: N) -> Self {
        self.validating(predicate::eq(value))
    }

    /// `x > 0`
    fn positive(self) -> Self {
        self.validating(predicate::positive())
    }

    /// `x < 0`
    fn negative(self) -> Self {
        self.validating(predicate::negative())
    }

    /// `x == 0`
    fn is_zero(self) -> Self {
        self.validating(predicate::zero())
    }
}

impl<N, C> NumberConditions<N> for C
where
    C: Conditions<N>,
    N: PartialOrd + Default + Copy + Send + Sync + 'static,
{
}

/// Content verbs for `String` keys.
pub trait StringConditions: Conditions<String> {
    /// Key starts with `prefix`.
    fn starts_with<S>(self, prefix: S) -> Self
    where
        S: AsRef<str> + Send + Sync + 'static,
    {
        self.validating(predicate::starts_with(prefix))
    }

    /// Key, after skipping `offset` chars, starts with `prefix`.
    fn starts_with_at<S>(self, prefix: S, offset: usize) -> Self
    where
        S: AsRef<str> + Send + Sync + 'static,
    {
        self.validating(predicate::starts_with_at(prefix, offset))
    }

    /// Key ends with `suffix`.
    fn ends_with<S>(self, suffix: S) -> Self
    where
        S: AsRef<str> + Send + Sync + 'static,
    {
        self.validating(predicate::ends_with(suffix))
    }

    /// Key contains `substring`.
    fn contains<S>(self, substring: S) -> Self
    where
        S: AsRef<str> + Send + Sync + 'static,
    {
        self.validating(predicate::contains(substring))
    }

    /// Key is the empty string.
    fn is_empty(self) -> Self {
        self.validating(Not(NotEmpty))
    }

    /// Key is not the empty string.
    fn is_not_empty(self) -> Self {
        self.validating(NotEmpty)
    }

    /// Key is empty or whitespace only.
    fn is_blank(self) -> Self {
        self.validating(Blank)
    }

    /// Key has at least one non-whitespace char.
    fn is_not_blank(self) -> Self {
        self.validating(Not(Blank))
    }

    /// Key has exactly `len` chars.
    fn has_length(self, len: usize) -> Self {
        self.validating(CharLen(len))
    }

    /// Key equals `expected`.
    fn equals<S>(self, expected: S) -> Self
    where
        S: AsRef<str> + Send + Sync + 'static,
    {
        self.validating(move |key: &String| key.as_str() == expected.as_ref())
    }

    /// Whole key matches the regular expression `pattern`.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidArgument`] if `pattern` does not compile; the
    /// chain is dropped in that case.
    fn matches_regex(self, pattern: &str) -> Result<Self, ValidatorError> {
        let matcher = predicate::matches(pattern)?;
        Ok(self.validating(matcher))
    }
}

impl<C: Conditions<String>> StringConditions for C {}
