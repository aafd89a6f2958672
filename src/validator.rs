//! Chained key validators
//!
//! A [`Validator`] pairs the current key extractor with the flat list of
//! every condition added so far. Conditions are always checked against the
//! key the validator held when they were added; re-keying with
//! [`Validator::key`] keeps all prior conditions and points subsequent ones
//! at a new key.
//!
//! # Example
//!
//! ```rust
//! use keyed_validator::prelude::*;
//!
//! #[derive(Debug)]
//! struct Animal {
//!     name: String,
//!     age: i32,
//! }
//!
//! let validator = Validator::with_key(|a: &Animal| a.name.clone())
//!     .not()
//!     .validating(|name: &String| name.is_empty())
//!     .int_key(|a: &Animal| a.age)
//!     .positive();
//!
//! assert!(validator.validate(&Animal { name: "Joe".into(), age: 5 }));
//! assert!(!validator.validate(&Animal { name: String::new(), age: 5 }));
//! assert!(!validator.validate(&Animal { name: "Joe".into(), age: -5 }));
//! ```

use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::error::ValidatorError;
use crate::predicate::{Not, Predicate, Shared};
use crate::projection::Projection;

/// Terminal operations shared by every evaluator in the crate.
///
/// Only [`validate`](Validate::validate) is required; the rest are derived
/// from it.
pub trait Validate<T> {
    /// Whether `value` satisfies every condition.
    fn validate(&self, value: &T) -> bool;

    /// Whether every item is valid. Vacuously true for no items.
    ///
    /// Accepts owned values or references.
    fn all_valid<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        items.into_iter().all(|item| self.validate(item.borrow()))
    }

    /// Keep only the valid items, in order.
    fn filter_valid<I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().filter(|item| self.validate(item)).collect()
    }

    /// `Some(value)` if valid, otherwise `None`.
    fn valid(&self, value: T) -> Option<T> {
        if self.validate(&value) {
            Some(value)
        } else {
            None
        }
    }

    /// `value` if valid, otherwise `fallback`. The fallback is not validated.
    fn valid_or(&self, value: T, fallback: T) -> T {
        if self.validate(&value) {
            value
        } else {
            fallback
        }
    }

    /// `value` if valid, otherwise [`ValidatorError::InvalidValue`] carrying
    /// the value's `Debug` rendering.
    fn valid_or_err(&self, value: T) -> Result<T, ValidatorError>
    where
        T: Debug,
    {
        if self.validate(&value) {
            return Ok(value);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(value = ?value, "value rejected by validator");

        Err(ValidatorError::invalid_value(&value))
    }

    /// `value` if valid, otherwise the error built by `error`.
    ///
    /// `error` is only called when validation fails.
    fn valid_or_else<E, F>(&self, value: T, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        if self.validate(&value) {
            Ok(value)
        } else {
            Err(error())
        }
    }
}

/// Immutable validator over `T` whose next conditions apply to the key `R`.
///
/// Every chaining call consumes the validator and returns a new one, so a
/// validator held elsewhere never observes later additions. Clone it to
/// branch a chain.
pub struct Validator<T, R> {
    projection: Projection<T, R>,
    conditions: Arc<Vec<Shared<T>>>,
    negate_next: bool,
}

impl<T: 'static, R: 'static> Validator<T, R> {
    /// Start a chain with `extractor` as the key. Accepts every value until a
    /// condition is added.
    pub fn with_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self::from_parts(Projection::new(extractor), Vec::new())
    }

    pub(crate) fn from_parts(projection: Projection<T, R>, conditions: Vec<Shared<T>>) -> Self {
        Validator {
            projection,
            conditions: Arc::new(conditions),
            negate_next: false,
        }
    }

    /// Add a condition on the current key.
    ///
    /// If [`not`](Self::not) was called since the last condition, this one is
    /// inverted and the negation is used up.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_validator::prelude::*;
    ///
    /// let v = Validator::with_key(|s: &String| s.len())
    ///     .validating(|len: &usize| *len > 2)
    ///     .validating(|len: &usize| *len < 6);
    ///
    /// assert!(v.validate(&"abc".to_string()));
    /// assert!(!v.validate(&"ab".to_string()));
    /// assert!(!v.validate(&"abcdef".to_string()));
    /// ```
    pub fn validating<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        let lowered = if self.negate_next {
            Shared::new(self.projection.lower(Not(predicate)))
        } else {
            Shared::new(self.projection.lower(predicate))
        };
        // Copies the list only when another clone still shares it.
        Arc::make_mut(&mut self.conditions).push(lowered);
        self.negate_next = false;
        self
    }

    /// Invert the next condition only.
    ///
    /// Calling it again before the next condition keeps a single negation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_validator::prelude::*;
    ///
    /// let v = Validator::with_key(|x: &i32| *x)
    ///     .not()
    ///     .not()
    ///     .validating(|x: &i32| *x > 10)
    ///     .validating(|x: &i32| *x > 0);
    ///
    /// assert!(v.validate(&5));
    /// assert!(!v.validate(&50));
    /// assert!(!v.validate(&-1));
    /// ```
    pub fn not(mut self) -> Self {
        self.negate_next = true;
        self
    }

    /// Whether the next condition will be inverted.
    pub fn negates_next(&self) -> bool {
        self.negate_next
    }

    /// Switch to a new key, keeping every condition added so far. Earlier
    /// conditions still read their own key. A pending [`not`](Self::not) does not carry over.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_validator::prelude::*;
    ///
    /// let v = Validator::with_key(|p: &(i32, &'static str)| p.0)
    ///     .validating(|x: &i32| *x > 3)
    ///     .key(|p: &(i32, &'static str)| p.1)
    ///     .validating(|s: &&str| *s == "Vienna");
    ///
    /// assert!(v.validate(&(5, "Vienna")));
    /// assert!(!v.validate(&(2, "Vienna")));
    /// assert!(!v.validate(&(5, "Graz")));
    /// ```
    pub fn key<U, F>(self, extractor: F) -> Validator<T, U>
    where
        U: 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = std::any::type_name::<R>(),
            to = std::any::type_name::<U>(),
            "re-keying validator"
        );

        Validator {
            projection: Projection::new(extractor),
            conditions: self.conditions,
            negate_next: false,
        }
    }

    /// [`key`](Self::key) onto an `i32`, enabling the numeric verbs.
    pub fn int_key<F>(self, extractor: F) -> Validator<T, i32>
    where
        F: Fn(&T) -> i32 + Send + Sync + 'static,
    {
        self.key(extractor)
    }

    /// [`key`](Self::key) onto an `i64`, enabling the numeric verbs.
    pub fn long_key<F>(self, extractor: F) -> Validator<T, i64>
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        self.key(extractor)
    }

    /// [`key`](Self::key) onto an `f64`, enabling the numeric verbs.
    pub fn double_key<F>(self, extractor: F) -> Validator<T, f64>
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        self.key(extractor)
    }

    /// [`key`](Self::key) onto a `String`, enabling the string verbs.
    pub fn string_key<F>(self, extractor: F) -> Validator<T, String>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.key(extractor)
    }
}

impl<T: 'static> Validator<T, i32> {
    /// Start a chain on an `i32` key.
    pub fn with_int_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> i32 + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T: 'static> Validator<T, i64> {
    /// Start a chain on an `i64` key.
    pub fn with_long_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T: 'static> Validator<T, f64> {
    /// Start a chain on an `f64` key.
    pub fn with_double_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T: 'static> Validator<T, String> {
    /// Start a chain on a `String` key.
    pub fn with_string_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T, R> Validate<T> for Validator<T, R> {
    #[inline]
    fn validate(&self, value: &T) -> bool {
        self.conditions.iter().all(|condition| condition.check(value))
    }
}

impl<T, R> Clone for Validator<T, R> {
    fn clone(&self) -> Self {
        Validator {
            projection: self.projection.clone(),
            conditions: Arc::clone(&self.conditions),
            negate_next: self.negate_next,
        }
    }
}

impl<T, R> fmt::Debug for Validator<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("projection", &self.projection)
            .field("conditions", &self.conditions.len())
            .field("negate_next", &self.negate_next)
            .finish()
    }
}
