//! Staged validator construction
//!
//! A [`ValidatorBuilder`] collects conditions under a current key and
//! produces an immutable [`Validator`] with [`build`](ValidatorBuilder::build).
//! Re-keying a builder folds everything it has collected into a single
//! condition of the new builder; the prior builder stays usable and
//! later changes to it are not seen by the new one.
//!
//! # Example
//!
//! ```rust
//! use keyed_validator::prelude::*;
//!
//! struct Animal {
//!     name: String,
//!     age: i32,
//! }
//!
//! let names = ValidatorBuilder::with_key(|a: &Animal| a.name.clone())
//!     .validating(|name: &String| !name.is_empty());
//!
//! let animals = names
//!     .int_key(|a: &Animal| a.age)
//!     .positive()
//!     .build();
//!
//! assert!(animals.validate(&Animal { name: "Joe".into(), age: 5 }));
//! assert!(!animals.validate(&Animal { name: "Joe".into(), age: 0 }));
//!
//! // The name builder is still usable on its own.
//! let any_age = names.build();
//! assert!(any_age.validate(&Animal { name: "Joe".into(), age: 0 }));
//! ```

use std::fmt;

use crate::predicate::{all, All, Not, Predicate, Shared};
use crate::projection::Projection;
use crate::validator::Validator;

/// Mutable accumulator of conditions over `T`, currently keyed on `R`.
///
/// Chaining calls move the builder and hand it back; the builder is the same
/// logical accumulator throughout. Not meant for concurrent mutation.
pub struct ValidatorBuilder<T, R> {
    projection: Projection<T, R>,
    conditions: Vec<Shared<T>>,
    negate_next: bool,
}

impl<T: 'static, R: 'static> ValidatorBuilder<T, R> {
    /// Start a builder with `extractor` as the key.
    pub fn with_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self::seeded(Projection::new(extractor), Vec::new())
    }

    fn seeded(projection: Projection<T, R>, conditions: Vec<Shared<T>>) -> Self {
        ValidatorBuilder {
            projection,
            conditions,
            negate_next: false,
        }
    }

    /// Register a condition on the current key.
    ///
    /// Consumes a pending [`not`](Self::not).
    pub fn validating<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        let lowered = if self.negate_next {
            Shared::new(self.projection.lower(Not(predicate)))
        } else {
            Shared::new(self.projection.lower(predicate))
        };
        self.conditions.push(lowered);
        self.negate_next = false;
        self
    }

    /// Invert the next registered condition only.
    pub fn not(mut self) -> Self {
        self.negate_next = true;
        self
    }

    /// Number of conditions collected directly by this builder. Everything
    /// inherited through [`key`](Self::key) counts as one.
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    fn snapshot(&self) -> All<T> {
        all(self.conditions.clone())
    }

    /// New builder keyed on `extractor`, seeded with "everything this
    /// builder has collected holds" as its first condition.
    pub fn key<U, F>(&self, extractor: F) -> ValidatorBuilder<T, U>
    where
        U: 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            conditions = self.conditions.len(),
            to = std::any::type_name::<U>(),
            "re-keying validator builder"
        );

        ValidatorBuilder::seeded(
            Projection::new(extractor),
            vec![Shared::new(self.snapshot())],
        )
    }

    /// [`key`](Self::key) onto an `i32`, enabling the numeric verbs.
    pub fn int_key<F>(&self, extractor: F) -> ValidatorBuilder<T, i32>
    where
        F: Fn(&T) -> i32 + Send + Sync + 'static,
    {
        self.key(extractor)
    }

    /// [`key`](Self::key) onto an `i64`, enabling the numeric verbs.
    pub fn long_key<F>(&self, extractor: F) -> ValidatorBuilder<T, i64>
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        self.key(extractor)
    }

    /// [`key`](Self::key) onto an `f64`, enabling the numeric verbs.
    pub fn double_key<F>(&self, extractor: F) -> ValidatorBuilder<T, f64>
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        self.key(extractor)
    }

    /// [`key`](Self::key) onto a `String`, enabling the string verbs.
    pub fn string_key<F>(&self, extractor: F) -> ValidatorBuilder<T, String>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.key(extractor)
    }

    /// Freeze the collected conditions into a [`Validator`].
    ///
    /// The validator is a snapshot: registering more conditions on this
    /// builder afterwards does not change it. A pending `not` is dropped.
    pub fn build(&self) -> Validator<T, R> {
        #[cfg(feature = "tracing")]
        tracing::trace!(conditions = self.conditions.len(), "building validator");

        Validator::from_parts(self.projection.clone(), self.conditions.clone())
    }
}

impl<T: 'static> ValidatorBuilder<T, i32> {
    /// Start a builder on an `i32` key.
    pub fn with_int_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> i32 + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T: 'static> ValidatorBuilder<T, i64> {
    /// Start a builder on an `i64` key.
    pub fn with_long_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T: 'static> ValidatorBuilder<T, f64> {
    /// Start a builder on an `f64` key.
    pub fn with_double_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T: 'static> ValidatorBuilder<T, String> {
    /// Start a builder on a `String` key.
    pub fn with_string_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::with_key(extractor)
    }
}

impl<T, R> fmt::Debug for ValidatorBuilder<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("projection", &self.projection)
            .field("conditions", &self.conditions.len())
            .field("negate_next", &self.negate_next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::NumberConditions;
    use crate::validator::Validate;

    #[derive(Debug, Clone)]
    struct Animal {
        name: String,
        age: i32,
        zoo: String,
    }

    fn animal(name: &str, age: i32, zoo: &str) -> Animal {
        Animal {
            name: name.to_string(),
            age,
            zoo: zoo.to_string(),
        }
    }

    #[test]
    fn empty_builder_accepts_everything() {
        let builder = ValidatorBuilder::with_key(|a: &Animal| a.age);
        assert_eq!(builder.condition_count(), 0);
        assert!(builder.build().validate(&animal("", -1, "")));
    }

    #[test]
    fn build_conjoins_across_keys() {
        let v = ValidatorBuilder::with_key(|a: &Animal| a.age)
            .validating(|age: &i32| *age > 3)
            .key(|a: &Animal| a.zoo.clone())
            .validating(|zoo: &String| zoo == "Vienna")
            .build();

        assert!(v.validate(&animal("Joe", 5, "Vienna")));
        assert!(!v.validate(&animal("Joe", 2, "Vienna")));
        assert!(!v.validate(&animal("Joe", 5, "Graz")));
    }

    #[test]
    fn key_folds_prior_conditions_into_one() {
        let names = ValidatorBuilder::with_key(|a: &Animal| a.name.clone())
            .validating(|n: &String| !n.is_empty())
            .validating(|n: &String| n.len() < 10);
        assert_eq!(names.condition_count(), 2);

        let ages = names.int_key(|a: &Animal| a.age);
        assert_eq!(ages.condition_count(), 1);
    }

    #[test]
    fn prior_builder_stays_independent() {
        let ages = ValidatorBuilder::with_key(|a: &Animal| a.age).validating(|age: &i32| *age > 0);
        let zoos = ages.string_key(|a: &Animal| a.zoo.clone());

        let stricter = ages.validating(|age: &i32| *age > 100);
        let zoo_validator = zoos.build();

        assert!(zoo_validator.validate(&animal("Joe", 5, "Vienna")));
        assert!(!stricter.build().validate(&animal("Joe", 5, "Vienna")));
    }

    #[test]
    fn built_validator_is_a_snapshot() {
        let builder = ValidatorBuilder::with_key(|a: &Animal| a.age).validating(|age: &i32| *age > 0);
        let first = builder.build();
        let second = builder.validating(|age: &i32| *age < 10).build();

        assert!(first.validate(&animal("Joe", 50, "Vienna")));
        assert!(!second.validate(&animal("Joe", 50, "Vienna")));
    }

    #[test]
    fn negation_applies_to_one_condition() {
        let v = ValidatorBuilder::with_int_key(|a: &Animal| a.age)
            .not()
            .not()
            .greater_than(10)
            .validating(|age: &i32| *age >= 0)
            .build();

        assert!(v.validate(&animal("Joe", 5, "")));
        assert!(!v.validate(&animal("Joe", 11, "")));
        assert!(!v.validate(&animal("Joe", -1, "")));
    }

    #[test]
    fn built_validator_evaluates_concurrently() {
        let v = ValidatorBuilder::with_key(|x: &i32| *x)
            .validating(|x: &i32| x % 2 == 0)
            .build();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let v = &v;
                    scope.spawn(move || (0..100).filter(|x| v.validate(&(x + i))).count())
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 50);
            }
        });
    }
}
