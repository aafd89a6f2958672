//! Labeled validators
//!
//! A [`MappedValidatorBuilder`] registers each condition under a label.
//! After evaluation the built [`MappedValidator`] can report which labels
//! passed and which failed, not only the overall result. Re-keying keeps
//! every label individually visible instead of folding them into one
//! condition.
//!
//! # Example
//!
//! ```rust
//! use keyed_validator::prelude::*;
//!
//! struct Animal {
//!     age: i32,
//!     zoo: String,
//! }
//!
//! let validator = MappedValidatorBuilder::with_key(|a: &Animal| a.age)
//!     .validating("age", |age: &i32| *age > 3)
//!     .key(|a: &Animal| a.zoo.clone())
//!     .validating("zoo", |zoo: &String| zoo == "Vienna")
//!     .build();
//!
//! assert!(!validator.validate(&Animal { age: 2, zoo: "Vienna".into() }));
//! assert_eq!(validator.last_invalid_labels().into_iter().collect::<Vec<_>>(), vec!["age"]);
//! assert_eq!(validator.last_valid_labels().into_iter().collect::<Vec<_>>(), vec!["zoo"]);
//! ```

mod outcomes;
#[cfg(feature = "serde")]
mod serde_impl;

use indexmap::{IndexMap, IndexSet};
use parking_lot::Mutex;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;

use crate::error::ValidatorError;
use crate::predicate::{Predicate, Shared};
use crate::projection::Projection;
use crate::validator::Validate;

pub use outcomes::Outcomes;

/// Labeled conditions of one builder in a chain, already lowered onto `T`
/// through that builder's key.
struct Stage<T, K> {
    conditions: IndexMap<K, Shared<T>>,
}

impl<T, K: Clone> Clone for Stage<T, K> {
    fn clone(&self) -> Self {
        Stage {
            conditions: self.conditions.clone(),
        }
    }
}

/// Accumulator of labeled conditions over `T`, currently keyed on `R`.
///
/// Labels are unique per builder: registering a label again replaces its
/// condition. Not meant for concurrent mutation.
pub struct MappedValidatorBuilder<T, K, R> {
    projection: Projection<T, R>,
    labeled: IndexMap<K, Shared<R>>,
    ancestors: Vec<Stage<T, K>>,
}

impl<T, K, R> MappedValidatorBuilder<T, K, R>
where
    T: 'static,
    K: Hash + Eq + Clone,
    R: 'static,
{
    /// Start a builder with `extractor` as the key.
    pub fn with_key<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        MappedValidatorBuilder {
            projection: Projection::new(extractor),
            labeled: IndexMap::new(),
            ancestors: Vec::new(),
        }
    }

    /// Register `predicate` on the current key under `label`.
    ///
    /// Re-registering a label on the same builder replaces the earlier
    /// condition and keeps the label's position.
    pub fn validating<P>(mut self, label: K, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        self.labeled.insert(label, Shared::new(predicate));
        self
    }

    /// Labels registered directly on this builder, in registration order.
    /// Labels of the builders this one was re-keyed from are not included.
    pub fn labels(&self) -> impl Iterator<Item = &K> + '_ {
        self.labeled.keys()
    }

    /// Check one of this builder's own labels against `value`.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::MissingLabel`] if `label` is not registered directly
    /// on this builder.
    pub fn test_label(&self, label: &K, value: &T) -> Result<bool, ValidatorError>
    where
        K: Debug,
    {
        let predicate = self
            .labeled
            .get(label)
            .ok_or_else(|| ValidatorError::missing_label(label))?;
        Ok(predicate.check(&self.projection.apply(value)))
    }

    fn own_stage(&self) -> Stage<T, K> {
        let conditions = self
            .labeled
            .iter()
            .map(|(label, predicate)| {
                (
                    label.clone(),
                    Shared::new(self.projection.lower(predicate.clone())),
                )
            })
            .collect();
        Stage { conditions }
    }

    fn stages(&self) -> Vec<Stage<T, K>> {
        let mut stages = self.ancestors.clone();
        stages.push(self.own_stage());
        stages
    }

    /// New builder keyed on `extractor` that carries this builder's labels
    /// (and those of its own ancestors) forward.
    ///
    /// The carried labels are a snapshot; registering more on this builder
    /// afterwards does not affect the new one.
    ///
    /// A label registered again on the new builder shadows the carried one:
    /// after evaluation only the newer outcome is kept, so a failure of the
    /// carried condition no longer makes the value invalid.
    ///
    /// ```rust
    /// use keyed_validator::prelude::*;
    ///
    /// let v = MappedValidatorBuilder::with_key(|x: &i32| *x)
    ///     .validating("check", |x: &i32| *x > 100)
    ///     .key(|x: &i32| *x % 2)
    ///     .validating("check", |parity: &i32| *parity == 0)
    ///     .build();
    ///
    /// assert!(v.validate(&4));
    /// ```
    pub fn key<U, F>(&self, extractor: F) -> MappedValidatorBuilder<T, K, U>
    where
        U: 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            labels = self.labeled.len(),
            depth = self.ancestors.len() + 1,
            "re-keying mapped validator builder"
        );

        MappedValidatorBuilder {
            projection: Projection::new(extractor),
            labeled: IndexMap::new(),
            ancestors: self.stages(),
        }
    }

    /// Freeze every label of the chain into a [`MappedValidator`].
    pub fn build(&self) -> MappedValidator<T, K> {
        let stages = self.stages();

        #[cfg(feature = "tracing")]
        tracing::trace!(stages = stages.len(), "building mapped validator");

        MappedValidator {
            stages: stages.into(),
            last: Mutex::new(Outcomes::new()),
        }
    }
}

impl<T, K, R> Debug for MappedValidatorBuilder<T, K, R>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedValidatorBuilder")
            .field("projection", &self.projection)
            .field("labels", &self.labeled.keys().collect::<Vec<_>>())
            .field("ancestors", &self.ancestors.len())
            .finish()
    }
}

/// Built labeled validator.
///
/// [`validate`](Validate::validate) records the outcome of every label for
/// the value it was given; the `last_*` accessors read that record until the
/// next call replaces it. Calling `validate` from several threads on one
/// instance and then reading `last_*` is not atomic; use
/// [`evaluate`](Self::evaluate) to get a record for exactly one call.
pub struct MappedValidator<T, K: Hash + Eq> {
    stages: Arc<[Stage<T, K>]>,
    last: Mutex<Outcomes<K>>,
}

impl<T, K> MappedValidator<T, K>
where
    K: Hash + Eq + Clone,
{
    /// Evaluate every label against `value` without touching the last
    /// evaluation record.
    ///
    /// Labels are checked stage by stage in chain order. When a label
    /// appears in more than one stage, the later stage's outcome wins.
    pub fn evaluate(&self, value: &T) -> Outcomes<K> {
        let mut outcomes = Outcomes::new();
        for stage in self.stages.iter() {
            for (label, predicate) in &stage.conditions {
                outcomes.record(label.clone(), predicate.check(value));
            }
        }
        outcomes
    }

    /// Outcomes recorded by the most recent `validate` call. Empty before
    /// the first call.
    pub fn last_outcomes(&self) -> Outcomes<K> {
        self.last.lock().clone()
    }

    /// Labels that passed in the most recent `validate` call.
    pub fn last_valid_labels(&self) -> IndexSet<K> {
        self.last.lock().valid_labels()
    }

    /// Labels that failed in the most recent `validate` call.
    pub fn last_invalid_labels(&self) -> IndexSet<K> {
        self.last.lock().invalid_labels()
    }

    /// Every label of the whole chain, whether or not anything was evaluated.
    pub fn all_labels(&self) -> IndexSet<K> {
        self.stages
            .iter()
            .flat_map(|stage| stage.conditions.keys().cloned())
            .collect()
    }
}

impl<T, K> Validate<T> for MappedValidator<T, K>
where
    K: Hash + Eq + Clone,
{
    fn validate(&self, value: &T) -> bool {
        let outcomes = self.evaluate(value);
        let valid = outcomes.is_valid();

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                labels = outcomes.len(),
                valid,
                "evaluated mapped validator"
            );
            if !valid {
                tracing::debug!(
                    failed = outcomes.iter().filter(|(_, passed)| !passed).count(),
                    "mapped validation failed"
                );
            }
        }

        *self.last.lock() = outcomes;
        valid
    }
}

impl<T, K> Clone for MappedValidator<T, K>
where
    K: Hash + Eq + Clone,
{
    fn clone(&self) -> Self {
        MappedValidator {
            stages: Arc::clone(&self.stages),
            last: Mutex::new(self.last_outcomes()),
        }
    }
}

impl<T, K> Debug for MappedValidator<T, K>
where
    K: Hash + Eq + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedValidator")
            .field("stages", &self.stages.len())
            .field("last", &*self.last.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Animal {
        age: i32,
        zoo: String,
    }

    fn animal(age: i32, zoo: &str) -> Animal {
        Animal {
            age,
            zoo: zoo.to_string(),
        }
    }

    fn set(labels: &[&'static str]) -> IndexSet<&'static str> {
        labels.iter().copied().collect()
    }

    fn ages() -> MappedValidatorBuilder<Animal, &'static str, i32> {
        MappedValidatorBuilder::with_key(|a: &Animal| a.age).validating("age", |age: &i32| *age > 3)
    }

    fn zoo_validator() -> MappedValidator<Animal, &'static str> {
        ages()
            .key(|a: &Animal| a.zoo.clone())
            .validating("zoo", |zoo: &String| zoo == "Vienna")
            .build()
    }

    #[test]
    fn all_labels_pass() {
        let v = zoo_validator();
        assert!(v.validate(&animal(5, "Vienna")));
        assert_eq!(v.last_valid_labels(), set(&["age", "zoo"]));
        assert_eq!(v.last_invalid_labels(), set(&[]));
        assert_eq!(v.all_labels(), set(&["age", "zoo"]));
    }

    #[test]
    fn failing_ancestor_label_is_reported() {
        let v = zoo_validator();
        assert!(!v.validate(&animal(2, "Vienna")));
        assert_eq!(v.last_invalid_labels(), set(&["age"]));
        assert_eq!(v.last_valid_labels(), set(&["zoo"]));
    }

    #[test]
    fn last_record_is_replaced_not_merged() {
        let v = zoo_validator();
        v.validate(&animal(2, "Graz"));
        assert_eq!(v.last_invalid_labels(), set(&["age", "zoo"]));

        v.validate(&animal(5, "Vienna"));
        assert_eq!(v.last_invalid_labels(), set(&[]));
        assert_eq!(v.last_valid_labels(), set(&["age", "zoo"]));
    }

    #[test]
    fn nothing_recorded_before_first_validate() {
        let v = zoo_validator();
        assert!(v.last_valid_labels().is_empty());
        assert!(v.last_invalid_labels().is_empty());
        assert!(v.last_outcomes().is_empty());
        assert_eq!(v.all_labels().len(), 2);
    }

    #[test]
    fn evaluate_leaves_last_record_alone() {
        let v = zoo_validator();
        v.validate(&animal(5, "Vienna"));
        let outcomes = v.evaluate(&animal(2, "Graz"));

        assert!(!outcomes.is_valid());
        assert_eq!(v.last_invalid_labels(), set(&[]));
    }

    #[test]
    fn no_labels_is_vacuously_valid() {
        let v = MappedValidatorBuilder::<Animal, &str, i32>::with_key(|a: &Animal| a.age).build();
        assert!(v.validate(&animal(-1, "")));
        assert!(v.all_labels().is_empty());
    }

    #[test]
    fn re_registering_a_label_replaces_it() {
        let v = MappedValidatorBuilder::with_key(|a: &Animal| a.age)
            .validating("age", |age: &i32| *age > 100)
            .validating("age", |age: &i32| *age > 3)
            .build();

        assert!(v.validate(&animal(5, "")));
        assert_eq!(v.all_labels(), set(&["age"]));
    }

    #[test]
    fn labels_are_builder_local() {
        let zoos = ages()
            .key(|a: &Animal| a.zoo.clone())
            .validating("zoo", |zoo: &String| !zoo.is_empty());

        assert_eq!(zoos.labels().copied().collect::<Vec<_>>(), vec!["zoo"]);
    }

    #[test]
    fn test_label_uses_the_builders_own_key() {
        let builder = ages();
        assert_eq!(builder.test_label(&"age", &animal(5, "")), Ok(true));
        assert_eq!(builder.test_label(&"age", &animal(1, "")), Ok(false));
    }

    #[test]
    fn test_label_rejects_unknown_labels() {
        let zoos = ages().key(|a: &Animal| a.zoo.clone());
        for value in [animal(5, "Vienna"), animal(-5, "")] {
            let err = zoos.test_label(&"age", &value).unwrap_err();
            assert_eq!(
                err,
                ValidatorError::MissingLabel {
                    label: "\"age\"".to_string()
                }
            );
        }
    }

    #[test]
    fn derived_builder_does_not_see_later_ancestor_labels() {
        let base = ages();
        let derived = base.key(|a: &Animal| a.zoo.clone());
        let _extended = base.validating("old", |age: &i32| *age > 50);

        assert_eq!(derived.build().all_labels(), set(&["age"]));
    }

    #[test]
    fn later_stage_wins_for_shared_labels() {
        let v = ages()
            .key(|a: &Animal| a.zoo.clone())
            .validating("age", |zoo: &String| zoo == "Vienna")
            .build();

        assert!(v.validate(&animal(1, "Vienna")));
        assert_eq!(v.all_labels(), set(&["age"]));
    }

    #[test]
    fn three_stage_chain_keeps_order() {
        let v = ages()
            .key(|a: &Animal| a.zoo.clone())
            .validating("zoo", |zoo: &String| zoo.starts_with('V'))
            .key(|a: &Animal| a.zoo.len())
            .validating("zoo_len", |len: &usize| *len <= 6)
            .build();

        assert!(!v.validate(&animal(5, "Villach")));
        assert_eq!(
            v.last_outcomes().iter().collect::<Vec<_>>(),
            vec![(&"age", true), (&"zoo", true), (&"zoo_len", false)]
        );
    }

    #[test]
    fn clone_copies_last_record() {
        let v = zoo_validator();
        v.validate(&animal(2, "Vienna"));
        let copy = v.clone();
        assert_eq!(copy.last_invalid_labels(), set(&["age"]));

        copy.validate(&animal(5, "Vienna"));
        assert_eq!(v.last_invalid_labels(), set(&["age"]));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn predicate_panics_propagate() {
        let v = MappedValidatorBuilder::with_key(|a: &Animal| a.age)
            .validating("boom", |_: &i32| -> bool { panic!("boom") })
            .build();
        v.validate(&animal(1, ""));
    }
}
