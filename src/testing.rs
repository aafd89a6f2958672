//! Testing utilities for validators
//!
//! Assertion macros that print the offending value or label on failure, plus
//! property-based testing support for [`Outcomes`](crate::Outcomes) behind
//! the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use keyed_validator::prelude::*;
//! use keyed_validator::{assert_invalid, assert_labels, assert_valid};
//!
//! let positive = Validator::with_int_key(|x: &i32| *x).positive();
//! assert_valid!(positive, 3);
//! assert_invalid!(positive, -3);
//!
//! let mapped = MappedValidatorBuilder::with_key(|x: &i32| *x)
//!     .validating("positive", |x: &i32| *x > 0)
//!     .validating("even", |x: &i32| x % 2 == 0)
//!     .build();
//!
//! assert_labels!(mapped.evaluate(&3), valid: ["positive"], invalid: ["even"]);
//! ```

/// Assert that a validator accepts a value.
///
/// Panics with the value's `Debug` rendering otherwise.
///
/// # Example
///
/// ```rust
/// use keyed_validator::{assert_valid, Validator};
///
/// let v = Validator::with_key(|s: &String| s.len()).validating(|len: &usize| *len > 0);
/// assert_valid!(v, "Vienna".to_string());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, $value:expr) => {{
        let value = $value;
        if !$crate::Validate::validate(&$validator, &value) {
            panic!("Expected valid, got invalid: {:?}", value);
        }
    }};
}

/// Assert that a validator rejects a value.
///
/// Panics with the value's `Debug` rendering otherwise.
///
/// # Example
///
/// ```rust
/// use keyed_validator::{assert_invalid, Validator};
///
/// let v = Validator::with_key(|s: &String| s.len()).validating(|len: &usize| *len > 0);
/// assert_invalid!(v, String::new());
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, $value:expr) => {{
        let value = $value;
        if $crate::Validate::validate(&$validator, &value) {
            panic!("Expected invalid, got valid: {:?}", value);
        }
    }};
}

/// Assert the exact valid and invalid label sets of an
/// [`Outcomes`](crate::Outcomes) record. Order is ignored.
///
/// # Example
///
/// ```rust
/// use keyed_validator::{assert_labels, Outcomes};
///
/// let outcomes: Outcomes<&str> = [("age", true), ("zoo", false)].into_iter().collect();
/// assert_labels!(outcomes, valid: ["age"], invalid: ["zoo"]);
/// ```
#[macro_export]
macro_rules! assert_labels {
    ($outcomes:expr, valid: [$($valid:expr),* $(,)?], invalid: [$($invalid:expr),* $(,)?] $(,)?) => {
        $crate::testing::check_labels(&$outcomes, &[$($valid),*], &[$($invalid),*])
    };
}

/// Backing function of [`assert_labels!`](crate::assert_labels).
#[doc(hidden)]
#[track_caller]
pub fn check_labels<K>(outcomes: &crate::Outcomes<K>, valid: &[K], invalid: &[K])
where
    K: std::hash::Hash + Eq + Clone + std::fmt::Debug,
{
    let expected_valid: indexmap::IndexSet<K> = valid.iter().cloned().collect();
    let expected_invalid: indexmap::IndexSet<K> = invalid.iter().cloned().collect();
    let actual_valid = outcomes.valid_labels();
    let actual_invalid = outcomes.invalid_labels();

    if actual_valid != expected_valid || actual_invalid != expected_invalid {
        panic!(
            "Label mismatch: expected valid {:?} invalid {:?}, got valid {:?} invalid {:?}",
            expected_valid, expected_invalid, actual_valid, actual_invalid
        );
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<K> Arbitrary for crate::Outcomes<K>
where
    K: Arbitrary + std::hash::Hash + Eq + 'static,
{
    type Parameters = K::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec((any_with::<K>(args), any::<bool>()), 0..8)
            .prop_map(|pairs| pairs.into_iter().collect())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{MappedValidatorBuilder, Outcomes, Validator};

    fn lengths() -> Validator<String, usize> {
        Validator::with_key(|s: &String| s.len()).validating(|len: &usize| *len > 2)
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(lengths(), "Joe".to_string());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(lengths(), "Jo".to_string());
    }

    #[test]
    fn assert_labels_macro() {
        let v = MappedValidatorBuilder::with_key(|x: &i32| *x)
            .validating("small", |x: &i32| *x < 10)
            .validating("odd", |x: &i32| x % 2 == 1)
            .validating("positive", |x: &i32| *x > 0)
            .build();
        assert_labels!(v.evaluate(&4), valid: ["positive", "small"], invalid: ["odd"]);
    }

    #[test]
    fn assert_labels_accepts_empty_lists() {
        let outcomes = Outcomes::<&str>::new();
        assert_labels!(outcomes, valid: [], invalid: []);
    }

    #[test]
    #[should_panic(expected = "Expected valid, got invalid")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(lengths(), "Jo".to_string());
    }

    #[test]
    #[should_panic(expected = "Expected invalid, got valid")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(lengths(), "Joe".to_string());
    }

    #[test]
    #[should_panic(expected = "Label mismatch")]
    fn assert_labels_panics_on_mismatch() {
        let outcomes: Outcomes<&str> = [("age", false)].into_iter().collect();
        assert_labels!(outcomes, valid: ["age"], invalid: []);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_outcomes_partition_their_labels(outcomes in any::<Outcomes<u8>>()) {
                let valid = outcomes.valid_labels();
                let invalid = outcomes.invalid_labels();
                prop_assert!(valid.is_disjoint(&invalid));
                prop_assert_eq!(valid.len() + invalid.len(), outcomes.len());
                prop_assert_eq!(outcomes.is_valid(), invalid.is_empty());
            }
        }
    }
}
