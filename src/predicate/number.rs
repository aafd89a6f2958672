//! Number predicates
//!
//! Comparison and range predicates over any `PartialOrd` value. These are
//! the building blocks behind the numeric verbs in
//! [`NumberConditions`](crate::conditions::NumberConditions).

use super::combinators::Predicate;
use std::cmp::PartialOrd;

macro_rules! comparison {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, $bound:ident, |$value:ident, $threshold:ident| $body:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(pub T);

        impl<T: $bound + Send + Sync> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, $value: &T) -> bool {
                let $threshold = &self.0;
                $body
            }
        }

        #[doc = concat!("Create a [`", stringify!($name), "`] predicate.")]
        pub fn $ctor<T: $bound + Send + Sync>(value: T) -> $name<T> {
            $name(value)
        }
    };
}

comparison!(
    /// Predicate for equality: `x == value`.
    Eq, eq, PartialEq, |x, value| x == value
);
comparison!(
    /// Predicate for inequality: `x != value`.
    Ne, ne, PartialEq, |x, value| x != value
);
comparison!(
    /// Predicate for greater than: `x > value`.
    Gt, gt, PartialOrd, |x, value| x > value
);
comparison!(
    /// Predicate for greater than or equal: `x >= value`.
    Ge, ge, PartialOrd, |x, value| x >= value
);
comparison!(
    /// Predicate for less than: `x < value`.
    Lt, lt, PartialOrd, |x, value| x < value
);
comparison!(
    /// Predicate for less than or equal: `x <= value`.
    Le, le, PartialOrd, |x, value| x <= value
);

/// Which ends of a range are part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bounds {
    /// `min <= x < max`
    HalfOpen,
    /// `min < x < max`
    Exclusive,
    /// `min <= x <= max`
    Inclusive,
}

/// Predicate for a value lying in a range.
#[derive(Clone, Copy, Debug)]
pub struct InRange<T> {
    min: T,
    max: T,
    bounds: Bounds,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for InRange<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        match self.bounds {
            Bounds::HalfOpen => *value >= self.min && *value < self.max,
            Bounds::Exclusive => *value > self.min && *value < self.max,
            Bounds::Inclusive => *value >= self.min && *value <= self.max,
        }
    }
}

/// Create a predicate for `min <= x < max`.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let p = in_range(2, 5);
/// assert!(p.check(&2));
/// assert!(p.check(&4));
/// assert!(!p.check(&5));
/// ```
pub fn in_range<T: PartialOrd + Send + Sync>(min: T, max: T) -> InRange<T> {
    InRange {
        min,
        max,
        bounds: Bounds::HalfOpen,
    }
}

/// Create a predicate for `min < x < max`.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let p = in_range_exclusive(2, 5);
/// assert!(!p.check(&2));
/// assert!(p.check(&3));
/// assert!(!p.check(&5));
/// ```
pub fn in_range_exclusive<T: PartialOrd + Send + Sync>(min: T, max: T) -> InRange<T> {
    InRange {
        min,
        max,
        bounds: Bounds::Exclusive,
    }
}

/// Create a predicate for `min <= x <= max`.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let p = between(0, 100);
/// assert!(p.check(&0));
/// assert!(p.check(&100));
/// assert!(!p.check(&101));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> InRange<T> {
    InRange {
        min,
        max,
        bounds: Bounds::Inclusive,
    }
}

/// Create a predicate that checks if value is positive (greater than zero).
///
/// Zero is `T::default()`.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let p = positive::<i32>();
/// assert!(p.check(&1));
/// assert!(!p.check(&0));
/// ```
pub fn positive<T>() -> Gt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Gt(T::default())
}

/// Create a predicate that checks if value is negative (less than zero).
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let p = negative::<i32>();
/// assert!(p.check(&-1));
/// assert!(!p.check(&0));
/// ```
pub fn negative<T>() -> Lt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Lt(T::default())
}

/// Create a predicate that checks if value is zero.
pub fn zero<T>() -> Eq<T>
where
    T: PartialEq + Default + Send + Sync,
{
    Eq(T::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_comparisons() {
        assert!(eq(5).check(&5));
        assert!(!eq(5).check(&4));
        assert!(ne(5).check(&4));
        assert!(!ne(5).check(&5));
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(ge(5).check(&5));
        assert!(!ge(5).check(&4));
        assert!(lt(5).check(&4));
        assert!(!lt(5).check(&5));
        assert!(le(5).check(&5));
        assert!(!le(5).check(&6));
    }

    #[test]
    fn test_in_range_is_half_open() {
        let p = in_range(2, 5);
        for x in [2, 3, 4] {
            assert!(p.check(&x), "{x} should be accepted");
        }
        for x in [1, 5, 6] {
            assert!(!p.check(&x), "{x} should be rejected");
        }
    }

    #[test]
    fn test_in_range_exclusive() {
        let p = in_range_exclusive(2, 5);
        assert!(p.check(&3));
        assert!(p.check(&4));
        assert!(!p.check(&2));
        assert!(!p.check(&5));
    }

    #[test]
    fn test_between_is_inclusive() {
        let p = between(2, 5);
        for x in 2..=5 {
            assert!(p.check(&x));
        }
        assert!(!p.check(&1));
        assert!(!p.check(&6));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(positive::<i64>().check(&1));
        assert!(!positive::<i64>().check(&0));
        assert!(negative::<i64>().check(&-1));
        assert!(!negative::<i64>().check(&0));
        assert!(zero::<i64>().check(&0));
        assert!(!zero::<i64>().check(&3));
    }

    #[test]
    fn test_with_floats() {
        let p = between(0.0_f64, 1.0_f64);
        assert!(p.check(&0.0));
        assert!(p.check(&1.0));
        assert!(!p.check(&1.1));
        assert!(!in_range(0.0_f64, 1.0).check(&f64::NAN));
    }

    #[test]
    fn test_combined_number_predicates() {
        let p = gt(10).and(lt(20));
        assert!(p.check(&15));
        assert!(!p.check(&10));
        assert!(!p.check(&20));
    }
}
