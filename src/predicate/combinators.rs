//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the logical
//! combinators for composing predicates, and the projection combinator that
//! lowers a predicate over a derived value into a predicate over its source.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
/// - `then_validating`: Also check a predicate against a projection of the value
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let is_valid_age = ge(0).and(le(150));
/// assert!(is_valid_age.check(&25));
/// assert!(!is_valid_age.check(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let p = gt(0).and(lt(100)).not();
/// assert!(p.check(&-5));
/// assert!(!p.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// The right side is not evaluated when the left side fails.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Combine with a predicate over a projection of the value.
    ///
    /// The result holds when `self` holds and `predicate(extractor(value))`
    /// holds. Neither `extractor` nor `predicate` runs when `self` already
    /// failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_validator::predicate::*;
    ///
    /// struct Animal { name: String, age: u32 }
    ///
    /// let p = always()
    ///     .then_validating(|a: &Animal| a.age, gt(3))
    ///     .then_validating(|a: &Animal| a.name.clone(), not_empty());
    ///
    /// assert!(p.check(&Animal { name: "Joe".into(), age: 5 }));
    /// assert!(!p.check(&Animal { name: "Joe".into(), age: 2 }));
    /// assert!(!p.check(&Animal { name: String::new(), age: 5 }));
    /// ```
    fn then_validating<R, F, P>(self, extractor: F, predicate: P) -> And<Self, Projected<F, P, R>>
    where
        T: Sized,
        F: Fn(&T) -> R + Send + Sync,
        P: Predicate<R>,
    {
        And(self, projected(extractor, predicate))
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Predicate that holds for every value.
///
/// The seed of every fresh validator chain.
#[derive(Clone, Copy, Default, Debug)]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        true
    }
}

/// Create a predicate that accepts everything.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(always().check(&42));
/// assert!(always().check("anything"));
/// ```
pub fn always() -> Always {
    Always
}

/// Predicate over `T` built from a projection `T -> R` and a predicate over `R`.
///
/// The projection runs on every check; its result is never cached.
pub struct Projected<F, P, R> {
    extractor: F,
    predicate: P,
    _key: PhantomData<fn() -> R>,
}

impl<F: Clone, P: Clone, R> Clone for Projected<F, P, R> {
    fn clone(&self) -> Self {
        Self {
            extractor: self.extractor.clone(),
            predicate: self.predicate.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, P: fmt::Debug, R> fmt::Debug for Projected<F, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projected")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

impl<T, R, F, P> Predicate<T> for Projected<F, P, R>
where
    F: Fn(&T) -> R + Send + Sync,
    P: Predicate<R>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.predicate.check(&(self.extractor)(value))
    }
}

/// Create a predicate that checks `predicate` against `extractor(value)`.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let short = projected(|s: &String| s.len(), lt(5));
/// assert!(short.check(&"abc".to_string()));
/// assert!(!short.check(&"abcdef".to_string()));
/// ```
pub fn projected<T, R, F, P>(extractor: F, predicate: P) -> Projected<F, P, R>
where
    F: Fn(&T) -> R + Send + Sync,
    P: Predicate<R>,
{
    Projected {
        extractor,
        predicate,
        _key: PhantomData,
    }
}

/// Type-erased, reference-counted predicate.
///
/// Cloning is cheap and clones share the same underlying predicate, which is
/// what lets validators branch without copying their accumulated conditions.
pub struct Shared<T: ?Sized>(Arc<dyn Predicate<T>>);

impl<T: ?Sized> Shared<T> {
    /// Erase a concrete predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Shared(Arc::new(predicate))
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Shared(..)")
    }
}

impl<T: ?Sized> Predicate<T> for Shared<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value)
    }
}

/// Conjunction over a fixed list of shared predicates, checked in order.
#[derive(Debug)]
pub struct All<T: ?Sized>(Arc<[Shared<T>]>);

impl<T: ?Sized> Clone for All<T> {
    fn clone(&self) -> Self {
        All(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> All<T> {
    /// Number of conjuncts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no conjuncts. An empty conjunction accepts everything.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: ?Sized> Predicate<T> for All<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that holds when every predicate in the list holds.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let p = all(vec![Shared::new(gt(0)), Shared::new(lt(10))]);
/// assert!(p.check(&5));
/// assert!(!p.check(&10));
/// assert!(all(Vec::<Shared<i32>>::new()).check(&-1));
/// ```
pub fn all<T: ?Sized>(predicates: Vec<Shared<T>>) -> All<T> {
    All(predicates.into())
}
