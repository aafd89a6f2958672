//! Key extractors
//!
//! A [`Projection`] derives the value a condition is checked against from
//! the validated object. It is re-evaluated on every check and never cached.

use std::fmt;
use std::sync::Arc;

use crate::predicate::{projected, Predicate, Projected};

/// Shared handle to a key extractor `T -> R`.
///
/// Cloning is cheap; clones call the same function.
pub struct Projection<T, R>(Arc<dyn Fn(&T) -> R + Send + Sync>);

impl<T, R> Projection<T, R> {
    /// Wrap a key extractor.
    pub fn new<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Projection(Arc::new(extractor))
    }

    /// Derive the key from `value`.
    #[inline]
    pub fn apply(&self, value: &T) -> R {
        (self.0)(value)
    }

    /// Lower a predicate over the key into a predicate over `T`.
    pub fn lower<P>(&self, predicate: P) -> Projected<impl Fn(&T) -> R + Send + Sync, P, R>
    where
        P: Predicate<R>,
    {
        let projection = self.clone();
        projected(move |value: &T| projection.apply(value), predicate)
    }
}

impl<T, R> Clone for Projection<T, R> {
    fn clone(&self) -> Self {
        Projection(Arc::clone(&self.0))
    }
}

impl<T, R> fmt::Debug for Projection<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Projection<{} -> {}>",
            std::any::type_name::<T>(),
            std::any::type_name::<R>()
        )
    }
}
