//! Predicate combinators
//!
//! The innermost evaluation primitive of the crate. A [`Predicate`] is a
//! function from a value to `bool`; predicates combine with `and`, `or` and
//! `not`, and [`PredicateExt::then_validating`] conjoins a predicate over a
//! *projection* of the value, which is how every validator chain is built.
//!
//! # Example
//!
//! ```rust
//! use keyed_validator::predicate::*;
//!
//! struct Animal {
//!     name: String,
//!     age: u32,
//! }
//!
//! let adult_named = always()
//!     .then_validating(|a: &Animal| a.age, ge(3))
//!     .then_validating(|a: &Animal| a.name.clone(), starts_with("J"));
//!
//! assert!(adult_named.check(&Animal { name: "Joe".into(), age: 5 }));
//! assert!(!adult_named.check(&Animal { name: "Ann".into(), age: 5 }));
//! ```
//!
//! Closures are predicates too:
//!
//! ```rust
//! use keyed_validator::predicate::*;
//!
//! let even = |x: &i32| x % 2 == 0;
//! assert!(even.and(positive()).check(&4));
//! ```

mod combinators;
mod number;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all, always, projected, All, Always, And, Not, Or, Projected, Shared};

// Re-export string predicates
pub use string::{
    blank, char_len_eq, contains, ends_with, matches, not_empty, starts_with, starts_with_at,
    Blank, CharLen, Contains, EndsWith, Matches, NotEmpty, StartsWith, StartsWithAt,
};

// Re-export number predicates
pub use number::{
    between, eq, ge, gt, in_range, in_range_exclusive, le, lt, ne, negative, positive, zero,
    Bounds, Eq, Ge, Gt, InRange, Le, Lt, Ne,
};
