//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use keyed_validator::predicate::prelude::*;
//!
//! let valid_age = ge(0).and(le(150));
//! assert!(valid_age.check(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all, always, projected, Shared};

// String predicates
pub use super::string::{
    blank, char_len_eq, contains, ends_with, matches, not_empty, starts_with, starts_with_at,
};

// Number predicates
pub use super::number::{
    between, eq, ge, gt, in_range, in_range_exclusive, le, lt, ne, negative, positive, zero,
};
