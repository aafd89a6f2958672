//! # Keyed Validator
//!
//! Composable boolean validation over structured values.
//!
//! A validator is a chain of conditions, each attached to a *key*: a
//! function that extracts one facet of the value under test. Conditions
//! registered on successive keys are conjoined, so a chain reads as a list
//! of requirements about the value's fields:
//!
//! - [`Validator`] is an immutable chain; every call hands back a new one.
//! - [`ValidatorBuilder`] accumulates conditions and [`build`](ValidatorBuilder::build)s a validator.
//! - [`MappedValidatorBuilder`] names every condition with a label so the
//!   built [`MappedValidator`] can report which labels passed or failed.
//!
//! Typed keys (`int_key`, `long_key`, `double_key`, `string_key`) unlock
//! the numeric and string verbs of [`NumberConditions`] and
//! [`StringConditions`].
//!
//! ## Quick Example
//!
//! ```rust
//! use keyed_validator::prelude::*;
//!
//! #[derive(Debug)]
//! struct Animal {
//!     name: Option<String>,
//!     age: i32,
//! }
//!
//! let animals = Validator::with_key(|a: &Animal| a.name.clone())
//!     .validating(|name: &Option<String>| name.is_some())
//!     .int_key(|a: &Animal| a.age)
//!     .in_range_inclusive(0, 120);
//!
//! let joe = Animal { name: Some("Joe".into()), age: 5 };
//! let nameless = Animal { name: None, age: 5 };
//!
//! assert!(animals.validate(&joe));
//! assert!(!animals.validate(&nameless));
//! assert!(animals.valid_or_err(nameless).is_err());
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: trace/debug events when chains are re-keyed, built, or reject a value.
//! - `serde`: `Serialize`/`Deserialize` for [`Outcomes`].
//! - `proptest`: `Arbitrary` for [`Outcomes`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod conditions;
pub mod error;
pub mod mapped;
pub mod predicate;
pub mod projection;
pub mod testing;
pub mod validator;

// Re-exports
pub use builder::ValidatorBuilder;
pub use conditions::{Conditions, NumberConditions, StringConditions};
pub use error::ValidatorError;
pub use mapped::{MappedValidator, MappedValidatorBuilder, Outcomes};
pub use projection::Projection;
pub use validator::{Validate, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::ValidatorBuilder;
    pub use crate::conditions::{Conditions, NumberConditions, StringConditions};
    pub use crate::error::ValidatorError;
    pub use crate::mapped::{MappedValidator, MappedValidatorBuilder, Outcomes};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::validator::{Validate, Validator};
}
