//! String predicates
//!
//! Every predicate here works on both `str` and `String`, so it can be used
//! directly on a `String` projection.

use super::combinators::Predicate;
use crate::error::ValidatorError;
use regex::Regex;

// Implements `Predicate<str>` and `Predicate<String>` from one body.
macro_rules! str_predicate {
    (<$s:ident> $ty:ty, |$self:ident, $value:ident| $body:expr) => {
        impl<$s: AsRef<str> + Send + Sync> Predicate<str> for $ty {
            #[inline]
            fn check(&$self, $value: &str) -> bool {
                $body
            }
        }

        impl<$s: AsRef<str> + Send + Sync> Predicate<String> for $ty {
            #[inline]
            fn check(&$self, $value: &String) -> bool {
                let $value: &str = $value;
                $body
            }
        }
    };
    ($ty:ty, |$self:ident, $value:ident| $body:expr) => {
        impl Predicate<str> for $ty {
            #[inline]
            fn check(&$self, $value: &str) -> bool {
                $body
            }
        }

        impl Predicate<String> for $ty {
            #[inline]
            fn check(&$self, $value: &String) -> bool {
                let $value: &str = $value;
                $body
            }
        }
    };
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

str_predicate!(NotEmpty, |self, value| !value.is_empty());

/// Create a predicate that checks if a string is not empty.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(not_empty().check("hello"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string is empty or only whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct Blank;

str_predicate!(Blank, |self, value| value.chars().all(char::is_whitespace));

/// Create a predicate that checks if a string is empty or only whitespace.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(blank().check(""));
/// assert!(blank().check(" \t\n"));
/// assert!(!blank().check(" x "));
/// ```
pub fn blank() -> Blank {
    Blank
}

/// Predicate that checks the number of chars in a string.
#[derive(Clone, Copy, Debug)]
pub struct CharLen(pub usize);

str_predicate!(CharLen, |self, value| value.chars().count() == self.0);

/// Create a predicate that checks a string has exactly `len` chars.
///
/// Counts `char`s, not bytes.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(char_len_eq(4).check("Wien"));
/// assert!(char_len_eq(4).check("Graz"));
/// assert!(char_len_eq(2).check("äö"));
/// assert!(!char_len_eq(3).check("Wien"));
/// ```
pub fn char_len_eq(len: usize) -> CharLen {
    CharLen(len)
}

/// Predicate that checks if string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

str_predicate!(<S> StartsWith<S>, |self, value| value.starts_with(self.0.as_ref()));

/// Create a predicate that checks if string starts with prefix.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(starts_with("http").check("https://example.com"));
/// assert!(!starts_with("http").check("ftp://example.com"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if a string has a prefix at a char offset.
#[derive(Clone, Debug)]
pub struct StartsWithAt<S> {
    prefix: S,
    offset: usize,
}

fn tail_from(value: &str, offset: usize) -> Option<&str> {
    value
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(value.len()))
        .nth(offset)
        .map(|i| &value[i..])
}

str_predicate!(<S> StartsWithAt<S>, |self, value| {
    tail_from(value, self.offset).is_some_and(|tail| tail.starts_with(self.prefix.as_ref()))
});

/// Create a predicate that checks if the string, skipping `offset` chars,
/// starts with `prefix`.
///
/// An offset past the end of the string never matches.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(starts_with_at("enna", 2).check("Vienna"));
/// assert!(!starts_with_at("Vi", 1).check("Vienna"));
/// assert!(starts_with_at("", 6).check("Vienna"));
/// assert!(!starts_with_at("", 7).check("Vienna"));
/// ```
pub fn starts_with_at<S: AsRef<str> + Send + Sync>(prefix: S, offset: usize) -> StartsWithAt<S> {
    StartsWithAt { prefix, offset }
}

/// Predicate that checks if string ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith<S>(pub S);

str_predicate!(<S> EndsWith<S>, |self, value| value.ends_with(self.0.as_ref()));

/// Create a predicate that checks if string ends with suffix.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(ends_with(".rs").check("main.rs"));
/// assert!(!ends_with(".rs").check("main.py"));
/// ```
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate that checks if string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

str_predicate!(<S> Contains<S>, |self, value| value.contains(self.0.as_ref()));

/// Create a predicate that checks if string contains substring.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// assert!(contains("@").check("user@example.com"));
/// assert!(!contains("@").check("invalid"));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Predicate that checks if the whole string matches a regular expression.
#[derive(Clone, Debug)]
pub struct Matches(Regex);

impl Matches {
    /// The pattern as given by the caller, without the added anchors.
    pub fn pattern(&self) -> &str {
        let anchored = self.0.as_str();
        &anchored[4..anchored.len() - 2]
    }
}

str_predicate!(Matches, |self, value| self.0.is_match(value));

/// Create a predicate that checks if the entire string matches `pattern`.
///
/// The pattern is anchored at both ends, so `"[0-9]+"` rejects `"12a"`.
///
/// # Errors
///
/// Returns [`ValidatorError::InvalidArgument`] when `pattern` is not a valid
/// regular expression.
///
/// # Example
///
/// ```rust
/// use keyed_validator::predicate::*;
///
/// let digits = matches("[0-9]+").unwrap();
/// assert!(digits.check("1234"));
/// assert!(!digits.check("12a"));
/// assert!(matches("(").is_err());
/// ```
pub fn matches(pattern: &str) -> Result<Matches, ValidatorError> {
    Regex::new(&format!("^(?:{pattern})$"))
        .map(Matches)
        .map_err(|err| ValidatorError::invalid_argument("pattern", err.to_string()))
}
