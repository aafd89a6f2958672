//! Logging behaviour with the `tracing` feature enabled

#![cfg(feature = "tracing")]

use keyed_validator::prelude::*;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn rejected_value_is_logged() {
    let v = Validator::with_int_key(|x: &i32| *x).positive();
    assert!(v.valid_or_err(-42).is_err());

    assert!(logs_contain("value rejected by validator"));
    assert!(logs_contain("-42"));
}

#[traced_test]
#[test]
fn accepted_value_is_not_logged() {
    let v = Validator::with_int_key(|x: &i32| *x).positive();
    assert_eq!(v.valid_or_err(42), Ok(42));

    assert!(!logs_contain("value rejected by validator"));
}

#[traced_test]
#[test]
fn builder_logs_re_key_and_build() {
    let _v = ValidatorBuilder::with_int_key(|x: &i32| *x)
        .positive()
        .key(|x: &i32| x.to_string())
        .build();

    assert!(logs_contain("re-keying validator builder"));
    assert!(logs_contain("building validator"));
}

#[traced_test]
#[test]
fn mapped_failure_is_logged() {
    let v = MappedValidatorBuilder::with_key(|x: &i32| *x)
        .validating("positive", |x: &i32| *x > 0)
        .build();

    assert!(!v.validate(&-1));
    assert!(logs_contain("mapped validation failed"));
}
