//! Integration tests for labeled validators

use keyed_validator::prelude::*;
use keyed_validator::{assert_invalid, assert_labels, assert_valid};

#[derive(Debug, Clone, PartialEq)]
struct Animal {
    name: String,
    age: i32,
    zoo: String,
}

fn animal(name: &str, age: i32, zoo: &str) -> Animal {
    Animal {
        name: name.to_string(),
        age,
        zoo: zoo.to_string(),
    }
}

fn zoo_validator() -> MappedValidator<Animal, &'static str> {
    MappedValidatorBuilder::with_key(|a: &Animal| a.age)
        .validating("age", |age: &i32| *age > 3)
        .key(|a: &Animal| a.zoo.clone())
        .validating("zoo", |zoo: &String| zoo == "Vienna")
        .build()
}

#[test]
fn reports_every_label_after_validate() {
    let v = zoo_validator();

    assert_valid!(v, animal("Joe", 5, "Vienna"));
    assert_labels!(v.last_outcomes(), valid: ["age", "zoo"], invalid: []);

    assert_invalid!(v, animal("Joe", 2, "Vienna"));
    assert_labels!(v.last_outcomes(), valid: ["zoo"], invalid: ["age"]);

    let all: Vec<_> = v.all_labels().into_iter().collect();
    assert_eq!(all, vec!["age", "zoo"]);
}

#[test]
fn terminal_operations_work_on_mapped_validators() {
    let v = zoo_validator();
    let animals = vec![
        animal("Joe", 5, "Vienna"),
        animal("Ann", 1, "Vienna"),
        animal("Bob", 7, "Graz"),
    ];

    assert!(!v.all_valid(&animals));
    assert_eq!(v.filter_valid(animals.clone()), vec![animals[0].clone()]);
    assert_eq!(v.valid_or(animals[2].clone(), animals[0].clone()), animals[0]);
    assert!(v.valid_or_err(animals[1].clone()).is_err());
}

#[test]
fn test_label_checks_a_single_builder_label() {
    let names = MappedValidatorBuilder::with_key(|a: &Animal| a.name.clone())
        .validating("name", |name: &String| !name.is_empty());

    assert_eq!(names.test_label(&"name", &animal("Joe", 1, "")), Ok(true));
    assert_eq!(names.test_label(&"name", &animal("", 1, "")), Ok(false));
    assert!(matches!(
        names.test_label(&"age", &animal("Joe", 1, "")),
        Err(ValidatorError::MissingLabel { .. })
    ));
}

#[test]
fn labels_can_be_any_hashable_type() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Check {
        Adult,
        Named,
    }

    let v = MappedValidatorBuilder::with_key(|a: &Animal| a.age)
        .validating(Check::Adult, |age: &i32| *age >= 18)
        .key(|a: &Animal| a.name.clone())
        .validating(Check::Named, |name: &String| !name.is_empty())
        .build();

    let outcomes = v.evaluate(&animal("", 30, ""));
    assert_eq!(outcomes.get(&Check::Adult), Some(true));
    assert_eq!(outcomes.get(&Check::Named), Some(false));
}

#[test]
fn concurrent_evaluate_is_consistent() {
    let v = zoo_validator();

    std::thread::scope(|scope| {
        for age in 0..8 {
            let v = &v;
            scope.spawn(move || {
                let outcomes = v.evaluate(&animal("Joe", age, "Vienna"));
                assert_eq!(outcomes.get(&"age"), Some(age > 3));
                assert_eq!(outcomes.get(&"zoo"), Some(true));
                v.validate(&animal("Joe", age, "Vienna"));
            });
        }
    });

    assert_eq!(v.last_outcomes().len(), 2);
}
