//! Tests for the validated-document type.

use step_rail::Validation;

#[test]
fn valid_and_invalid_predicates() {
    let valid = Validation::<&str, i32>::valid(42);
    assert!(valid.is_valid());
    assert_eq!(valid.into_value(), Some(42));

    let invalid = Validation::<&str, i32>::invalid("missing name");
    assert!(invalid.is_invalid());
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.as_slice(), ["missing name"]);
}

#[test]
fn invalid_many_collects_every_error() {
    let invalid = Validation::<&str, ()>::invalid_many(["a", "b"]);
    assert_eq!(invalid.into_errors().unwrap().len(), 2);
}

#[test]
fn map_transforms_only_the_valid_branch() {
    let valid = Validation::<&str, i32>::valid(21).map(|n| n * 2);
    assert_eq!(valid.into_value(), Some(42));

    let invalid = Validation::<&str, i32>::invalid("bad").map(|n| n * 2);
    assert!(invalid.is_invalid());
}

#[test]
fn collecting_all_valid_yields_every_value() {
    let fields = vec![
        Validation::<&str, i32>::valid(1),
        Validation::valid(2),
        Validation::valid(3),
    ];
    let combined: Validation<&str, Vec<i32>> = fields.into_iter().collect();
    assert_eq!(combined.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn collecting_accumulates_errors_across_inputs() {
    let fields = vec![
        Validation::<&str, i32>::valid(1),
        Validation::invalid("missing name"),
        Validation::valid(2),
        Validation::invalid_many(["bad age", "bad email"]),
    ];
    let combined: Validation<&str, Vec<i32>> = fields.into_iter().collect();

    let errors = combined.into_errors().unwrap();
    assert_eq!(errors.as_slice(), ["missing name", "bad age", "bad email"]);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let invalid = Validation::<String, i32>::invalid_many([
        "missing name".to_string(),
        "bad age".to_string(),
    ]);

    let json = serde_json::to_string(&invalid).unwrap();
    let back: Validation<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, invalid);
}
