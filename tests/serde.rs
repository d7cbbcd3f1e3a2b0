//! Serialization of captured errors (feature `serde`).
#![cfg(feature = "serde")]

use catch_this::{r#try, Error, StringError};
use serde_json::json;

#[test]
fn error_serializes_type_and_message() {
    let mut captured = None;

    r#try(|| panic!("disk full"))
        .catch_all(|e| captured = Some(e))
        .finally(());

    let value = serde_json::to_value(captured.unwrap()).unwrap();
    assert!(value["type"].as_str().unwrap().ends_with("StringError"));
    assert_eq!(value["message"], "disk full");
}

#[test]
fn error_from_box_has_generic_type() {
    let err = Error::from_box(Box::new(StringError::new("io")));
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["type"], "dyn std::error::Error");
    assert_eq!(value["message"], "io");
}

#[test]
fn string_error_serializes_as_message() {
    let value = serde_json::to_value(StringError::new("plain")).unwrap();
    assert_eq!(value, json!("plain"));
}
