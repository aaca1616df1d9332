use cover_ir::types::Element;
use cover_ir::validate::{validate_instance, ValidationError};
use serde_json::json;

#[test]
fn test_rejects_top_level_array() {
    let err = validate_instance(&json!([[1, 2], [3]])).unwrap_err();
    assert_eq!(err, ValidationError::NotAnObject { found: "an array" });
}

#[test]
fn test_rejects_empty_object() {
    let err = validate_instance(&json!({})).unwrap_err();
    assert_eq!(err, ValidationError::Empty);
}

#[test]
fn test_rejects_non_list_value() {
    let err = validate_instance(&json!({ "A": [1], "B": 2 })).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NotAList {
            subset: "B".into(),
            found: "a number",
        }
    );
}

#[test]
fn test_rejects_repeated_value() {
    let err = validate_instance(&json!({ "A": ["x", "y", "x"] })).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateElement {
            subset: "A".into(),
            element: Element::Str("x".into()),
        }
    );
    assert!(err.to_string().contains("duplicate in 'A'"));
}

#[test]
fn test_integer_and_string_forms_are_distinct() {
    let collection = validate_instance(&json!({ "A": [1, "1"] })).unwrap();
    assert_eq!(collection.get("A").unwrap().len(), 2);
}

#[test]
fn test_rejects_float_bool_and_nested_elements() {
    for bad in [json!(1.5), json!(true), json!(null), json!([1]), json!({"k": 1})] {
        let err = validate_instance(&json!({ "A": [1, bad] })).unwrap_err();
        assert!(
            matches!(err, ValidationError::UnsupportedElement { ref subset, .. } if subset == "A"),
            "unexpected error: {err:?}"
        );
    }
}

#[test]
fn test_accepts_empty_subset() {
    let collection = validate_instance(&json!({ "A": [], "B": [1] })).unwrap();
    assert_eq!(collection.len(), 2);
    assert!(collection.get("A").unwrap().is_empty());
}
