use serde_json::json;
use vldc::prelude::*;

#[test]
fn to_json_has_exactly_three_keys() {
    let v = vldc::compile(FieldDescriptor::string().named("name").min_length(2)).unwrap();
    let err = v.validate(&json!("a")).unwrap_err();
    let flat = err.to_json();
    assert_eq!(flat.as_object().unwrap().len(), 3);
    assert_eq!(flat["code"], json!("string_too_short"));
    assert_eq!(flat["field"], json!("name"));
    assert_eq!(flat["message"], json!("String must be at least 2 characters"));
}

#[cfg(feature = "serialize")]
#[test]
fn serde_matches_to_json() {
    let err = ValidationError::new(ErrorCode::ArrayTooFewItems, "tags", "need more");
    assert_eq!(serde_json::to_value(&err).unwrap(), err.to_json());
}

#[test]
fn display_formats() {
    let err = ValidationError::new(ErrorCode::NotObject, "", "Expected object, received array");
    assert_eq!(err.to_string(), "Expected object, received array");
    assert_eq!(ErrorCode::RequireField.to_string(), "require_field");
}

#[test]
fn every_code_has_a_distinct_key() {
    let codes = [
        ErrorCode::RequireField,
        ErrorCode::NotNumber,
        ErrorCode::NumberTooSmall,
        ErrorCode::NumberTooBig,
        ErrorCode::NumberNotSame,
        ErrorCode::StringTooShort,
        ErrorCode::StringTooLong,
        ErrorCode::StringNotSame,
        ErrorCode::RegexMismatch,
        ErrorCode::NotArray,
        ErrorCode::ArrayTooFewItems,
        ErrorCode::ArrayTooManyItems,
        ErrorCode::NotObject,
        ErrorCode::BooleanNotSame,
    ];
    let keys: std::collections::HashSet<_> = codes.iter().map(|c| c.key()).collect();
    assert_eq!(keys.len(), codes.len());
}
