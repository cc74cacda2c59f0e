use serde_json::json;
use vldc::prelude::*;

// === Array ===

#[test]
fn array_maps_items() {
    let a = vldc::compile(FieldDescriptor::array().items("int")).unwrap();
    assert_eq!(a.validate(&json!(["1", 2, "3.5"])).unwrap(), json!([1, 2, 3]));
    assert_eq!(a.validate(&json!([])).unwrap(), json!([]));
    assert_eq!(a.validate(&json!(null)).unwrap(), json!(null));
}

#[test]
fn array_item_error_names_item_path() {
    let a = vldc::compile(FieldDescriptor::array().named("ids").items("int")).unwrap();
    let err = a.validate(&json!(["1", "2", "x"])).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotNumber);
    assert_eq!(err.field, "ids.<item>");
}

#[test]
fn array_without_items_accepts_anything() {
    let a = vldc::compile("array").unwrap();
    let v = json!([1, "two", null, {"three": 3}]);
    assert_eq!(a.validate(&v).unwrap(), v);
}

#[test]
fn array_rejects_non_sequence() {
    let a = vldc::compile(FieldDescriptor::array().named("tags")).unwrap();
    let err = a.validate(&json!("a,b")).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotArray);
    assert_eq!(err.field, "tags");
    assert!(a.validate(&json!({"0": "a"})).is_err());
}

#[test]
fn array_item_count() {
    let a = vldc::compile(FieldDescriptor::array().min_items(1).max_items(2)).unwrap();
    assert_eq!(a.validate(&json!([])).unwrap_err().code, ErrorCode::ArrayTooFewItems);
    assert!(a.validate(&json!([1, 2])).is_ok());
    assert_eq!(
        a.validate(&json!([1, 2, 3])).unwrap_err().code,
        ErrorCode::ArrayTooManyItems
    );
}

#[test]
fn array_triple_with_required_items() {
    let a = vldc::compile(Shorthand::triple_with(TypeTag::Array, true, "string-required")).unwrap();
    assert!(a.is_required());
    assert_eq!(a.validate(&json!([1, "b"])).unwrap(), json!(["1", "b"]));
    let err = a.validate(&json!(["a", null])).unwrap_err();
    assert_eq!(err.code, ErrorCode::RequireField);
    assert_eq!(err.field, "<item>");
}

#[test]
fn array_of_objects() {
    let schema = FieldDescriptor::array()
        .named("people")
        .items(Fields::new().field("name", "string-required"));
    let a = vldc::compile(schema).unwrap();
    assert_eq!(
        a.validate(&json!([{"name": "a", "x": 1}])).unwrap(),
        json!([{"name": "a"}])
    );
    let err = a.validate(&json!([{"name": "a"}, {}])).unwrap_err();
    assert_eq!(err.field, "people.<item>.name");
}

// === Object ===

#[test]
fn object_projects_declared_fields() {
    let schema = Fields::new().field("a", "string").field("b", "int");
    let o = vldc::compiler::Compiler::new()
        .compile_named("obj", &schema.into())
        .unwrap();
    let out = o.validate(&json!({"a": "x", "b": "2", "c": true})).unwrap();
    assert_eq!(out, json!({"a": "x", "b": 2}));
}

#[test]
fn object_missing_optional_fields_become_null() {
    let o = vldc::compile(vldc::fields! { "a" => "string", "b" => "bool" }).unwrap();
    assert_eq!(o.validate(&json!({})).unwrap(), json!({"a": null, "b": null}));
}

#[test]
fn object_rejects_non_object() {
    let o = vldc::compile(FieldDescriptor::object().named("cfg")).unwrap();
    for bad in [json!([1]), json!("x"), json!(1)] {
        let err = o.validate(&bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotObject);
        assert_eq!(err.field, "cfg");
    }
}

#[test]
fn object_without_fields_yields_empty_object() {
    let o = vldc::compile("object").unwrap();
    assert_eq!(o.validate(&json!({"a": 1})).unwrap(), json!({}));
}

#[test]
fn nested_paths() {
    let schema = vldc::fields! {
        "address" => vldc::fields! {
            "city" => FieldDescriptor::string().min_length(2),
        },
    };
    let o = vldc::compiler::Compiler::new()
        .compile_named("user", &schema.into())
        .unwrap();
    let err = o.validate(&json!({"address": {"city": "X"}})).unwrap_err();
    assert_eq!(err.code, ErrorCode::StringTooShort);
    assert_eq!(err.field, "user.address.city");

    // Optional nested object may be absent entirely.
    assert_eq!(o.validate(&json!({})).unwrap(), json!({"address": null}));
}

#[test]
fn first_failing_child_wins() {
    let o = vldc::compile(vldc::fields! { "a" => "int", "b" => "int" }).unwrap();
    let err = o.validate(&json!({"a": "x", "b": "y"})).unwrap_err();
    assert_eq!(err.field, "a");
}

#[test]
fn object_triple() {
    let o = vldc::compile(Shorthand::triple_with(
        "Object",
        false,
        Fields::new().field("n", "number-required"),
    ))
    .unwrap();
    assert!(!o.is_required());
    assert_eq!(o.validate(&json!(null)).unwrap(), json!(null));
    assert_eq!(o.validate(&json!({"n": "1.5"})).unwrap(), json!({"n": 1.5}));
}

#[test]
fn shared_shorthand_compiles_into_independent_trees() {
    let address = Fields::new().field("city", "string-required");
    let schema = vldc::fields! {
        "home" => address.clone(),
        "work" => address,
    };
    let o = vldc::compile(schema).unwrap();
    let err = o.validate(&json!({"home": {"city": "A"}, "work": {}})).unwrap_err();
    assert_eq!(err.field, "work.city");
}
