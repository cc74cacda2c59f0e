use serde_json::json;
use vldc::prelude::*;

#[test]
fn unsupported_type_name() {
    let err = vldc::compile("uuid").unwrap_err();
    assert_eq!(err.key(), "unsupported_type");
    assert!(err.to_string().contains("\"uuid\""));
}

#[test]
fn unsupported_type_keeps_suffix_in_report() {
    let err = vldc::compile("date-required").unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnsupportedType { ref type_name, .. } if type_name == "date-required"
    ));
}

#[test]
fn unsupported_type_in_root_group() {
    let schema = vldc::root! { "body" => { "when" => "timestamp" } };
    let err = vldc::compile_root(&schema).unwrap_err();
    assert_eq!(
        err,
        CompileError::UnsupportedType {
            type_name: "timestamp".into(),
            field: "body.when".into(),
        }
    );
}

#[test]
fn unsupported_item_type() {
    let err = vldc::compile(FieldDescriptor::array().named("xs").items("tuple")).unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnsupportedType { ref field, .. } if field == "xs.<item>"
    ));
}

#[test]
fn object_triple_needs_field_map() {
    let err = vldc::compile(Shorthand::triple_with(TypeTag::Object, true, "int")).unwrap_err();
    assert!(matches!(err, CompileError::InvalidSubschema { .. }));
}

#[test]
fn boolean_value_rejects_non_boolean() {
    for bad in [json!("false"), json!(0), json!("true")] {
        let err = vldc::compile(FieldDescriptor::boolean().named("flag").value(bad)).unwrap_err();
        assert!(matches!(
            err,
            CompileError::InvalidConstraint { ref field, .. } if field == "flag"
        ));
        assert_eq!(err.key(), "invalid_constraint");
    }
}

#[test]
fn nested_boolean_value_is_checked() {
    let schema = Fields::new().field("on", FieldDescriptor::boolean().value("no"));
    let err = vldc::compile(schema).unwrap_err();
    assert!(matches!(
        err,
        CompileError::InvalidConstraint { ref field, .. } if field == "on"
    ));
}

#[test]
fn custom_alias_extends_table() {
    let compiler = Compiler::new().alias("Email", TypeTag::String);
    assert!(compiler.compile("email").is_ok());
    assert!(vldc::compile("email").is_err());
}

#[test]
fn aliases_resolve_case_insensitively() {
    for name in ["String", "STRING", "str", "Integer", "INT", "Float", "Boolean", "Array", "Object", "Any"] {
        assert!(vldc::compile(name).is_ok(), "{} should compile", name);
    }
}

#[test]
fn compile_error_is_a_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    let err = vldc::compile("nope").unwrap_err();
    takes_error(&err);
}
