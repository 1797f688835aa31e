//! Registry and codec behavior against the shared fixture schemas.

use pretty_assertions::assert_eq;
use transcript_rs_schema::{
    Content, ContentCodec, SchemaError, SchemaObject, TypeResolutionError,
};
use transcript_rs_test_utils::{
    FIXTURE_NAMESPACE, TestComplexOutputSchema, TestInputSchema, complex_output, fixture_registry,
};

/// A registered fixture resolves back to the same qualified name.
#[test]
fn resolves_fixture_by_qualified_name() {
    let registry = fixture_registry();
    let name = format!("{FIXTURE_NAMESPACE}.TestInputSchema");
    let schema_type = registry.resolve(&name).expect("resolve");
    assert_eq!(schema_type.qualified_name(), name);

    let value = schema_type
        .from_json(r#"{"test_field":"Hello"}"#)
        .expect("construct");
    assert_eq!(
        value.as_any().downcast_ref::<TestInputSchema>(),
        Some(&TestInputSchema::new("Hello"))
    );
}

/// Unknown modules fail resolution instead of falling back to opaque text.
#[test]
fn invalid_module_class_fails_resolution() {
    let registry = fixture_registry();
    let err = registry.resolve("invalid.module.Class").unwrap_err();
    assert!(matches!(err, TypeResolutionError::UnknownNamespace { .. }));

    let codec = ContentCodec::new(registry);
    let err = codec
        .deserialize("{}", Some("invalid.module.Class"))
        .unwrap_err();
    assert!(matches!(err, SchemaError::TypeResolution(_)));
}

/// Maps of nested records survive a codec round trip with stable key order.
#[test]
fn keyed_nested_records_round_trip() {
    let codec = ContentCodec::new(fixture_registry());
    let original = Content::schema(complex_output(
        "Complex output",
        &[("key2", "Nested output 2", 20), ("key1", "Nested output 1", 10)],
    ));

    let serialized = codec.serialize(&original).expect("serialize");
    assert!(serialized.text.find("key1") < serialized.text.find("key2"));

    let restored = codec
        .deserialize(&serialized.text, serialized.type_name.as_deref())
        .expect("deserialize");
    assert_eq!(restored, original);
    let output = restored
        .downcast_ref::<TestComplexOutputSchema>()
        .expect("complex output");
    assert_eq!(output.data_dict["key1"].nested_field, "Nested output 1");
}

/// Missing required fields surface as validation errors.
#[test]
fn missing_fields_fail_validation() {
    let codec = ContentCodec::new(fixture_registry());
    let name = format!("{FIXTURE_NAMESPACE}.TestNestedSchema");
    let err = codec
        .deserialize(r#"{"nested_field":"x"}"#, Some(name.as_str()))
        .unwrap_err();
    match err {
        SchemaError::Validation(err) => {
            assert_eq!(err.type_name, name);
            assert!(err.message.contains("nested_int"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
