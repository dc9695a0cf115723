//! Schema Interchange Tests
//!
//! Parameter schemas must survive a trip through JSON Schema, both for the
//! standard tools and for hand-written schemas in the wire format.

use rstest::rstest;
use serde_json::{Value, json};
use std::collections::BTreeSet;
use toolgate_core::{ParamType, ParameterSchema, ToolArgs};
use toolgate_tools::{InMemoryToolRegistry, ToolRegistry, ValidationMode, standard_tools};

fn required_set(schema: &ParameterSchema) -> BTreeSet<String> {
    schema.required_names().into_iter().map(String::from).collect()
}

#[test]
fn test_standard_schemas_survive_json_round_trip() {
    for tool in standard_tools() {
        let original = tool.schema();
        let parsed = ParameterSchema::from_json_schema(&original.to_json_schema()).unwrap();

        assert_eq!(required_set(&parsed), required_set(original), "{}", tool.name());
        assert_eq!(parsed.params().len(), original.params().len(), "{}", tool.name());
        for spec in original.params() {
            assert_eq!(parsed.get(&spec.name), Some(spec), "{}.{}", tool.name(), spec.name);
        }
    }
}

#[rstest]
#[case::greet(
    json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "description": "Name to greet"},
            "language": {"type": "string", "description": "Language for greeting", "default": "English"}
        },
        "required": ["name"]
    }),
    &["name"],
    2
)]
#[case::analyze_data(
    json!({
        "type": "object",
        "properties": {
            "data": {"type": "array", "items": {"type": "number"}, "description": "Array of numbers to analyze"}
        },
        "required": ["data"]
    }),
    &["data"],
    1
)]
#[case::no_properties(json!({"type": "object"}), &[], 0)]
fn test_wire_schemas_parse(
    #[case] schema: Value,
    #[case] required: &[&str],
    #[case] param_count: usize,
) {
    let parsed = ParameterSchema::from_json_schema(&schema).unwrap();
    assert_eq!(parsed.required_names(), required);
    assert_eq!(parsed.params().len(), param_count);
}

#[test]
fn test_parsed_schema_types() {
    let schema = ParameterSchema::from_json_schema(&json!({
        "type": "object",
        "properties": {
            "count": {"type": "integer"},
            "ratio": {"type": "number"},
            "enabled": {"type": "boolean"},
            "tags": {"type": "array"},
            "meta": {"type": "object"}
        }
    }))
    .unwrap();

    assert_eq!(schema.get("count").unwrap().param_type, ParamType::Number);
    assert_eq!(schema.get("ratio").unwrap().param_type, ParamType::Number);
    assert_eq!(schema.get("enabled").unwrap().param_type, ParamType::Boolean);
    assert_eq!(schema.get("tags").unwrap().param_type, ParamType::Array);
    assert_eq!(schema.get("meta").unwrap().param_type, ParamType::Object);
    assert!(schema.required_names().is_empty());
}

#[rstest]
#[case::not_an_object(json!("object"))]
#[case::required_not_array(json!({"type": "object", "required": "name"}))]
#[case::unknown_type(json!({"type": "object", "properties": {"x": {"type": "date"}}}))]
fn test_malformed_schemas_rejected(#[case] schema: Value) {
    assert!(ParameterSchema::from_json_schema(&schema).is_err());
}

#[tokio::test]
async fn test_strict_registry_applies_declared_default() {
    let registry = InMemoryToolRegistry::new().with_validation(ValidationMode::Strict);
    for tool in standard_tools() {
        registry.register_descriptor(tool);
    }

    let greeting = registry
        .execute("greet", ToolArgs::new().with("name", "Bob"))
        .await
        .unwrap();
    assert_eq!(greeting["greeting"], json!("Hello, Bob! Nice to meet you."));

    let err = registry
        .execute("get_cat_fact", ToolArgs::new().with("category", "dogs"))
        .await
        .unwrap_err();
    assert!(matches!(err, toolgate_core::ToolError::InvalidArguments { .. }));
}
