//! Integration Tests for Registry Dispatch
//!
//! These tests drive the registry through its public surface with both
//! mock tools and the standard library, checking dispatch, replacement,
//! failure isolation and the standard tools' observable results.

use serde_json::json;
use toolgate_core::{ToolArgs, ToolCall, ToolError};
use toolgate_testing::MockTool;
use toolgate_tools::{InMemoryToolRegistry, ToolRegistry, register_standard_tools};

fn standard_registry() -> InMemoryToolRegistry {
    let registry = InMemoryToolRegistry::new();
    register_standard_tools(&registry);
    registry
}

#[tokio::test]
async fn test_latest_registration_wins() {
    let registry = InMemoryToolRegistry::new();
    let first = MockTool::new("lookup").with_default_response("first");
    let second = MockTool::new("lookup").with_default_response("second");

    registry.register_descriptor(first.descriptor());
    registry.register_descriptor(second.descriptor());

    let result = registry.execute("lookup", ToolArgs::new()).await.unwrap();
    assert_eq!(result, json!("second"));
    assert_eq!(first.call_count(), 0);
    assert_eq!(second.call_count(), 1);
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn test_unknown_tool_invokes_nothing() {
    let registry = InMemoryToolRegistry::new();
    let mock = MockTool::new("known");
    registry.register_descriptor(mock.descriptor());

    let err = registry.execute("unknown", ToolArgs::new()).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Tool 'unknown' not found");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_handler_failure_keeps_tool_registered() {
    let registry = InMemoryToolRegistry::new();
    let flaky = MockTool::new("flaky")
        .with_failure(ToolArgs::new().with("attempt", 1), "first attempt fails")
        .with_default_response("ok");
    registry.register_descriptor(flaky.descriptor());

    let err = registry
        .execute("flaky", ToolArgs::new().with("attempt", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::HandlerFailure(_)));
    assert_eq!(err.to_string(), "first attempt fails");

    let result = registry
        .execute("flaky", ToolArgs::new().with("attempt", 2))
        .await
        .unwrap();
    assert_eq!(result, json!("ok"));
    assert!(registry.contains("flaky"));
}

#[tokio::test]
async fn test_arguments_reach_handler_unchanged() {
    let registry = InMemoryToolRegistry::new();
    let mock = MockTool::new("echo");
    registry.register_descriptor(mock.descriptor());

    let args = ToolArgs::new()
        .with("text", "hi")
        .with("nested", json!({"a": [1, 2]}));
    let call = ToolCall::new("echo", args.clone());
    let result = registry.execute_call(&call).await.unwrap();

    assert!(mock.was_called_with(&args));
    assert_eq!(result["arguments"], args.into_value());
}

#[tokio::test]
async fn test_standard_sum() {
    let registry = standard_registry();
    let result = registry
        .execute("sum", ToolArgs::new().with("values", json!([1, 2, 3])))
        .await
        .unwrap();
    assert_eq!(result, json!(6.0));
}

#[tokio::test]
async fn test_standard_greet() {
    let registry = standard_registry();
    let result = registry
        .execute("greet", ToolArgs::new().with("name", "Alice"))
        .await
        .unwrap();
    assert_eq!(result["greeting"], json!("Hello, Alice! Nice to meet you."));
    assert!(result["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_standard_greet_requires_name() {
    let registry = standard_registry();
    let err = registry.execute("greet", ToolArgs::new()).await.unwrap_err();

    assert!(matches!(err, ToolError::HandlerFailure(_)));
    assert_eq!(err.to_string(), "missing required argument 'name'");
}

#[tokio::test]
async fn test_standard_calculate_reports_invalid_expression_in_payload() {
    let registry = standard_registry();
    let result = registry
        .execute("calculate", ToolArgs::new().with("expression", "2 + abc"))
        .await
        .unwrap();
    assert_eq!(result, json!({ "error": "Invalid mathematical expression" }));
}

#[tokio::test]
async fn test_standard_workflow_validate_then_notify() {
    let registry = standard_registry();

    let validation = registry
        .execute(
            "validate_email",
            ToolArgs::new().with("email", "user@example.com"),
        )
        .await
        .unwrap();
    assert_eq!(validation["is_valid"], json!(true));

    let sent = registry
        .execute(
            "send_notification",
            ToolArgs::new()
                .with("message", "Welcome!")
                .with("recipient", "user@example.com"),
        )
        .await
        .unwrap();
    assert_eq!(sent["status"], json!("sent"));
}

#[tokio::test]
async fn test_standard_definitions_are_sorted_and_complete() {
    let registry = standard_registry();
    let names: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();

    assert_eq!(
        names,
        [
            "analyze_data",
            "calculate",
            "get_cat_fact",
            "get_weather",
            "greet",
            "risky_operation",
            "search_web",
            "send_notification",
            "sum",
            "validate_email",
        ]
    );
}
