//! Workflow step tools: notifications and an operation that can fail on request.

use async_trait::async_trait;
use serde_json::json;
use toolgate_core::{
    HandlerError, HandlerResult, ParamType, ParameterSchema, ParameterSpec, ToolArgs,
    ToolDescriptor, ToolHandler, ToolId,
};

use super::timestamp;

/// `send_notification`: records a notification as sent (simulated).
#[derive(Debug, Default, Clone, Copy)]
pub struct SendNotificationTool;

impl SendNotificationTool {
    pub const NAME: &'static str = "send_notification";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Send a notification (simulated)")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty()
            .with_param(
                ParameterSpec::required("message", ParamType::String)
                    .with_description("Notification message"),
            )
            .with_param(
                ParameterSpec::required("recipient", ParamType::String)
                    .with_description("Recipient email"),
            )
    }
}

#[async_trait]
impl ToolHandler for SendNotificationTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let message = args.require_str("message")?;
        let recipient = args.require_str("recipient")?;

        Ok(json!({
            "status": "sent",
            "message": message,
            "recipient": recipient,
            "timestamp": timestamp(),
        }))
    }
}

/// `risky_operation`: succeeds unless asked to fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct RiskyOperationTool;

impl RiskyOperationTool {
    pub const NAME: &'static str = "risky_operation";

    /// Operation name that makes the tool fail.
    pub const FAILING_OPERATION: &'static str = "fail";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Perform a risky operation that might fail")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::required("operation", ParamType::String)
                .with_description("Operation to perform"),
        )
    }
}

#[async_trait]
impl ToolHandler for RiskyOperationTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let operation = args.require_str("operation")?;
        if operation == Self::FAILING_OPERATION {
            return Err(HandlerError::new("This operation was designed to fail"));
        }

        Ok(json!({
            "operation": operation,
            "status": "success",
            "result": format!("Operation '{operation}' completed successfully"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notification_is_sent() {
        let result = SendNotificationTool
            .call(
                ToolArgs::new()
                    .with("message", "Welcome to our service!")
                    .with("recipient", "user@example.com"),
            )
            .await
            .unwrap();
        assert_eq!(result["status"], json!("sent"));
        assert_eq!(result["recipient"], json!("user@example.com"));
    }

    #[tokio::test]
    async fn notification_requires_recipient() {
        let err = SendNotificationTool
            .call(ToolArgs::new().with("message", "hi"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "missing required argument 'recipient'");
    }

    #[tokio::test]
    async fn risky_operation_succeeds_and_fails() {
        let ok = RiskyOperationTool
            .call(ToolArgs::new().with("operation", "succeed"))
            .await
            .unwrap();
        assert_eq!(
            ok["result"],
            json!("Operation 'succeed' completed successfully")
        );

        let err = RiskyOperationTool
            .call(ToolArgs::new().with("operation", "fail"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "This operation was designed to fail");
    }
}
