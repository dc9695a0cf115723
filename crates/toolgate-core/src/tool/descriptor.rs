//! Tool descriptors, definitions and calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::args::ToolArgs;
use super::handler::ToolHandler;
use super::schema::ParameterSchema;
use crate::error::HandlerResult;
use crate::identifiers::ToolId;

/// Everything the registry stores about one tool.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: ToolId,
    description: String,
    schema: ParameterSchema,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    /// Create a descriptor with an empty description.
    pub fn new(name: ToolId, schema: ParameterSchema, handler: impl ToolHandler + 'static) -> Self {
        Self::from_shared(name, schema, Arc::new(handler))
    }

    /// Create a descriptor around an already shared handler.
    pub fn from_shared(
        name: ToolId,
        schema: ParameterSchema,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name,
            description: String::new(),
            schema,
            handler,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &ToolId {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &ParameterSchema {
        &self.schema
    }

    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }

    /// Run the handler directly, bypassing any registry.
    pub async fn invoke(&self, args: ToolArgs) -> HandlerResult {
        self.handler.call(args).await
    }

    /// Serializable listing entry for this tool.
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.to_string(),
            description: self.description.clone(),
            input_schema: self.schema.to_json_schema(),
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name.as_str())
            .field("description", &self.description)
            .field("params", &self.schema.params().len())
            .finish()
    }
}

/// Tool listing entry, in the shape tool-calling APIs expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema `object` describing the arguments
    pub input_schema: Value,
}

/// A request to run one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: ToolArgs,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: ToolArgs) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// A call with no arguments.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, ToolArgs::new())
    }
}
