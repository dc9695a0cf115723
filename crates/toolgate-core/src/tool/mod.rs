//! Tool data model: arguments, schemas, handlers and descriptors.

mod args;
mod descriptor;
mod handler;
mod schema;

pub use args::ToolArgs;
pub use descriptor::{ToolCall, ToolDefinition, ToolDescriptor};
pub use handler::ToolHandler;
pub use schema::{ParamType, ParameterSchema, ParameterSpec, SchemaError};
