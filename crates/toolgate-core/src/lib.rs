//! # Toolgate Core
//!
//! Core types for registering named tools and invoking them by name.
//!
//! - **Identifiers**: [`ToolId`] validates tool names once, at the edge
//! - **Schemas**: [`ParameterSchema`] describes the arguments a tool accepts
//! - **Handlers**: [`ToolHandler`] is the asynchronous capability behind a tool
//! - **Errors**: [`ToolError`] and [`HandlerError`] cover lookup and handler failures
//!
//! The registry itself lives in `toolgate-tools`; this crate only defines the
//! data model it dispatches over.

pub mod error;
pub mod identifiers;
pub mod tool;

pub use error::{HandlerError, HandlerResult, ToolError, ToolResult};
pub use identifiers::{IdValidationError, IdValidator, ToolId};
pub use tool::{
    ParamType, ParameterSchema, ParameterSpec, SchemaError, ToolArgs, ToolCall, ToolDefinition,
    ToolDescriptor, ToolHandler,
};
