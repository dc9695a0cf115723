//! # Tool Module
//!
//! Named tools with declared parameters, dispatched through a registry.
//!
//! ## Tool Lifecycle
//!
//! 1. **Registration** - a [ToolDescriptor] is added to a registry under its [ToolId]
//! 2. **Invocation** - callers pass a name and [ToolArgs], or a [ToolCall]
//! 3. **Dispatch** - the registry finds the descriptor and runs its handler
//! 4. **Result** - the handler's JSON value, or a [ToolError](crate::error::ToolError)

pub use toolgate_core::{
    ParamType, ParameterSchema, ParameterSpec, ToolArgs, ToolCall, ToolDefinition,
    ToolDescriptor, ToolHandler, ToolId,
};
pub use toolgate_tools::{
    InMemoryToolRegistry, ToolRegistry, ValidationMode, register_standard_tools, standard_tools,
};

/// Standard demo tools.
pub mod standard {
    pub use toolgate_tools::standard::*;
}
