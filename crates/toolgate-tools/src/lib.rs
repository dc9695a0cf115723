//! # Toolgate Tools
//!
//! Tool registries and a standard library of demo tools.
//!
//! ## Features
//!
//! - **Registry** (`registry`): register tools by name, dispatch calls to
//!   them one at a time or as a concurrent batch
//! - **Standard tools** (`standard`, on by default): greetings, statistics,
//!   arithmetic, simulated weather and search, notifications, cat facts
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use toolgate_core::ToolArgs;
//! use toolgate_tools::{register_standard_tools, InMemoryToolRegistry, ToolRegistry};
//!
//! let registry = InMemoryToolRegistry::new();
//! register_standard_tools(&registry);
//!
//! let greeting = tokio_test::block_on(
//!     registry.execute("greet", ToolArgs::new().with("name", "Alice")),
//! )
//! .unwrap();
//! assert_eq!(greeting["greeting"], json!("Hello, Alice! Nice to meet you."));
//! ```

/// Tool registry trait and the in-memory implementation.
pub mod registry;
/// Standard tool library.
#[cfg(feature = "standard")]
pub mod standard;

pub use registry::{InMemoryToolRegistry, ToolRegistry, ValidationMode};
#[cfg(feature = "standard")]
pub use standard::{register_standard_tools, standard_tools};
pub use toolgate_core::{ToolArgs, ToolCall, ToolDescriptor, ToolError, ToolResult};
