//! # Toolgate
//!
//! Register named tools, dispatch calls to them, and put a completion
//! provider next to them.
//!
//! ## Modules
//!
//! - **[tool]**: tool model, registry and the standard tool library
//! - **[llm]**: completion provider trait, HTTP and offline providers, configuration
//! - **[error]**: error types from every layer
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use toolgate_workspace::tool::{register_standard_tools, InMemoryToolRegistry, ToolArgs, ToolRegistry};
//!
//! let registry = InMemoryToolRegistry::new();
//! register_standard_tools(&registry);
//!
//! let total = tokio_test::block_on(
//!     registry.execute("sum", ToolArgs::new().with("values", json!([1, 2, 3]))),
//! )
//! .unwrap();
//! assert_eq!(total, json!(6.0));
//! ```

pub mod error;
pub mod llm;
pub mod tool;

pub use llm::{CompletionProvider, MockCompletionProvider};
pub use tool::{InMemoryToolRegistry, ToolArgs, ToolDescriptor, ToolRegistry};
