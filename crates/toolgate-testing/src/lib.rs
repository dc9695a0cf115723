//! # Toolgate Testing
//!
//! Test helpers for code built on Toolgate registries.
//!
//! - **Mock tools**: [`MockTool`] returns scripted results and records its calls
//! - **Timing**: [`DelayedTool`] and [`CompletionLog`] make completion order observable
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use toolgate_core::ToolArgs;
//! use toolgate_testing::MockTool;
//!
//! let mock = MockTool::new("echo").with_default_response("echo response");
//! let descriptor = mock.descriptor();
//!
//! let result = tokio_test::block_on(descriptor.invoke(ToolArgs::new())).unwrap();
//! assert_eq!(result, json!("echo response"));
//! assert_eq!(mock.call_count(), 1);
//! ```

/// Mock tools for predictable testing
pub mod mock_tools;

pub use mock_tools::{CompletionLog, DelayedTool, MockTool};
