//! # Standard Tool Library
//!
//! Ready-made tools for demos and tests. Each tool is a unit struct that
//! implements [`ToolHandler`](toolgate_core::ToolHandler) and exposes a
//! `descriptor()` with its name, description and parameter schema.
//!
//! ## Tool Domains
//!
//! - **Text**: `greet`, `validate_email`
//! - **Data**: `analyze_data`, `sum`, `calculate`
//! - **Network (simulated)**: `get_weather`, `search_web`
//! - **Workflow**: `send_notification`, `risky_operation`
//! - **Cat facts**: `get_cat_fact`
//!
//! ## Usage
//!
//! ```rust
//! use toolgate_tools::{register_standard_tools, InMemoryToolRegistry, ToolRegistry};
//!
//! let registry = InMemoryToolRegistry::new();
//! register_standard_tools(&registry);
//! assert!(registry.contains("get_cat_fact"));
//! ```

/// Cat facts by category
pub mod cat_facts;
/// Dataset statistics and sums
pub mod data;
/// Restricted arithmetic evaluation
pub mod math;
/// Simulated lookups
pub mod network;
/// Greetings and email checks
pub mod text;
/// Notification and failure-on-request steps
pub mod workflow;

pub use cat_facts::CatFactTool;
pub use data::{AnalyzeDataTool, SumTool};
pub use math::{CalculateTool, EvalError};
pub use network::{SearchWebTool, WeatherTool};
pub use text::{GreetTool, ValidateEmailTool};
pub use workflow::{RiskyOperationTool, SendNotificationTool};

use chrono::{SecondsFormat, Utc};
use toolgate_core::ToolDescriptor;

use crate::registry::ToolRegistry;

/// Current time as an RFC 3339 UTC string with millisecond precision.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Descriptors for every standard tool.
pub fn standard_tools() -> Vec<ToolDescriptor> {
    vec![
        GreetTool::descriptor(),
        AnalyzeDataTool::descriptor(),
        WeatherTool::descriptor(),
        CalculateTool::descriptor(),
        SearchWebTool::descriptor(),
        ValidateEmailTool::descriptor(),
        SendNotificationTool::descriptor(),
        RiskyOperationTool::descriptor(),
        CatFactTool::descriptor(),
        SumTool::descriptor(),
    ]
}

/// Register every standard tool, replacing same-named registrations.
pub fn register_standard_tools<R: ToolRegistry + ?Sized>(registry: &R) {
    for descriptor in standard_tools() {
        registry.register_descriptor(descriptor);
    }
}
