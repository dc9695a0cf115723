//! Simulated network lookups.
//!
//! Neither tool touches the network: weather is a fixed report and search
//! answers from a small built-in topic table.

use async_trait::async_trait;
use serde_json::json;
use toolgate_core::{
    HandlerResult, ParamType, ParameterSchema, ParameterSpec, ToolArgs, ToolDescriptor,
    ToolHandler, ToolId,
};

use super::timestamp;

/// Returned by `search_web` when the query is not a known topic.
pub const NO_RESULTS: &str = "No results found for this query.";

const SEARCH_TOPICS: &[(&str, &str)] = &[
    (
        "artificial intelligence",
        "AI is transforming industries worldwide...",
    ),
    (
        "machine learning",
        "Machine learning algorithms learn from data...",
    ),
    ("neural networks", "Neural networks mimic the human brain..."),
];

/// `get_weather`: current conditions for a location (simulated).
#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherTool;

impl WeatherTool {
    pub const NAME: &'static str = "get_weather";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Get current weather for a location")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::required("location", ParamType::String).with_description("City name"),
        )
    }
}

#[async_trait]
impl ToolHandler for WeatherTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let location = args.require_str("location")?;

        Ok(json!({
            "location": location,
            "temperature": "22°C",
            "condition": "Sunny",
            "humidity": "65%",
        }))
    }
}

/// `search_web`: looks a query up in the topic table (simulated).
///
/// Matching is case-insensitive on the whole query.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchWebTool;

impl SearchWebTool {
    pub const NAME: &'static str = "search_web";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Search the web for information (simulated)")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::required("query", ParamType::String).with_description("Search query"),
        )
    }

    pub fn lookup(query: &str) -> &'static str {
        let query = query.to_lowercase();
        SEARCH_TOPICS
            .iter()
            .find(|(topic, _)| *topic == query)
            .map(|(_, summary)| *summary)
            .unwrap_or(NO_RESULTS)
    }
}

#[async_trait]
impl ToolHandler for SearchWebTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let query = args.require_str("query")?;

        Ok(json!({
            "query": query,
            "results": Self::lookup(query),
            "timestamp": timestamp(),
        }))
    }
}
