//! Numeric dataset tools.

use async_trait::async_trait;
use serde_json::json;
use toolgate_core::{
    HandlerError, HandlerResult, ParamType, ParameterSchema, ParameterSpec, ToolArgs,
    ToolDescriptor, ToolHandler, ToolId,
};

/// `analyze_data`: summary statistics over an array of numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyzeDataTool;

impl AnalyzeDataTool {
    pub const NAME: &'static str = "analyze_data";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Analyze a dataset and provide insights")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::required("data", ParamType::Array)
                .with_description("Array of numbers to analyze"),
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[async_trait]
impl ToolHandler for AnalyzeDataTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let data = args.require_number_array("data")?;
        if data.is_empty() {
            return Err(HandlerError::new("argument 'data' must not be empty"));
        }

        let sum: f64 = data.iter().sum();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(json!({
            "count": data.len(),
            "sum": sum,
            "average": round2(sum / data.len() as f64),
            "min": min,
            "max": max,
            "range": max - min,
        }))
    }
}

/// `sum`: adds up an array of numbers. An empty array sums to zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct SumTool;

impl SumTool {
    pub const NAME: &'static str = "sum";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Add up a list of numbers")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::required("values", ParamType::Array)
                .with_description("Numbers to add"),
        )
    }
}

#[async_trait]
impl ToolHandler for SumTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let values = args.require_number_array("values")?;
        Ok(json!(values.iter().sum::<f64>()))
    }
}
