//! Tool-assisted completion, streaming output and expected provider errors.

use futures::StreamExt;
use serde_json::Value;
use std::io::Write;
use toolgate_core::ToolArgs;
use toolgate_llm::{CompletionError, CompletionRequest};
use toolgate_tools::ToolRegistry;
use toolgate_tools::standard::{CalculateTool, WeatherTool};
use tracing::warn;

use super::{banner, execute_and_show};
use crate::context::DemoContext;
use crate::error::CliError;

#[derive(Debug)]
pub struct AdvancedReport {
    pub weather: Value,
    pub calculation: Value,
    pub summary: Option<String>,
    pub streamed: String,
    pub model_error: Option<String>,
    pub auth_error: Option<String>,
}

pub async fn run(ctx: &DemoContext) -> Result<AdvancedReport, CliError> {
    banner("🧪 Tool-assisted completion, streaming and errors");

    println!("\n1. Tools:");
    ctx.registry.register_descriptor(WeatherTool::descriptor());
    ctx.registry.register_descriptor(CalculateTool::descriptor());
    execute_and_show(
        ctx,
        "Weather tool result",
        WeatherTool::NAME,
        ToolArgs::new().with("location", "San Francisco"),
    )
    .await?;
    execute_and_show(
        ctx,
        "Calculator tool result",
        CalculateTool::NAME,
        ToolArgs::new().with("expression", "2 + 2 * 3"),
    )
    .await?;

    println!("\n2. Agent with tools:");
    let weather = execute_and_show(
        ctx,
        "Agent used weather tool",
        WeatherTool::NAME,
        ToolArgs::new().with("location", "New York"),
    )
    .await?;
    let calculation = execute_and_show(
        ctx,
        "Agent used calculator tool",
        CalculateTool::NAME,
        ToolArgs::new().with("expression", "15 * 8 + 42"),
    )
    .await?;
    let summary = match summarize(ctx, &weather, &calculation).await {
        Ok(text) => {
            println!("Agent response: {text}");
            Some(text)
        }
        Err(e) => {
            warn!(error = %e, "Agent summary failed");
            None
        }
    };

    println!("\n3. Streaming:");
    let streamed = match stream_story(ctx).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Streaming failed");
            String::new()
        }
    };

    println!("\n4. Error handling:");
    let model_error = expect_error(
        ctx.provider
            .complete(
                CompletionRequest::new("Hello world")
                    .with_model("invalid-model-name")
                    .with_max_tokens(10),
            )
            .await,
        "Caught expected error",
    );
    let invalid = ctx.invalid_key_provider()?;
    let auth_error = expect_error(
        invalid
            .complete(CompletionRequest::new("Hello world").with_max_tokens(10))
            .await,
        "Caught authentication error",
    );

    Ok(AdvancedReport {
        weather,
        calculation,
        summary,
        streamed,
        model_error,
        auth_error,
    })
}

async fn summarize(
    ctx: &DemoContext,
    weather: &Value,
    calculation: &Value,
) -> Result<String, CliError> {
    let prompt = format!(
        "Based on the tool results:\nWeather: {weather}\nCalculation: {calculation}\n\n\
         Please provide a helpful summary of these results."
    );
    let response = ctx
        .provider
        .complete(ctx.completion(prompt).with_max_tokens(200))
        .await?;
    Ok(response.text)
}

/// Print fragments as they arrive and return the whole text.
async fn stream_story(ctx: &DemoContext) -> Result<String, CliError> {
    let mut stream = ctx
        .provider
        .complete_stream(
            ctx.completion("Write a short story about a robot learning to paint.")
                .with_max_tokens(300),
        )
        .await?;

    println!("{}", "─".repeat(50));
    let mut text = String::new();
    let mut stdout = std::io::stdout();
    while let Some(fragment) = stream.next().await {
        let fragment = fragment?;
        print!("{fragment}");
        let _ = stdout.flush();
        text.push_str(&fragment);
    }
    println!("\n{}", "─".repeat(50));

    Ok(text)
}

fn expect_error<T>(result: Result<T, CompletionError>, label: &str) -> Option<String> {
    match result {
        Ok(_) => {
            println!("{label}: none (request succeeded)");
            None
        }
        Err(e) => {
            println!("✅ {label}: {e}");
            Some(e.to_string())
        }
    }
}
