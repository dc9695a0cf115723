//! Tool registration and dispatch: greetings, statistics, search-backed
//! completion, a validate-then-notify workflow and a failing tool.

use serde_json::{Value, json};
use toolgate_core::ToolArgs;
use toolgate_tools::ToolRegistry;
use toolgate_tools::standard::{
    AnalyzeDataTool, GreetTool, RiskyOperationTool, SearchWebTool, SendNotificationTool,
    ValidateEmailTool,
};
use tracing::warn;

use super::{banner, execute_and_show, string_field};
use crate::context::DemoContext;
use crate::error::CliError;

const AGENT_PROMPT: &str = "You are an AI research assistant. Use the available tools to help \
                            answer questions. When a user asks about a topic, search for \
                            information and then provide a comprehensive answer.";

#[derive(Debug)]
pub struct McpReport {
    pub greeting: Value,
    pub analysis: Value,
    pub agent_answer: Option<String>,
    pub notification: Option<Value>,
    pub caught_error: Option<String>,
}

pub async fn run(ctx: &DemoContext) -> Result<McpReport, CliError> {
    banner("🔌 Tool registration and dispatch");

    println!("\n1. Simple tool:");
    ctx.registry.register_descriptor(GreetTool::descriptor());
    let greeting = execute_and_show(
        ctx,
        "Tool result",
        GreetTool::NAME,
        ToolArgs::new().with("name", "Alice").with("language", "Spanish"),
    )
    .await?;

    println!("\n2. Data processing:");
    ctx.registry.register_descriptor(AnalyzeDataTool::descriptor());
    let analysis = execute_and_show(
        ctx,
        "Analysis result",
        AnalyzeDataTool::NAME,
        ToolArgs::new().with("data", json!([1, 5, 3, 9, 2, 8, 4, 7, 6])),
    )
    .await?;

    println!("\n3. Search-backed answer:");
    ctx.registry.register_descriptor(SearchWebTool::descriptor());
    let agent_answer = match research(ctx, "Tell me about artificial intelligence").await {
        Ok(answer) => {
            println!("Agent response: {answer}");
            Some(answer)
        }
        Err(e) => {
            warn!(error = %e, "Agent step failed");
            None
        }
    };

    println!("\n4. Multi-step workflow:");
    ctx.registry.register_descriptor(ValidateEmailTool::descriptor());
    ctx.registry.register_descriptor(SendNotificationTool::descriptor());
    let notification = notify(ctx, "user@example.com", "Welcome to our service!").await?;

    println!("\n5. Tool errors:");
    ctx.registry.register_descriptor(RiskyOperationTool::descriptor());
    execute_and_show(
        ctx,
        "Success case",
        RiskyOperationTool::NAME,
        ToolArgs::new().with("operation", "succeed"),
    )
    .await?;
    let caught_error = match ctx
        .registry
        .execute(
            RiskyOperationTool::NAME,
            ToolArgs::new().with("operation", RiskyOperationTool::FAILING_OPERATION),
        )
        .await
    {
        Ok(value) => {
            println!("Failure case unexpectedly succeeded: {value}");
            None
        }
        Err(e) => {
            println!("Caught expected error: {e}");
            Some(e.to_string())
        }
    };

    Ok(McpReport {
        greeting,
        analysis,
        agent_answer,
        notification,
        caught_error,
    })
}

async fn research(ctx: &DemoContext, question: &str) -> Result<String, CliError> {
    let search = ctx
        .registry
        .execute(SearchWebTool::NAME, ToolArgs::new().with("query", question))
        .await?;
    let results = string_field(SearchWebTool::NAME, &search, "results")?;

    let prompt = format!(
        "{AGENT_PROMPT}\n\nUser Question: {question}\nSearch Results: {results}\n\n\
         Please provide a comprehensive answer based on the search results."
    );
    let response = ctx
        .provider
        .complete(ctx.completion(prompt).with_max_tokens(300))
        .await?;
    Ok(response.text)
}

/// Validate the address, then notify only if it is valid.
async fn notify(ctx: &DemoContext, email: &str, message: &str) -> Result<Option<Value>, CliError> {
    let validation = execute_and_show(
        ctx,
        "Email validation",
        ValidateEmailTool::NAME,
        ToolArgs::new().with("email", email),
    )
    .await?;

    if validation["is_valid"].as_bool() != Some(true) {
        println!("Invalid email address, skipping notification");
        return Ok(None);
    }

    let notification = execute_and_show(
        ctx,
        "Notification sent",
        SendNotificationTool::NAME,
        ToolArgs::new()
            .with("message", message)
            .with("recipient", email),
    )
    .await?;
    Ok(Some(notification))
}
