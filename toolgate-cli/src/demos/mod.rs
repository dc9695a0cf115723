//! Demo flows: completions, tool registration and dispatch, tool-assisted
//! completions, streaming, error handling and the cat facts walkthrough.
//!
//! Console output is for people; the returned reports are what tests check.

use clap::ValueEnum;
use serde_json::Value;
use toolgate_core::ToolArgs;
use toolgate_tools::ToolRegistry;

use crate::context::DemoContext;
use crate::error::CliError;

pub mod advanced;
pub mod basic;
pub mod cat_facts;
pub mod mcp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Model listing, completions and chat
    Basic,
    /// Tool registration, dispatch and multi-step workflows
    Mcp,
    /// Tool-assisted completion, streaming and error handling
    Advanced,
    /// Cat facts: categories, explainer, story and quiz
    CatFacts,
    /// Every demo in order
    All,
}

pub async fn run_demo(kind: DemoKind, ctx: &DemoContext) -> Result<(), CliError> {
    match kind {
        DemoKind::Basic => basic::run(ctx).await,
        DemoKind::Mcp => mcp::run(ctx).await.map(drop),
        DemoKind::Advanced => advanced::run(ctx).await.map(drop),
        DemoKind::CatFacts => cat_facts::run(ctx).await.map(drop),
        DemoKind::All => {
            basic::run(ctx).await?;
            mcp::run(ctx).await?;
            advanced::run(ctx).await?;
            cat_facts::run(ctx).await?;
            Ok(())
        }
    }
}

/// Execute a tool and print its result.
pub(crate) async fn execute_and_show(
    ctx: &DemoContext,
    label: &str,
    tool: &str,
    args: ToolArgs,
) -> Result<Value, CliError> {
    let result = ctx.registry.execute(tool, args).await?;
    println!("{label}: {}", pretty(&result));
    Ok(result)
}

pub(crate) fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub(crate) fn banner(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

/// Read a string field out of a tool result.
pub(crate) fn string_field<'a>(tool: &str, value: &'a Value, field: &str) -> Result<&'a str, CliError> {
    value[field]
        .as_str()
        .ok_or_else(|| CliError::unexpected_output(tool, format!("missing string field '{field}'")))
}
