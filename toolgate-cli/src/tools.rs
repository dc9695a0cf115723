//! `toolgate tools`: list and call the standard tools directly.

use clap::Subcommand;
use serde_json::Value;
use toolgate_core::{ToolArgs, ToolDefinition};
use toolgate_tools::{InMemoryToolRegistry, ToolRegistry, register_standard_tools};

use crate::demos::pretty;
use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum ToolsCommand {
    /// List every standard tool with its input schema
    List,
    /// Call one tool with JSON arguments
    Call {
        /// Tool name, e.g. calculate
        name: String,
        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

pub async fn run_tools_command(command: ToolsCommand) -> Result<(), CliError> {
    let registry = standard_registry();
    match command {
        ToolsCommand::List => {
            for definition in list(&registry) {
                println!("{} - {}", definition.name, definition.description);
                println!("{}", pretty(&definition.input_schema));
            }
        }
        ToolsCommand::Call { name, args } => {
            let result = call(&registry, &name, &args).await?;
            println!("{}", pretty(&result));
        }
    }
    Ok(())
}

fn standard_registry() -> InMemoryToolRegistry {
    let registry = InMemoryToolRegistry::new();
    register_standard_tools(&registry);
    registry
}

fn list(registry: &impl ToolRegistry) -> Vec<ToolDefinition> {
    registry.definitions()
}

async fn call(registry: &impl ToolRegistry, name: &str, args: &str) -> Result<Value, CliError> {
    let raw: Value = serde_json::from_str(args)?;
    let args = ToolArgs::try_from(raw).map_err(CliError::InvalidArgs)?;
    tracing::debug!(tool = name, args = args.len(), "Calling tool");
    Ok(registry.execute(name, args).await?)
}
