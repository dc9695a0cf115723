use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod context;
mod demos;
mod error;
mod tools;

use context::DemoContext;
use demos::{DemoKind, run_demo};
use tools::{ToolsCommand, run_tools_command};

#[derive(Parser, Debug)]
#[command(name = "toolgate", version)]
#[command(about = "Toolgate CLI - tool registry and completion provider demos")]
struct Cli {
    /// TOML file with a [provider] table; the environment is used otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Never contact the remote API, even when a key is configured
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a demo flow
    Demo {
        #[arg(value_enum, default_value = "all")]
        kind: DemoKind,
    },
    /// Inspect and call the standard tools
    Tools {
        #[command(subcommand)]
        command: ToolsCommand,
    },
}

#[tokio::main]
async fn main() {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { kind } => {
            let ctx = match DemoContext::from_options(cli.config.as_deref(), cli.offline) {
                Ok(ctx) => ctx,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to set up demo");
                    std::process::exit(1);
                }
            };
            if let Err(e) = run_demo(kind, &ctx).await {
                tracing::error!(demo = ?kind, error = %e, "Demo failed");
                std::process::exit(1);
            }
        }
        Commands::Tools { command } => {
            if let Err(e) = run_tools_command(command).await {
                tracing::error!(error = %e, "Tools command failed");
                std::process::exit(1);
            }
        }
    }
}
