//! Model listing, single-prompt completions and chat.

use toolgate_llm::{ChatMessage, ChatRequest, CompletionRequest, CompletionResponse};

use super::banner;
use crate::context::DemoContext;
use crate::error::CliError;

struct UsageExample {
    title: &'static str,
    prompt: &'static str,
    max_tokens: u32,
    temperature: Option<f32>,
}

const USAGE_EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: "Simple text completion",
        prompt: "The future of AI is",
        max_tokens: 100,
        temperature: None,
    },
    UsageExample {
        title: "Code generation",
        prompt: "Write a Python function to calculate the factorial of a number:",
        max_tokens: 150,
        temperature: Some(0.3),
    },
    UsageExample {
        title: "Text analysis",
        prompt: "Analyze this text and provide insights:\n\n\
                 The quick brown fox jumps over the lazy dog. \
                 This sentence contains every letter of the alphabet. \
                 It's commonly used for testing fonts and keyboards.",
        max_tokens: 200,
        temperature: None,
    },
    UsageExample {
        title: "Creative writing",
        prompt: "Write a haiku about artificial intelligence:",
        max_tokens: 100,
        temperature: Some(0.8),
    },
];

pub async fn run(ctx: &DemoContext) -> Result<(), CliError> {
    banner("🚀 Basic completions");

    println!("\n1. Available models:");
    for model in ctx.provider.list_models().await? {
        println!(
            "  - {}: {}",
            model.id,
            model.name.as_deref().unwrap_or("No description")
        );
    }

    println!("\n2. Text completion:");
    let response = complete(
        ctx,
        ctx.completion("Explain what Dedalus Labs does in simple terms.")
            .with_max_tokens(150)
            .with_temperature(0.7),
    )
    .await?;
    println!("✅ {}", response.text);

    println!("\n3. Chat completion:");
    let chat = ctx
        .provider
        .chat(
            ChatRequest::new(vec![
                ChatMessage::user("What is MCP (Model Context Protocol)?"),
                ChatMessage::assistant("MCP is a protocol for AI applications..."),
                ChatMessage::user("How does Dedalus Labs use MCP?"),
            ])
            .with_max_tokens(200)
            .with_temperature(0.8),
        )
        .await?;
    println!("✅ {}: {}", chat.message.role, chat.message.content);

    println!("\n4. Usage examples:");
    for example in USAGE_EXAMPLES {
        let mut request = ctx.completion(example.prompt).with_max_tokens(example.max_tokens);
        if let Some(temperature) = example.temperature {
            request = request.with_temperature(temperature);
        }
        let response = complete(ctx, request).await?;
        println!("  {}: {}", example.title, response.text);
    }

    Ok(())
}

async fn complete(
    ctx: &DemoContext,
    request: CompletionRequest,
) -> Result<CompletionResponse, CliError> {
    tracing::debug!(model = %request.model, "Requesting completion");
    Ok(ctx.provider.complete(request).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use toolgate_llm::{MockCompletionProvider, ProviderConfig};

    #[tokio::test]
    async fn basic_demo_sends_every_prompt() {
        let provider = MockCompletionProvider::new();
        let ctx = DemoContext::with_provider(
            ProviderConfig::default(),
            Arc::new(provider.clone()),
            false,
        );

        run(&ctx).await.unwrap();

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 2 + USAGE_EXAMPLES.len());
        assert_eq!(prompts[1], "How does Dedalus Labs use MCP?");
    }

    #[tokio::test]
    async fn basic_demo_fails_on_rejected_key() {
        let provider = MockCompletionProvider::new().with_api_key("invalid-key");
        let ctx = DemoContext::with_provider(ProviderConfig::default(), Arc::new(provider), false);

        let err = run(&ctx).await.unwrap_err();
        assert!(matches!(err, CliError::Completion(e) if e.is_auth_error()));
    }
}
