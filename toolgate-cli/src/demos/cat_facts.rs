//! Cat facts walkthrough: random and categorised facts, an explainer, a
//! story built from several facts fetched together, and a short quiz.
//!
//! Without a usable credential, or when the provider fails, the explainer
//! and the story fall back to fixed templates so the walkthrough always
//! completes.

use serde_json::Value;
use toolgate_core::{ToolArgs, ToolCall};
use toolgate_llm::{ChatMessage, ChatRequest};
use toolgate_tools::ToolRegistry;
use toolgate_tools::standard::CatFactTool;
use tracing::warn;

use super::{banner, string_field};
use crate::context::DemoContext;
use crate::error::CliError;

const STORY_CATEGORIES: [&str; 3] = ["behavior", "science", "funny"];

struct QuizQuestion {
    question: &'static str,
    answer: &'static str,
}

const QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        question: "What percentage of their lives do cats spend sleeping?",
        answer: "70%",
    },
    QuizQuestion {
        question: "What is a group of cats called?",
        answer: "clowder",
    },
    QuizQuestion {
        question: "How many muscles do cats have controlling their ears?",
        answer: "over 30",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub question: String,
    pub fact: String,
    pub correct: bool,
}

#[derive(Debug)]
pub struct CatFactsReport {
    pub random_facts: Vec<Value>,
    pub category_facts: Vec<Value>,
    pub explanation: String,
    pub story_facts: Vec<String>,
    pub story: String,
    pub quiz: Vec<QuizOutcome>,
}

impl CatFactsReport {
    pub fn score(&self) -> usize {
        self.quiz.iter().filter(|q| q.correct).count()
    }
}

pub async fn run(ctx: &DemoContext) -> Result<CatFactsReport, CliError> {
    banner("🐱 Cat facts");
    ctx.registry.register_descriptor(CatFactTool::descriptor());

    println!("\n1. Random cat facts:");
    let mut random_facts = Vec::with_capacity(2);
    for _ in 0..2 {
        random_facts.push(fetch_fact(ctx, None).await?);
    }

    println!("\n2. Facts by category:");
    let mut category_facts = Vec::with_capacity(STORY_CATEGORIES.len());
    for category in STORY_CATEGORIES {
        category_facts.push(fetch_fact(ctx, Some(category)).await?);
    }

    println!("\n3. Fact explainer:");
    let fact = fetch_fact(ctx, None).await?;
    let explanation = explain(ctx, string_field(CatFactTool::NAME, &fact, "fact")?).await;
    println!("🧠 {explanation}");

    println!("\n4. Cat story:");
    let story_facts = story_facts(ctx).await?;
    let story = tell_story(ctx, &story_facts).await;
    println!("📖 {story}");

    println!("\n5. Quiz:");
    let quiz = run_quiz(ctx).await?;

    let report = CatFactsReport {
        random_facts,
        category_facts,
        explanation,
        story_facts,
        story,
        quiz,
    };
    println!(
        "\n🏆 Quiz complete! Score: {}/{}",
        report.score(),
        report.quiz.len()
    );
    Ok(report)
}

async fn fetch_fact(ctx: &DemoContext, category: Option<&str>) -> Result<Value, CliError> {
    let args = match category {
        Some(category) => ToolArgs::new().with("category", category),
        None => ToolArgs::new(),
    };
    let result = ctx.registry.execute(CatFactTool::NAME, args).await?;

    println!("📋 {}", string_field(CatFactTool::NAME, &result, "fact")?);
    println!("   Category: {}", string_field(CatFactTool::NAME, &result, "category")?);
    println!("   Source: {}", string_field(CatFactTool::NAME, &result, "source")?);
    Ok(result)
}

/// Facts for the story, one per category, fetched concurrently.
async fn story_facts(ctx: &DemoContext) -> Result<Vec<String>, CliError> {
    let calls: Vec<ToolCall> = STORY_CATEGORIES
        .iter()
        .map(|category| {
            ToolCall::new(CatFactTool::NAME, ToolArgs::new().with("category", *category))
        })
        .collect();

    let mut facts = Vec::with_capacity(calls.len());
    for result in ctx.registry.execute_all(&calls).await {
        let result = result?;
        facts.push(string_field(CatFactTool::NAME, &result, "fact")?.to_string());
    }
    Ok(facts)
}

async fn explain(ctx: &DemoContext, fact: &str) -> String {
    if !ctx.has_credential() {
        return fallback_explanation(fact);
    }

    let request = ChatRequest::new(vec![ChatMessage::user(format!(
        "Please explain this cat fact in simple, engaging terms: \"{fact}\"\n\n\
         Make it educational and fun, suitable for cat lovers of all ages."
    ))])
    .with_model(&ctx.config.default_model)
    .with_max_tokens(200)
    .with_temperature(0.8);

    match ctx.provider.chat(request).await {
        Ok(response) => response.message.content,
        Err(e) => {
            warn!(error = %e, "Explainer request failed, using fallback");
            fallback_explanation(fact)
        }
    }
}

async fn tell_story(ctx: &DemoContext, facts: &[String]) -> String {
    if !ctx.has_credential() {
        return fallback_story(facts);
    }

    let listed: Vec<String> = facts
        .iter()
        .enumerate()
        .map(|(i, fact)| format!("Fact {}: {fact}", i + 1))
        .collect();
    let request = ChatRequest::new(vec![ChatMessage::user(format!(
        "Create a short, engaging story about a cat using these facts:\n\n{}\n\n\
         Make it a fun, educational story that incorporates these facts naturally.",
        listed.join("\n")
    ))])
    .with_model(&ctx.config.default_model)
    .with_max_tokens(300)
    .with_temperature(0.9);

    match ctx.provider.chat(request).await {
        Ok(response) => response.message.content,
        Err(e) => {
            warn!(error = %e, "Story request failed, using fallback");
            fallback_story(facts)
        }
    }
}

fn fallback_explanation(fact: &str) -> String {
    format!(
        "This fascinating fact about cats reveals their incredible biological adaptations. \
         {fact} This demonstrates the remarkable evolution of feline species and their unique \
         characteristics that make them such beloved companions."
    )
}

fn fallback_story(facts: &[String]) -> String {
    let fact = |i: usize| facts.get(i).map(String::as_str).unwrap_or_default();
    format!(
        "Once upon a time, there was a curious cat named Whiskers who lived in a cozy little \
         house. {} This behavior made Whiskers very popular with the neighborhood children. \
         One day, Whiskers discovered something amazing: {} This scientific fact helped \
         Whiskers understand why he could hear the tiniest sounds. But the most surprising \
         thing happened when Whiskers learned that {} Inspired by this funny fact, Whiskers \
         decided to run for mayor of his town!",
        fact(0),
        fact(1),
        fact(2)
    )
}

/// An answer counts as correct when the drawn general fact mentions it.
async fn run_quiz(ctx: &DemoContext) -> Result<Vec<QuizOutcome>, CliError> {
    let mut outcomes = Vec::with_capacity(QUIZ.len());
    for (i, q) in QUIZ.iter().enumerate() {
        println!("\nQuestion {}: {}", i + 1, q.question);
        let result = ctx
            .registry
            .execute(CatFactTool::NAME, ToolArgs::new().with("category", "general"))
            .await?;
        let fact = string_field(CatFactTool::NAME, &result, "fact")?;

        let correct = fact.to_lowercase().contains(&q.answer.to_lowercase());
        println!("{}", if correct { "✅ Correct!" } else { "❌ Incorrect!" });
        println!("📋 Fact: {fact}");

        outcomes.push(QuizOutcome {
            question: q.question.to_string(),
            fact: fact.to_string(),
            correct,
        });
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use toolgate_llm::{MockCompletionProvider, ProviderConfig};
    use toolgate_tools::standard::cat_facts::{CAT_FACT_SOURCE, facts_for};

    #[tokio::test]
    async fn offline_run_uses_fallbacks() {
        let ctx = DemoContext::offline();
        let report = run(&ctx).await.unwrap();

        assert_eq!(report.random_facts.len(), 2);
        for (fact, category) in report.category_facts.iter().zip(STORY_CATEGORIES) {
            assert_eq!(fact["category"], category);
            assert_eq!(fact["source"], CAT_FACT_SOURCE);
        }
        assert!(report.explanation.starts_with("This fascinating fact about cats"));
        assert!(report.story.starts_with("Once upon a time"));
        for fact in &report.story_facts {
            assert!(report.story.contains(fact.as_str()));
        }
        assert!(report.score() <= QUIZ.len());
    }

    #[tokio::test]
    async fn story_facts_follow_category_order() {
        let ctx = DemoContext::offline();
        ctx.registry.register_descriptor(CatFactTool::descriptor());

        let facts = story_facts(&ctx).await.unwrap();
        for (fact, category) in facts.iter().zip(STORY_CATEGORIES) {
            assert!(facts_for(category).contains(&fact.as_str()), "{category}");
        }
    }

    #[tokio::test]
    async fn quiz_checks_answer_against_fact() {
        let ctx = DemoContext::offline();
        ctx.registry.register_descriptor(CatFactTool::descriptor());

        let outcomes = run_quiz(&ctx).await.unwrap();
        assert_eq!(outcomes.len(), QUIZ.len());
        for (outcome, q) in outcomes.iter().zip(QUIZ) {
            let expected = outcome.fact.to_lowercase().contains(&q.answer.to_lowercase());
            assert_eq!(outcome.correct, expected);
            assert!(facts_for("general").contains(&outcome.fact.as_str()));
        }
    }

    #[tokio::test]
    async fn credential_routes_explainer_through_provider() {
        let provider = MockCompletionProvider::new().with_reply("Cats nap a lot.");
        let config = ProviderConfig::default().with_api_key("sk-live-key");
        let ctx = DemoContext::with_provider(config, Arc::new(provider.clone()), false);

        let explanation = explain(&ctx, "Cats spend 70% of their lives sleeping.").await;
        assert_eq!(explanation, "Cats nap a lot.");
        assert!(provider.prompts()[0].contains("Cats spend 70%"));
    }

    #[tokio::test]
    async fn provider_failure_falls_back() {
        let provider = MockCompletionProvider::new().with_api_key("invalid-key");
        let config = ProviderConfig::default().with_api_key("sk-live-key");
        let ctx = DemoContext::with_provider(config, Arc::new(provider), false);

        let facts = vec!["a.".to_string(), "b.".to_string(), "c.".to_string()];
        let story = tell_story(&ctx, &facts).await;
        assert_eq!(story, fallback_story(&facts));
    }
}
