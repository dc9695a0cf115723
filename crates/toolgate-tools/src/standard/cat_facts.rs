//! Cat facts, served from a built-in table by category.

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use serde_json::json;
use toolgate_core::{
    HandlerResult, ParamType, ParameterSchema, ParameterSpec, ToolArgs, ToolDescriptor,
    ToolHandler, ToolId,
};

use super::timestamp;

/// Source label attached to every fact.
pub const CAT_FACT_SOURCE: &str = "danny/cat-facts MCP Server";

pub const DEFAULT_CATEGORY: &str = "general";

pub const CATEGORIES: [&str; 5] = ["general", "behavior", "history", "science", "funny"];

const GENERAL: &[&str] = &[
    "Cats spend 70% of their lives sleeping.",
    "A group of cats is called a 'clowder'.",
    "Cats have over 30 muscles controlling their ears.",
    "A cat's purr vibrates at 20-140 Hz, which can promote healing.",
];

const BEHAVIOR: &[&str] = &[
    "Cats knead with their paws when they're happy, a behavior from kittenhood.",
    "When cats slow-blink at you, it's a sign of trust and affection.",
    "Cats have a 'third eyelid' called a nictitating membrane.",
    "Cats can rotate their ears 180 degrees independently.",
];

const HISTORY: &[&str] = &[
    "Ancient Egyptians worshipped cats and mummified them.",
    "The first cat show was held in London in 1871.",
    "Cats were brought to America by European settlers in the 1600s.",
    "The oldest known pet cat existed 9,500 years ago.",
];

const SCIENCE: &[&str] = &[
    "Cats have a specialized collarbone that allows them to always land on their feet.",
    "A cat's nose print is unique, like human fingerprints.",
    "Cats can't taste sweetness due to a genetic mutation.",
    "Cats have 32 muscles in each ear (humans have only 6).",
];

const FUNNY: &[&str] = &[
    "Cats have been known to survive falls from over 32 stories high.",
    "A cat named Stubbs was the honorary mayor of Talkeetna, Alaska for 20 years.",
    "Cats can make over 100 different sounds, while dogs only make about 10.",
    "A cat's brain is 90% similar to a human's brain.",
];

/// Facts for a category. Unknown categories get the general facts.
pub fn facts_for(category: &str) -> &'static [&'static str] {
    match category {
        "behavior" => BEHAVIOR,
        "history" => HISTORY,
        "science" => SCIENCE,
        "funny" => FUNNY,
        _ => GENERAL,
    }
}

fn random_fact(category: &str) -> &'static str {
    let facts = facts_for(category);
    facts.choose(&mut rand::rng()).copied().unwrap_or(GENERAL[0])
}

/// `get_cat_fact`: a random fact, optionally from one category.
///
/// The requested category is echoed back as given, even when it is unknown
/// and the fact came from the general table. An empty category counts as
/// missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatFactTool;

impl CatFactTool {
    pub const NAME: &'static str = "get_cat_fact";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Get a random cat fact from Danny's Cat Facts MCP Server")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::optional("category", ParamType::String)
                .with_description("Category of cat fact (optional)")
                .with_allowed_values(CATEGORIES),
        )
    }
}

#[async_trait]
impl ToolHandler for CatFactTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let category = args
            .str("category")
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let fact = random_fact(category);

        Ok(json!({
            "fact": fact,
            "category": category,
            "source": CAT_FACT_SOURCE,
            "timestamp": timestamp(),
        }))
    }
}
