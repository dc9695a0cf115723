//! Text tools: greetings and email validation.

use async_trait::async_trait;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use toolgate_core::{
    HandlerResult, ParamType, ParameterSchema, ParameterSpec, ToolArgs, ToolDescriptor,
    ToolHandler, ToolId,
};

use super::timestamp;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// `greet`: a personalized greeting.
///
/// Knows English, Spanish, French and German; any other language falls back
/// to English.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreetTool;

impl GreetTool {
    pub const NAME: &'static str = "greet";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Generate a personalized greeting")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty()
            .with_param(
                ParameterSpec::required("name", ParamType::String)
                    .with_description("Name of the person to greet"),
            )
            .with_param(
                ParameterSpec::optional("language", ParamType::String)
                    .with_description("Language for the greeting")
                    .with_default("English"),
            )
    }

    fn greeting(name: &str, language: &str) -> String {
        match language {
            "Spanish" => format!("¡Hola, {name}! Mucho gusto."),
            "French" => format!("Bonjour, {name}! Enchanté."),
            "German" => format!("Hallo, {name}! Freut mich."),
            _ => format!("Hello, {name}! Nice to meet you."),
        }
    }
}

#[async_trait]
impl ToolHandler for GreetTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let name = args.require_str("name")?;
        let language = args.str("language").unwrap_or("English");

        Ok(json!({
            "greeting": Self::greeting(name, language),
            "timestamp": timestamp(),
        }))
    }
}

/// `validate_email`: checks the shape of an email address.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateEmailTool;

impl ValidateEmailTool {
    pub const NAME: &'static str = "validate_email";

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(ToolId::new_unchecked(Self::NAME), Self::schema(), Self)
            .with_description("Validate an email address format")
    }

    pub fn schema() -> ParameterSchema {
        ParameterSchema::empty().with_param(
            ParameterSpec::required("email", ParamType::String)
                .with_description("Email address to validate"),
        )
    }

    pub fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }
}

#[async_trait]
impl ToolHandler for ValidateEmailTool {
    async fn call(&self, args: ToolArgs) -> HandlerResult {
        let email = args.require_str("email")?;

        Ok(json!({
            "email": email,
            "is_valid": Self::is_valid(email),
            "timestamp": timestamp(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "Hello, Alice! Nice to meet you.")]
    #[case(Some("Spanish"), "¡Hola, Alice! Mucho gusto.")]
    #[case(Some("French"), "Bonjour, Alice! Enchanté.")]
    #[case(Some("German"), "Hallo, Alice! Freut mich.")]
    #[case(Some("Klingon"), "Hello, Alice! Nice to meet you.")]
    #[tokio::test]
    async fn greet_in_language(#[case] language: Option<&str>, #[case] expected: &str) {
        let mut args = ToolArgs::new().with("name", "Alice");
        if let Some(language) = language {
            args.insert("language", language);
        }

        let result = GreetTool.call(args).await.unwrap();
        assert_eq!(result["greeting"], json!(expected));
        assert!(result["timestamp"].is_string());
    }

    #[tokio::test]
    async fn greet_requires_name() {
        let err = GreetTool.call(ToolArgs::new()).await.unwrap_err();
        assert_eq!(err.message(), "missing required argument 'name'");
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last@sub.domain.org", true)]
    #[case("no-at-sign.com", false)]
    #[case("spaces in@example.com", false)]
    #[case("user@nodot", false)]
    #[case("@example.com", false)]
    fn email_shape(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(ValidateEmailTool::is_valid(email), valid);
    }

    #[tokio::test]
    async fn validate_email_reports_flag() {
        let result = ValidateEmailTool
            .call(ToolArgs::new().with("email", "user@example.com"))
            .await
            .unwrap();
        assert_eq!(result["email"], json!("user@example.com"));
        assert_eq!(result["is_valid"], json!(true));
    }
}
