use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use toolgate_core::{
    ParameterSchema, ToolArgs, ToolCall, ToolDefinition, ToolDescriptor, ToolError, ToolHandler,
    ToolId, ToolResult,
};
use tracing::{debug, warn};

/// Trait for registries that hold named tools and dispatch calls to them.
///
/// Implementors provide storage and single-call dispatch; batch dispatch and
/// introspection helpers come for free.
#[async_trait]
pub trait ToolRegistry: Send + Sync {
    /// Insert a descriptor, replacing any tool already registered under its name.
    fn register_descriptor(&self, descriptor: ToolDescriptor);

    /// Look up a tool by name.
    fn descriptor(&self, name: &str) -> Option<Arc<ToolDescriptor>>;

    /// Names of all registered tools, sorted.
    fn tool_names(&self) -> Vec<String>;

    /// Execute a tool by name.
    ///
    /// Fails with [`ToolError::NotFound`] when `name` is not registered, in
    /// which case no handler runs. Otherwise the handler's value or error is
    /// returned unchanged.
    async fn execute(&self, name: &str, args: ToolArgs) -> ToolResult<Value>;

    /// Execute a [`ToolCall`] without consuming it.
    async fn execute_call(&self, call: &ToolCall) -> ToolResult<Value> {
        self.execute(&call.name, call.arguments.clone()).await
    }

    /// Launch several calls together and wait for all of them.
    ///
    /// Results come back in the order the calls were given, whatever order
    /// the handlers finish in. One failing call does not affect the others.
    async fn execute_all(&self, calls: &[ToolCall]) -> Vec<ToolResult<Value>> {
        join_all(calls.iter().map(|call| self.execute_call(call))).await
    }

    /// Whether a tool is registered under `name`.
    fn contains(&self, name: &str) -> bool {
        self.descriptor(name).is_some()
    }

    /// Listing entries for every registered tool, sorted by name.
    fn definitions(&self) -> Vec<ToolDefinition> {
        self.tool_names()
            .iter()
            .filter_map(|name| self.descriptor(name))
            .map(|descriptor| descriptor.definition())
            .collect()
    }
}

/// How the registry treats declared parameter schemas at dispatch time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Schemas are documentation only; arguments pass through untouched.
    #[default]
    Advisory,
    /// Defaults are filled in and arguments checked before the handler runs.
    Strict,
}

/// In-memory tool registry for single-process use.
///
/// Tools live in a concurrent map so the registry can be shared behind an
/// `Arc` across tasks: registration is a write, dispatch only clones the
/// descriptor out of the map and never holds a map guard across an await.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use toolgate_core::{HandlerResult, ParameterSchema, ToolArgs, ToolId};
/// use toolgate_tools::{InMemoryToolRegistry, ToolRegistry};
///
/// let registry = InMemoryToolRegistry::new();
/// registry.register(
///     ToolId::parse("sum").unwrap(),
///     ParameterSchema::empty(),
///     |args: ToolArgs| async move {
///         let values = args.require_number_array("values")?;
///         HandlerResult::Ok(json!(values.iter().sum::<f64>()))
///     },
/// );
///
/// let result = tokio_test::block_on(
///     registry.execute("sum", ToolArgs::new().with("values", json!([1, 2, 3]))),
/// );
/// assert_eq!(result.unwrap(), json!(6.0));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryToolRegistry {
    tools: DashMap<ToolId, Arc<ToolDescriptor>>,
    validation: ValidationMode,
}

impl InMemoryToolRegistry {
    /// Create a new empty registry with advisory schemas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how schemas are applied at dispatch.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation
    }

    /// Register a handler under `name`, replacing any earlier registration.
    pub fn register(
        &self,
        name: ToolId,
        schema: ParameterSchema,
        handler: impl ToolHandler + 'static,
    ) {
        self.register_descriptor(ToolDescriptor::new(name, schema, handler));
    }

    /// Register under a raw name, validating it first.
    pub fn try_register(
        &self,
        name: &str,
        schema: ParameterSchema,
        handler: impl ToolHandler + 'static,
    ) -> ToolResult<()> {
        let id = ToolId::parse(name).map_err(|source| ToolError::InvalidToolId {
            attempted_name: name.to_string(),
            source,
        })?;
        self.register(id, schema, handler);
        Ok(())
    }

    /// Builder-style registration.
    pub fn with_tool(self, descriptor: ToolDescriptor) -> Self {
        self.register_descriptor(descriptor);
        self
    }

    /// Remove a tool. Normal dispatch never removes anything; this exists for tooling.
    pub fn unregister(&self, name: &str) -> Option<Arc<ToolDescriptor>> {
        self.tools.remove(name).map(|(_, descriptor)| descriptor)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn prepare_args(&self, descriptor: &ToolDescriptor, args: ToolArgs) -> ToolResult<ToolArgs> {
        match self.validation {
            ValidationMode::Advisory => Ok(args),
            ValidationMode::Strict => {
                let mut args = args;
                descriptor.schema().apply_defaults(&mut args);
                descriptor
                    .schema()
                    .validate(&args)
                    .map_err(|reason| ToolError::invalid_arguments(descriptor.name().as_str(), reason))?;
                Ok(args)
            }
        }
    }
}

#[async_trait]
impl ToolRegistry for InMemoryToolRegistry {
    fn register_descriptor(&self, descriptor: ToolDescriptor) {
        let name = descriptor.name().clone();
        let replaced = self.tools.insert(name.clone(), Arc::new(descriptor));

        if replaced.is_some() {
            warn!(tool = %name, "Replaced existing tool registration");
        } else {
            debug!(tool = %name, "Registered tool");
        }
    }

    fn descriptor(&self, name: &str) -> Option<Arc<ToolDescriptor>> {
        self.tools.get(name).map(|entry| Arc::clone(entry.value()))
    }

    fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tools
            .iter()
            .map(|entry| entry.key().to_string())
            .collect();
        names.sort();
        names
    }

    async fn execute(&self, name: &str, args: ToolArgs) -> ToolResult<Value> {
        let Some(descriptor) = self.descriptor(name) else {
            debug!(tool = %name, "Tool not found");
            return Err(ToolError::not_found(name));
        };

        let args = self.prepare_args(&descriptor, args)?;

        debug!(tool = %name, args = args.len(), "Executing tool");
        descriptor.invoke(args).await.map_err(|err| {
            debug!(tool = %name, error = %err, "Tool handler failed");
            ToolError::HandlerFailure(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolgate_core::{HandlerError, HandlerResult, ParamType, ParameterSpec};

    fn id(name: &str) -> ToolId {
        ToolId::parse(name).expect("Valid tool name")
    }

    fn uppercase(args: ToolArgs) -> impl Future<Output = HandlerResult> + Send {
        async move {
            let text = args.require_str("text")?;
            Ok(json!(text.to_uppercase()))
        }
    }

    fn reverse(args: ToolArgs) -> impl Future<Output = HandlerResult> + Send {
        async move {
            let text = args.require_str("text")?;
            Ok(json!(text.chars().rev().collect::<String>()))
        }
    }

    fn text(value: &str) -> ToolArgs {
        ToolArgs::new().with("text", value)
    }

    #[tokio::test]
    async fn registry_dispatches_to_correct_tool() {
        let registry = InMemoryToolRegistry::new();
        registry.register(id("uppercase"), ParameterSchema::empty(), uppercase);
        registry.register(id("reverse"), ParameterSchema::empty(), reverse);

        let upper = registry.execute("uppercase", text("toolgate")).await;
        let reversed = registry.execute("reverse", text("toolgate")).await;
        let missing = registry.execute("nonexistent", text("toolgate")).await;

        assert_eq!(upper.unwrap(), json!("TOOLGATE"));
        assert_eq!(reversed.unwrap(), json!("etagloot"));
        assert_eq!(missing.unwrap_err(), ToolError::not_found("nonexistent"));
    }

    #[tokio::test]
    async fn registry_replaces_duplicate_names() {
        let registry = InMemoryToolRegistry::new();
        registry.register(id("t"), ParameterSchema::empty(), uppercase);
        registry.register(id("t"), ParameterSchema::empty(), reverse);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.execute("t", text("ab")).await.unwrap(), json!("ba"));
    }

    #[tokio::test]
    async fn registry_execute_all_keeps_call_order() {
        let registry = InMemoryToolRegistry::new()
            .with_tool(ToolDescriptor::new(
                id("uppercase"),
                ParameterSchema::empty(),
                uppercase,
            ))
            .with_tool(ToolDescriptor::new(
                id("reverse"),
                ParameterSchema::empty(),
                reverse,
            ));

        let calls = vec![
            ToolCall::new("uppercase", text("hello")),
            ToolCall::new("nonexistent", text("world")),
            ToolCall::new("reverse", text("test")),
        ];
        let results = registry.execute_all(&calls).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), &json!("HELLO"));
        assert!(results[1].as_ref().unwrap_err().is_not_found());
        assert_eq!(results[2].as_ref().unwrap(), &json!("tset"));
    }

    #[tokio::test]
    async fn registry_propagates_handler_error_and_keeps_tool() {
        let registry = InMemoryToolRegistry::new();
        registry.register(id("uppercase"), ParameterSchema::empty(), uppercase);

        let err = registry
            .execute("uppercase", ToolArgs::new())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ToolError::HandlerFailure(HandlerError::missing_argument("text"))
        );

        assert!(registry.contains("uppercase"));
        assert_eq!(
            registry.execute("uppercase", text("again")).await.unwrap(),
            json!("AGAIN")
        );
    }

    #[test]
    fn registry_try_register_rejects_bad_names() {
        let registry = InMemoryToolRegistry::new();

        let err = registry
            .try_register("bad name", ParameterSchema::empty(), uppercase)
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidToolId { .. }));
        assert!(registry.is_empty());

        registry
            .try_register("good_name", ParameterSchema::empty(), uppercase)
            .unwrap();
        assert_eq!(registry.tool_names(), vec!["good_name".to_string()]);
    }

    #[tokio::test]
    async fn strict_mode_validates_and_fills_defaults() {
        let schema = ParameterSchema::empty()
            .with_param(ParameterSpec::required("text", ParamType::String))
            .with_param(ParameterSpec::optional("suffix", ParamType::String).with_default("!"));
        let registry = InMemoryToolRegistry::new().with_validation(ValidationMode::Strict);
        registry.register(id("shout"), schema, |args: ToolArgs| async move {
            let text = args.require_str("text")?;
            let suffix = args.require_str("suffix")?;
            HandlerResult::Ok(json!(format!("{text}{suffix}")))
        });

        assert_eq!(
            registry.execute("shout", text("hey")).await.unwrap(),
            json!("hey!")
        );

        let err = registry.execute("shout", ToolArgs::new()).await.unwrap_err();
        assert_eq!(
            err,
            ToolError::invalid_arguments("shout", "missing required parameter 'text'")
        );
    }

    #[test]
    fn registry_definitions_are_sorted() {
        let registry = InMemoryToolRegistry::new();
        registry.register(id("zeta"), ParameterSchema::empty(), uppercase);
        registry.register(id("alpha"), ParameterSchema::empty(), reverse);

        let names: Vec<String> = registry
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn registry_unregister_and_len() {
        let registry = InMemoryToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(id("uppercase"), ParameterSchema::empty(), uppercase);
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister("uppercase").is_some());
        assert!(registry.unregister("uppercase").is_none());
        assert!(registry.is_empty());
    }
}
