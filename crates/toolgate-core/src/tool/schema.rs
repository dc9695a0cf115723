//! Parameter schemas.
//!
//! A [`ParameterSchema`] is advisory metadata: it documents what a tool
//! accepts and renders to the JSON Schema object tool listings expect. The
//! registry only checks arguments against it when strict validation is
//! switched on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

use super::args::ToolArgs;

/// Primitive type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    /// JSON Schema type keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
            ParamType::Object => "object",
        }
    }

    /// Map a JSON Schema type keyword. `integer` is folded into `number`.
    pub fn from_schema_type(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(ParamType::String),
            "number" | "integer" => Some(ParamType::Number),
            "boolean" => Some(ParamType::Boolean),
            "array" => Some(ParamType::Array),
            "object" => Some(ParamType::Object),
            _ => None,
        }
    }

    /// Whether a JSON value has this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Number => value.is_number(),
            ParamType::Boolean => value.is_boolean(),
            ParamType::Array => value.is_array(),
            ParamType::Object => value.is_object(),
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub param_type: ParamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParameterSpec {
    /// A required parameter.
    pub fn required(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: None,
            required: true,
            allowed_values: None,
            default: None,
        }
    }

    /// An optional parameter.
    pub fn optional(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            required: false,
            ..Self::required(name, param_type)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the parameter to an enumerated set of values.
    pub fn with_allowed_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn to_property(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".into(), json!(self.param_type.as_str()));
        if let Some(description) = &self.description {
            property.insert("description".into(), json!(description));
        }
        if let Some(values) = &self.allowed_values {
            property.insert("enum".into(), Value::Array(values.clone()));
        }
        if let Some(default) = &self.default {
            property.insert("default".into(), default.clone());
        }
        Value::Object(property)
    }

    fn check(&self, value: Option<&Value>) -> Result<(), String> {
        let value = match value {
            None | Some(Value::Null) if self.required => {
                return Err(format!("missing required parameter '{}'", self.name));
            }
            None | Some(Value::Null) => return Ok(()),
            Some(value) => value,
        };

        if !self.param_type.matches(value) {
            return Err(format!(
                "parameter '{}' must be of type {}",
                self.name, self.param_type
            ));
        }

        if let Some(allowed) = &self.allowed_values
            && !allowed.contains(value)
        {
            let choices: Vec<String> = allowed.iter().map(Value::to_string).collect();
            return Err(format!(
                "parameter '{}' must be one of [{}], got {}",
                self.name,
                choices.join(", "),
                value
            ));
        }

        Ok(())
    }
}

/// Structural problems found while reading a JSON Schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema must be a JSON object")]
    NotAnObject,
    #[error("'properties' must be an object")]
    InvalidProperties,
    #[error("property '{0}' has no recognised 'type'")]
    UnknownType(String),
    #[error("'required' must be an array of property names")]
    InvalidRequired,
}

/// Declared parameters of a tool. Empty means "takes no parameters".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    params: Vec<ParameterSpec>,
}

impl ParameterSchema {
    /// Schema with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style parameter addition. A repeated name replaces the earlier spec.
    pub fn with_param(mut self, spec: ParameterSpec) -> Self {
        self.params.retain(|existing| existing.name != spec.name);
        self.params.push(spec);
        self
    }

    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|spec| spec.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Names of the required parameters, in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name.as_str())
            .collect()
    }

    /// Render as a JSON Schema `object`.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|spec| (spec.name.clone(), spec.to_property()))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_names(),
        })
    }

    /// Read the structural shape of a JSON Schema `object`.
    ///
    /// Only `properties.*.{type,description,enum,default}` and `required` are
    /// read; anything else (for example `items`) is ignored. A missing
    /// `properties` key yields an empty schema.
    pub fn from_json_schema(schema: &Value) -> Result<Self, SchemaError> {
        let object = schema.as_object().ok_or(SchemaError::NotAnObject)?;

        let required: Vec<&str> = match object.get("required") {
            None => Vec::new(),
            Some(Value::Array(names)) => names
                .iter()
                .map(|name| name.as_str().ok_or(SchemaError::InvalidRequired))
                .collect::<Result<_, _>>()?,
            Some(_) => return Err(SchemaError::InvalidRequired),
        };

        let properties = match object.get("properties") {
            None => return Ok(Self::empty()),
            Some(Value::Object(properties)) => properties,
            Some(_) => return Err(SchemaError::InvalidProperties),
        };

        let mut schema = Self::empty();
        for (name, property) in properties {
            let param_type = property
                .get("type")
                .and_then(Value::as_str)
                .and_then(ParamType::from_schema_type)
                .ok_or_else(|| SchemaError::UnknownType(name.clone()))?;

            let mut spec = if required.contains(&name.as_str()) {
                ParameterSpec::required(name.clone(), param_type)
            } else {
                ParameterSpec::optional(name.clone(), param_type)
            };
            if let Some(description) = property.get("description").and_then(Value::as_str) {
                spec = spec.with_description(description);
            }
            if let Some(Value::Array(values)) = property.get("enum") {
                spec = spec.with_allowed_values(values.iter().cloned());
            }
            if let Some(default) = property.get("default") {
                spec = spec.with_default(default.clone());
            }
            schema = schema.with_param(spec);
        }

        Ok(schema)
    }

    /// Fill in declared defaults for parameters the caller left out.
    pub fn apply_defaults(&self, args: &mut ToolArgs) {
        for spec in &self.params {
            if let Some(default) = &spec.default
                && matches!(args.get(&spec.name), None | Some(Value::Null))
            {
                args.insert(spec.name.clone(), default.clone());
            }
        }
    }

    /// Check arguments against the declared parameters.
    ///
    /// Returns the first violation found. Undeclared extra arguments are
    /// allowed.
    pub fn validate(&self, args: &ToolArgs) -> Result<(), String> {
        self.params
            .iter()
            .try_for_each(|spec| spec.check(args.get(&spec.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_fact_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "Category of cat fact (optional)",
                    "enum": ["general", "behavior", "history", "science", "funny"]
                }
            },
            "required": []
        })
    }

    #[test]
    fn test_from_json_schema_reads_enum_and_required() {
        let schema = ParameterSchema::from_json_schema(&cat_fact_schema()).unwrap();
        let category = schema.get("category").unwrap();

        assert_eq!(category.param_type, ParamType::String);
        assert!(!category.required);
        assert_eq!(category.allowed_values.as_ref().map(Vec::len), Some(5));
        assert!(schema.required_names().is_empty());
    }

    #[test]
    fn test_json_schema_round_trip() {
        let schema = ParameterSchema::empty()
            .with_param(
                ParameterSpec::required("name", ParamType::String)
                    .with_description("Name of the person to greet"),
            )
            .with_param(
                ParameterSpec::optional("language", ParamType::String).with_default("English"),
            );

        let rendered = schema.to_json_schema();
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["required"], json!(["name"]));
        assert_eq!(rendered["properties"]["language"]["default"], "English");

        let parsed = ParameterSchema::from_json_schema(&rendered).unwrap();
        assert_eq!(parsed.get("name"), schema.get("name"));
        assert_eq!(parsed.get("language"), schema.get("language"));
    }

    #[test]
    fn test_integer_folds_into_number_and_items_are_ignored() {
        let schema = ParameterSchema::from_json_schema(&json!({
            "type": "object",
            "properties": {
                "data": {"type": "array", "items": {"type": "number"}},
                "limit": {"type": "integer"}
            },
            "required": ["data"]
        }))
        .unwrap();

        assert_eq!(schema.get("data").unwrap().param_type, ParamType::Array);
        assert_eq!(schema.get("limit").unwrap().param_type, ParamType::Number);
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(
            ParameterSchema::from_json_schema(&json!("nope")),
            Err(SchemaError::NotAnObject)
        );
        assert_eq!(
            ParameterSchema::from_json_schema(&json!({"properties": []})),
            Err(SchemaError::InvalidProperties)
        );
        assert_eq!(
            ParameterSchema::from_json_schema(&json!({"properties": {"x": {}}})),
            Err(SchemaError::UnknownType("x".into()))
        );
        assert_eq!(
            ParameterSchema::from_json_schema(&json!({"required": "x"})),
            Err(SchemaError::InvalidRequired)
        );
        assert!(ParameterSchema::from_json_schema(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_validate_reports_first_violation() {
        let schema = ParameterSchema::from_json_schema(&cat_fact_schema())
            .unwrap()
            .with_param(ParameterSpec::required("count", ParamType::Number));

        let missing = ToolArgs::new();
        assert_eq!(
            schema.validate(&missing).unwrap_err(),
            "missing required parameter 'count'"
        );

        let wrong_type = ToolArgs::new().with("count", "three");
        assert!(schema.validate(&wrong_type).unwrap_err().contains("type number"));

        let bad_enum = ToolArgs::new().with("count", 1).with("category", "dogs");
        assert!(schema.validate(&bad_enum).unwrap_err().contains("must be one of"));

        let ok = ToolArgs::new()
            .with("count", 1)
            .with("category", "science")
            .with("extra", true);
        assert!(schema.validate(&ok).is_ok());
    }

    #[test]
    fn test_apply_defaults_only_fills_gaps() {
        let schema = ParameterSchema::empty().with_param(
            ParameterSpec::optional("language", ParamType::String).with_default("English"),
        );

        let mut empty = ToolArgs::new();
        schema.apply_defaults(&mut empty);
        assert_eq!(empty.str("language"), Some("English"));

        let mut given = ToolArgs::new().with("language", "French");
        schema.apply_defaults(&mut given);
        assert_eq!(given.str("language"), Some("French"));
    }
}
