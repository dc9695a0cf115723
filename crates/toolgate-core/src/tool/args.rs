//! Invocation arguments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HandlerError;

/// Arguments passed to a tool: parameter name to JSON value.
///
/// The mapping is passed through to handlers as-is. Typed accessors let a
/// handler pull what it needs and fail with a readable [`HandlerError`] when
/// a value it requires is missing or malformed.
///
/// ```rust
/// use serde_json::json;
/// use toolgate_core::ToolArgs;
///
/// let args = ToolArgs::new().with("name", "Alice").with("values", json!([1, 2, 3]));
///
/// assert_eq!(args.require_str("name").unwrap(), "Alice");
/// assert_eq!(args.require_number_array("values").unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(args.require_str("language").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolArgs(Map<String, Value>);

impl ToolArgs {
    /// Empty argument mapping.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// String value, if present and a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Numeric value, if present and a number.
    pub fn f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Boolean value, if present and a boolean.
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Required string argument. Null counts as missing.
    pub fn require_str(&self, key: &str) -> Result<&str, HandlerError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Err(HandlerError::missing_argument(key)),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(HandlerError::invalid_argument(key, "a string")),
        }
    }

    /// Required numeric argument.
    pub fn require_f64(&self, key: &str) -> Result<f64, HandlerError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Err(HandlerError::missing_argument(key)),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| HandlerError::invalid_argument(key, "a number")),
        }
    }

    /// Required array whose every element is a number.
    pub fn require_number_array(&self, key: &str) -> Result<Vec<f64>, HandlerError> {
        let items = match self.0.get(key) {
            None | Some(Value::Null) => return Err(HandlerError::missing_argument(key)),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(HandlerError::invalid_argument(key, "an array of numbers")),
        };

        items
            .iter()
            .map(|item| {
                item.as_f64()
                    .ok_or_else(|| HandlerError::invalid_argument(key, "an array of numbers"))
            })
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ToolArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// JSON objects convert directly; `null` is an empty mapping.
impl TryFrom<Value> for ToolArgs {
    type Error = HandlerError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(HandlerError::new(format!(
                "tool arguments must be a JSON object, got {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
