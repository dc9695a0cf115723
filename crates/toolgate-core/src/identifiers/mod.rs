//! Validated tool identifiers
//!
//! Tool names are parsed once into a [`ToolId`] and carried as that type from
//! then on, so registration never has to re-check a name. Lookups still
//! accept plain `&str`: `ToolId` borrows as `str`, and an unknown or
//! malformed name simply does not match anything.
//!
//! # Validation Rules
//!
//! - Non-empty, at most 128 characters
//! - No leading or trailing whitespace
//! - Only ASCII alphanumerics, `-`, `_` and `.`
//! - No path traversal sequences (`../`, `./`)

mod validation;

pub use validation::{IdValidationError, IdValidator, MAX_ID_LENGTH};

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Unique name of a registered tool
///
/// ```rust
/// use toolgate_core::ToolId;
///
/// let id = ToolId::parse("get_weather").unwrap();
/// assert_eq!(id.as_str(), "get_weather");
///
/// let parsed: ToolId = "search_web".parse().unwrap();
/// assert_eq!(parsed.to_string(), "search_web");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolId(String);

impl ToolId {
    /// Parse and validate a tool name
    pub fn parse(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
        IdValidator::validate(id.as_ref()).map(|s| Self(s.to_string()))
    }

    /// Get the tool name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create a tool ID without validation.
    ///
    /// Only for names known to be valid, such as the constant names of the
    /// built-in tools.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToolId {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ToolId> for String {
    fn from(id: ToolId) -> Self {
        id.0
    }
}

impl TryFrom<String> for ToolId {
    type Error = IdValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for ToolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash/Eq of ToolId are those of the inner String, so str lookups agree.
impl Borrow<str> for ToolId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
