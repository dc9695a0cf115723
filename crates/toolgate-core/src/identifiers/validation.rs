//! Tool name validation rules

use thiserror::Error;

/// Maximum length of a tool name
pub const MAX_ID_LENGTH: usize = 128;

/// Reasons a tool name can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdValidationError {
    /// The name is empty
    #[error("Identifier cannot be empty")]
    Empty,
    /// The name contains only whitespace
    #[error("Identifier cannot be whitespace-only")]
    WhitespaceOnly,
    /// The name has leading or trailing whitespace
    #[error("Identifier cannot have leading or trailing whitespace")]
    LeadingTrailingWhitespace,
    /// The name contains characters outside `[A-Za-z0-9_.-]`
    #[error(
        "Identifier can only contain alphanumeric characters, hyphens, underscores, and dots"
    )]
    InvalidCharacters,
    /// The name is longer than [`MAX_ID_LENGTH`]
    #[error("Identifier too long ({length} chars, max {max})")]
    TooLong { length: usize, max: usize },
    /// The name contains `../` or `./`
    #[error("Identifier cannot contain path traversal sequences (../)")]
    PathTraversal,
}

/// Validator shared by every identifier type.
pub struct IdValidator;

impl IdValidator {
    /// Validate a name and hand it back unchanged when it passes.
    ///
    /// ```rust
    /// use toolgate_core::identifiers::IdValidator;
    ///
    /// assert!(IdValidator::validate("get_cat_fact").is_ok());
    /// assert!(IdValidator::validate("search.web-v2").is_ok());
    ///
    /// assert!(IdValidator::validate("").is_err());
    /// assert!(IdValidator::validate(" greet").is_err());
    /// assert!(IdValidator::validate("../etc").is_err());
    /// ```
    pub fn validate(id: &str) -> Result<&str, IdValidationError> {
        if id.is_empty() {
            return Err(IdValidationError::Empty);
        }

        if id.trim().is_empty() {
            return Err(IdValidationError::WhitespaceOnly);
        }

        if id != id.trim() {
            return Err(IdValidationError::LeadingTrailingWhitespace);
        }

        if id.len() > MAX_ID_LENGTH {
            return Err(IdValidationError::TooLong {
                length: id.len(),
                max: MAX_ID_LENGTH,
            });
        }

        if id.contains("../") || id.contains("./") {
            return Err(IdValidationError::PathTraversal);
        }

        if !id.chars().all(Self::is_valid_char) {
            return Err(IdValidationError::InvalidCharacters);
        }

        Ok(id)
    }

    /// Check if a character is allowed in a tool name
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
    }
}
