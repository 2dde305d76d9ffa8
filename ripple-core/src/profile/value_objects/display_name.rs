use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name value object with validation
///
/// Represents a validated display name that follows the business rules:
/// - 3-30 characters in length
/// - Preserves original formatting and case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with validation
    pub fn new(display_name: impl AsRef<str>) -> Result<Self, DisplayNameError> {
        let display_name = display_name.as_ref().trim().to_string();

        let count = display_name.chars().count();
        if count < 3 {
            return Err(DisplayNameError::TooShort);
        }

        if count > 30 {
            return Err(DisplayNameError::TooLong);
        }

        // Control characters would leak into every surface that renders the
        // name; reject them outright.
        if display_name.chars().any(|c| c.is_control()) {
            return Err(DisplayNameError::InvalidCharacters);
        }

        Ok(Self(display_name))
    }

    /// Get the display name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the display name as a String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating a display name
#[derive(Debug, Clone, thiserror::Error)]
pub enum DisplayNameError {
    #[error("Name must be at least 3 characters")]
    TooShort,

    #[error("Name cannot exceed 30 characters")]
    TooLong,

    #[error("Name contains invalid control characters")]
    InvalidCharacters,
}
