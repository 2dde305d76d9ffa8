use serde::{Deserialize, Serialize};
use std::fmt;

/// Username value object with validation
///
/// Represents a validated username that follows the business rules:
/// - 3-30 characters in length
/// - Normalized to lowercase; usernames are intended to be unique across
///   users and the persistence API compares them case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new username with validation
    pub fn new(username: impl AsRef<str>) -> Result<Self, UsernameError> {
        let username = username.as_ref().trim().to_lowercase();

        let count = username.chars().count();
        if count < 3 {
            return Err(UsernameError::TooShort);
        }

        if count > 30 {
            return Err(UsernameError::TooLong);
        }

        Ok(Self(username))
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the username as a String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating a username
#[derive(Debug, Clone, thiserror::Error)]
pub enum UsernameError {
    #[error("Username must be at least 3 characters")]
    TooShort,

    #[error("Username cannot exceed 30 characters")]
    TooLong,
}
