use serde::{Deserialize, Serialize};
use std::fmt;

/// Bio value object with validation
///
/// Free text between 3 and 1000 characters. Formatting is preserved apart
/// from leading/trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bio(String);

impl Bio {
    /// Create a new bio with validation
    pub fn new(bio: impl AsRef<str>) -> Result<Self, BioError> {
        let bio = bio.as_ref().trim().to_string();

        let count = bio.chars().count();
        if count < 3 {
            return Err(BioError::TooShort);
        }

        if count > 1000 {
            return Err(BioError::TooLong);
        }

        Ok(Self(bio))
    }

    /// Get the bio as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the bio as a String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Bio {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating a bio
#[derive(Debug, Clone, thiserror::Error)]
pub enum BioError {
    #[error("Bio must be at least 3 characters")]
    TooShort,

    #[error("Bio cannot exceed 1000 characters")]
    TooLong,
}
