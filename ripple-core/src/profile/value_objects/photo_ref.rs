use serde::{Deserialize, Serialize};
use std::fmt;

use crate::image::{PhotoKind, classify};

/// Photo reference value object
///
/// A validated profile-photo field value in either Local form (data URL,
/// produced client-side before upload) or Remote form (URL of an already
/// hosted image). The only rule at this layer is non-emptiness; which form
/// the value takes decides whether the submission pipeline uploads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Create a new photo reference with validation
    pub fn new(value: impl AsRef<str>) -> Result<Self, PhotoRefError> {
        let value = value.as_ref().to_string();

        if value.is_empty() {
            return Err(PhotoRefError::Empty);
        }

        Ok(Self(value))
    }

    /// Whether this reference is Local (embedded data) or Remote (URL).
    pub fn kind(&self) -> PhotoKind {
        classify(&self.0)
    }

    /// Whether the value still embeds image bytes and needs an upload.
    pub fn is_local(&self) -> bool {
        self.kind() == PhotoKind::Local
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the reference as a String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhotoRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when creating a photo reference
#[derive(Debug, Clone, thiserror::Error)]
pub enum PhotoRefError {
    #[error("Profile photo is required")]
    Empty,
}
