//! Profile records as the persistence API sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's profile as stored by the persistence API.
///
/// Owned by the authenticated user and mutated only through the submission
/// pipeline; the `image` field is always a Remote-form URL once persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Identity of the owning user
    pub user_id: Uuid,
    /// Opaque identifier of the stored record
    pub object_id: Uuid,
    /// Unique username (lowercase, 3-30 chars)
    pub username: String,
    /// Display name shown in UI
    pub name: String,
    /// Free-text bio
    pub bio: String,
    /// URL of the hosted profile photo
    pub image: String,
    /// Whether the user finished onboarding
    pub onboarded: bool,
    /// Timestamp of record creation
    pub created_at: DateTime<Utc>,
    /// Timestamp of last profile update
    pub updated_at: DateTime<Utc>,
}

/// Payload handed to the persistence port for one profile update.
///
/// `path` tells the callee which cached views to refresh after the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub user_id: Uuid,
    pub name: String,
    pub username: String,
    pub bio: String,
    pub image: String,
    pub path: String,
}
