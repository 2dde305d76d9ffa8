//! Collaborator ports for the submission pipeline.
//!
//! The orchestrator only ever talks to these traits; the server crate wires
//! them to HTTP-backed implementations and tests wire them to fakes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::image::SelectedFile;

use super::model::{Profile, ProfileUpdate};

/// One successfully uploaded file.
///
/// Result ordering corresponds to the input ordering of the upload call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Remote URL of the hosted file
    pub url: String,
}

/// Upload service accepting local files and returning hosted URLs.
#[async_trait]
pub trait UploadClient: Send + Sync {
    /// Upload the given files, returning one result per input in order.
    async fn upload(&self, files: &[SelectedFile]) -> Result<Vec<UploadedFile>>;
}

/// Remote persistence API for profile records.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>>;

    /// Apply one profile update. The callee uses `update.path` to decide
    /// which cached views to revalidate.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()>;
}

/// Post-submit navigation. Both operations are fire-and-effect; the
/// orchestrator never consumes a return value.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Return to the previous page in history.
    async fn back(&self);

    /// Navigate to the given route.
    async fn to(&self, route: &str);
}
