//! Session gate for the landing redirect.
//!
//! The landing page needs exactly one fact: is the visitor a known user?
//! That fact comes from an injected collaborator rather than a hardcoded
//! flag, so the page logic stays testable and the real lookup can live
//! wherever the wider application keeps its sessions.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;

/// The authenticated visitor, as far as this fragment needs to know them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Opaque user identity
    pub id: Uuid,
}

/// Resolves an opaque session credential to the current user, if any.
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// `None` means the visitor is unknown and belongs in onboarding.
    async fn current_user(&self, credential: Option<&str>) -> Result<Option<CurrentUser>>;
}
