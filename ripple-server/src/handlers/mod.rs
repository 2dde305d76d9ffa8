//! HTTP handlers.

pub mod landing;
pub mod profile;

use axum::http::HeaderMap;

use ripple_core::CurrentUser;

use crate::AppState;
use crate::errors::{AppError, AppResult};
use crate::infra::session::SESSION_HEADER;

/// The session credential carried on the request, if any.
fn session_credential(headers: &HeaderMap) -> Option<&str> {
    headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok())
}

/// Resolve the current user or fail with 401.
async fn require_user(state: &AppState, headers: &HeaderMap) -> AppResult<CurrentUser> {
    state
        .sessions
        .current_user(session_credential(headers))
        .await?
        .ok_or_else(|| AppError::unauthorized("Sign in required"))
}
