//! Landing page and onboarding stub.

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use uuid::Uuid;

use ripple_core::api_types::ApiResponse;

use crate::AppState;
use crate::errors::AppResult;
use crate::handlers::session_credential;

#[derive(Debug, Serialize)]
pub struct HomePayload {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct OnboardingPayload {
    pub message: &'static str,
    pub next: &'static str,
}

/// Landing page: known visitors get the home payload, unknown visitors are
/// redirected into onboarding.
pub async fn home_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let user = state
        .sessions
        .current_user(session_credential(&headers))
        .await?;

    match user {
        None => Ok(Redirect::to("/onboarding").into_response()),
        Some(user) => {
            Ok(Json(ApiResponse::success(HomePayload { user_id: user.id })).into_response())
        }
    }
}

/// Onboarding entry point. The flow content itself lives elsewhere; this
/// only tells the client where to start.
pub async fn onboarding_handler() -> Json<ApiResponse<OnboardingPayload>> {
    Json(ApiResponse::success(OnboardingPayload {
        message: "Complete your profile to get started",
        next: "/profile/new",
    }))
}
