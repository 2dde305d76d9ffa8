//! Profile read and submit handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    http::header::REFERER,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::info;

use ripple_core::{
    ProfileDraft, SelectedFile, SubmissionService, SubmitRequest,
    api_types::ApiResponse,
    image::decode_data_url,
    profile::Profile,
};

use crate::AppState;
use crate::errors::{AppError, AppResult};
use crate::handlers::require_user;
use crate::infra::navigation::{RecordedNavigation, RequestNavigator};

/// Get the current user's profile
pub async fn get_profile_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let user = require_user(&state, &headers).await?;

    let profile = state
        .profiles
        .get_profile(user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Profile not found"))?;

    Ok(Json(ApiResponse::success(profile)))
}

/// One profile-form submission.
///
/// `profile_photo` is either the URL already on record or a data URL the
/// client encoded from a freshly picked file; `path` is the route the form
/// was rendered on and drives both cache revalidation and the post-submit
/// destination.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub profile_photo: String,
    pub path: String,
}

/// Submit the profile form: validate, upload a changed photo, persist, and
/// redirect to the post-submit destination.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Response> {
    let user = require_user(&state, &headers).await?;

    let draft = ProfileDraft {
        profile_photo: request.profile_photo,
        name: request.name,
        username: request.username,
        bio: request.bio,
    };

    // A Local-form photo value embeds the picked file; reconstruct it so
    // the orchestrator has the selection to upload.
    let selection: Vec<SelectedFile> = decode_data_url(&draft.profile_photo)
        .map(|(content_type, bytes)| SelectedFile {
            name: file_name_for(user.id, &content_type),
            content_type,
            bytes,
        })
        .into_iter()
        .collect();

    let navigator = Arc::new(RequestNavigator::default());
    let submission = SubmissionService::new(
        state.uploads.clone(),
        state.profiles.clone(),
        navigator.clone(),
    );

    let receipt = submission
        .submit(SubmitRequest {
            user_id: user.id,
            draft,
            selection,
            path: request.path.clone(),
        })
        .await?;

    info!(user_id = %user.id, image = %receipt.image, "profile saved");

    let destination = match navigator.take() {
        Some(RecordedNavigation::To(route)) => route,
        // HTTP has no "go back"; the referring page is the closest thing.
        Some(RecordedNavigation::Back) | None => headers
            .get(REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("/")
            .to_string(),
    };

    Ok(Redirect::to(&destination).into_response())
}

fn file_name_for(user_id: uuid::Uuid, content_type: &str) -> String {
    let ext = match content_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    };
    format!("{user_id}.{ext}")
}
