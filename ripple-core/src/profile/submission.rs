//! Submission orchestrator.
//!
//! Sequences one profile submit: validate the draft, detect whether the
//! photo field still holds an unsent local image, upload it if so, persist
//! the final record, then navigate. The steps are strictly sequential --
//! persistence needs the resolved photo URL, so upload and persist are never
//! issued in parallel.
//!
//! The machine is an explicit tagged state (`Idle -> Submitting ->
//! {Succeeded, Failed}`) rather than a set of pending-operation flags, so
//! re-submission guards are directly testable. Upload and persistence
//! failures both land in `Failed` with a retryable, user-visible error; a
//! Local-form (data URL) photo value is never handed to the persistence
//! port.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};
use uuid::Uuid;

use crate::image::{PhotoKind, SelectedFile, classify};
use crate::profile::model::ProfileUpdate;
use crate::profile::ports::{Navigator, ProfileStore, UploadClient};
use crate::profile::validation::{FieldErrors, ProfileDraft};

/// Route of the profile-edit page; submits from here navigate back instead
/// of to the application root.
pub const EDIT_PROFILE_PATH: &str = "/profile/edit";

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    /// Holds the user-visible, retryable error message.
    Failed(String),
}

/// Where the user goes after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Previous page in history (submit came from the edit-profile page).
    Back,
    /// Application root.
    Root,
}

/// Everything one submit attempt needs.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub user_id: Uuid,
    pub draft: ProfileDraft,
    /// Local file selection for this attempt; at most one file.
    pub selection: Vec<SelectedFile>,
    /// Path the form was rendered on; forwarded to persistence for cache
    /// revalidation and used for the navigation decision.
    pub path: String,
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Final persisted photo reference, always Remote form.
    pub image: String,
    pub navigation: NavigationTarget,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("a submission is already in flight")]
    AlreadyInFlight,

    #[error("photo upload failed: {0}")]
    Upload(String),

    #[error("profile update failed: {0}")]
    Persistence(String),
}

/// Coordinates validation, optional upload, persistence, and navigation for
/// one form instance.
pub struct SubmissionService {
    uploads: Arc<dyn UploadClient>,
    store: Arc<dyn ProfileStore>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<SubmissionState>,
}

impl std::fmt::Debug for SubmissionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionService")
            .field("uploads", &Arc::strong_count(&self.uploads))
            .field("store", &Arc::strong_count(&self.store))
            .field("state", &self.state())
            .finish()
    }
}

impl SubmissionService {
    pub fn new(
        uploads: Arc<dyn UploadClient>,
        store: Arc<dyn ProfileStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            uploads,
            store,
            navigator,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    /// Current machine state.
    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    /// Run one submit attempt end to end.
    ///
    /// Validation failures leave the machine in `Idle` (the transition to
    /// `Submitting` only fires for a clean draft). Upload and persistence
    /// failures move it to `Failed`; the machine re-arms for a retry on the
    /// next call.
    pub async fn submit(&self, request: SubmitRequest) -> Result<SubmitReceipt, SubmitError> {
        let validated = request.draft.validate().map_err(SubmitError::Validation)?;

        self.begin()?;

        let mut image = validated.photo.into_string();

        if classify(&image) == PhotoKind::Local {
            let results = match self.uploads.upload(&request.selection).await {
                Ok(results) => results,
                Err(err) => return Err(self.fail(SubmitError::Upload(err.to_string()))),
            };

            // The selection holds at most one file; its URL is the one that
            // replaces the embedded preview value. A missing or empty URL is
            // an upload failure, never a silent fall-through that would
            // persist the stale Local value.
            match results.into_iter().next().filter(|f| !f.url.is_empty()) {
                Some(file) => image = file.url,
                None => {
                    return Err(self.fail(SubmitError::Upload(
                        "upload service returned no usable result".to_string(),
                    )));
                }
            }
        }

        debug_assert_eq!(classify(&image), PhotoKind::Remote);

        let update = ProfileUpdate {
            user_id: request.user_id,
            name: validated.name.into_string(),
            username: validated.username.into_string(),
            bio: validated.bio.into_string(),
            image: image.clone(),
            path: request.path.clone(),
        };

        if let Err(err) = self.store.update_profile(&update).await {
            return Err(self.fail(SubmitError::Persistence(err.to_string())));
        }

        let navigation = if request.path == EDIT_PROFILE_PATH {
            self.navigator.back().await;
            NavigationTarget::Back
        } else {
            self.navigator.to("/").await;
            NavigationTarget::Root
        };

        *self.lock_state() = SubmissionState::Succeeded;
        info!(user_id = %request.user_id, path = %request.path, "profile submitted");

        Ok(SubmitReceipt { image, navigation })
    }

    fn begin(&self) -> Result<(), SubmitError> {
        let mut state = self.lock_state();
        if *state == SubmissionState::Submitting {
            return Err(SubmitError::AlreadyInFlight);
        }
        *state = SubmissionState::Submitting;
        Ok(())
    }

    fn fail(&self, err: SubmitError) -> SubmitError {
        warn!(error = %err, "submission failed");
        *self.lock_state() = SubmissionState::Failed(err.to_string());
        err
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
