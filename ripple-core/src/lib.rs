//! Core library for Ripple.
//!
//! Holds the pieces of the profile-editing flow that are independent of any
//! HTTP surface: the profile domain model, field validation, the image
//! data-URL encoder/classifier, the collaborator ports (upload, persistence,
//! navigation, session), and the submission orchestrator that sequences them.
//!
//! The binary crate (`ripple-server`) wires these ports to concrete
//! transport implementations; everything in here is testable against plain
//! in-process fakes.

pub mod api_types;
pub mod error;
pub mod image;
pub mod profile;
pub mod session;

pub use error::{CoreError, Result};
pub use image::{PhotoKind, SelectedFile, classify};
pub use profile::{
    Profile, ProfileDraft, ProfileUpdate, ValidatedProfile,
    submission::{
        EDIT_PROFILE_PATH, NavigationTarget, SubmissionService, SubmissionState, SubmitError,
        SubmitReceipt, SubmitRequest,
    },
    validation::{Field, FieldErrors},
};
pub use session::{CurrentUser, SessionGate};
