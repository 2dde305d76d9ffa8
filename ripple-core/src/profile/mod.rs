//! Profile domain: model, field validation, collaborator ports, and the
//! submission orchestrator.

pub mod model;
pub mod ports;
pub mod submission;
pub mod validation;
pub mod value_objects;

pub use model::{Profile, ProfileUpdate};
pub use ports::{Navigator, ProfileStore, UploadClient, UploadedFile};
pub use validation::{ProfileDraft, ValidatedProfile};
pub use value_objects::*;
