//! Value objects for the editable profile fields.
//!
//! Each field has a newtype carrying its validation rules; the form-level
//! schema in [`crate::profile::validation`] composes them exhaustively.

pub mod bio;
pub mod display_name;
pub mod photo_ref;
pub mod username;

pub use bio::{Bio, BioError};
pub use display_name::{DisplayName, DisplayNameError};
pub use photo_ref::{PhotoRef, PhotoRefError};
pub use username::{Username, UsernameError};
