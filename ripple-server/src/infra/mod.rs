//! Transport-facing infrastructure: configuration, application state, and
//! the concrete implementations of the core collaborator ports.

pub mod app_state;
pub mod config;
pub mod navigation;
pub mod persistence;
pub mod session;
pub mod upload;
