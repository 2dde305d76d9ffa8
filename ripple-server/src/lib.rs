//! # Ripple Server
//!
//! Small user-facing web application: a landing page that sends unknown
//! visitors to onboarding, and a profile-editing surface backed by the
//! submission pipeline in `ripple-core`.
//!
//! ## Architecture
//!
//! The server is built on Axum and wires the core collaborator ports to
//! transport implementations:
//! - uploads go to a configured upload service over reqwest,
//! - profile persistence goes to a remote profile API (or an in-memory
//!   store in dev mode),
//! - the session gate resolves an opaque request credential to the current
//!   user.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;

#[cfg(test)]
mod tests;
