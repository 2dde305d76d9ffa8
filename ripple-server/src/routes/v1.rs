use axum::{Router, routing::get};

use crate::AppState;
use crate::handlers::profile;

/// Version 1 API routes.
pub fn create_v1_router(_state: AppState) -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(profile::get_profile_handler).post(profile::update_profile_handler),
    )
}
