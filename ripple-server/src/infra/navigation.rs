//! Navigator-port implementation for the HTTP surface.
//!
//! Navigation over HTTP is a redirect response, so the per-request navigator
//! records the fire-and-effect call and the handler turns the recording into
//! a `Location` header afterwards.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use ripple_core::profile::Navigator;

/// What the orchestrator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedNavigation {
    Back,
    To(String),
}

/// One-shot navigator scoped to a single request.
#[derive(Debug, Default)]
pub struct RequestNavigator {
    recorded: Mutex<Option<RecordedNavigation>>,
}

impl RequestNavigator {
    /// The navigation recorded by the submit, if any.
    pub fn take(&self) -> Option<RecordedNavigation> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn record(&self, navigation: RecordedNavigation) {
        *self
            .recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(navigation);
    }
}

#[async_trait]
impl Navigator for RequestNavigator {
    async fn back(&self) {
        self.record(RecordedNavigation::Back);
    }

    async fn to(&self, route: &str) {
        self.record(RecordedNavigation::To(route.to_string()));
    }
}
