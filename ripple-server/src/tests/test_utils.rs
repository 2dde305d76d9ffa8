use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request};
use uuid::Uuid;

use ripple_core::{
    CoreError, SelectedFile,
    profile::{ProfileStore, UploadClient, UploadedFile},
};

use crate::AppState;
use crate::infra::config::Config;
use crate::infra::persistence::MemoryProfileStore;
use crate::infra::session::{HeaderSessionGate, SESSION_HEADER};
use crate::routes;

/// Upload client that hands back canned URLs and counts invocations.
#[derive(Default)]
pub struct FakeUploads {
    pub urls: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
    pub fail_with: Option<String>,
}

impl FakeUploads {
    pub fn returning(url: &str) -> Self {
        Self {
            urls: Mutex::new(vec![url.to_string()]),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UploadClient for FakeUploads {
    async fn upload(&self, _files: &[SelectedFile]) -> ripple_core::Result<Vec<UploadedFile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            return Err(CoreError::Upload(message.clone()));
        }
        Ok(self
            .urls
            .lock()
            .unwrap()
            .iter()
            .map(|url| UploadedFile { url: url.clone() })
            .collect())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub uploads: Arc<FakeUploads>,
    pub profiles: Arc<MemoryProfileStore>,
}

impl TestApp {
    pub fn new(uploads: FakeUploads) -> Self {
        let uploads = Arc::new(uploads);
        let profiles = Arc::new(MemoryProfileStore::default());
        let state = AppState {
            config: Arc::new(Config::default()),
            uploads: uploads.clone(),
            profiles: profiles.clone(),
            sessions: Arc::new(HeaderSessionGate),
        };
        Self {
            state,
            uploads,
            profiles,
        }
    }

    pub fn router(&self) -> Router {
        routes::create_app_router(self.state.clone())
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub fn get_as(uri: &str, user_id: Uuid) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(SESSION_HEADER, user_id.to_string())
        .body(Body::empty())
        .expect("request builds")
}

pub fn post_json_as(uri: &str, user_id: Uuid, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header(SESSION_HEADER, user_id.to_string())
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
