use std::{fmt, sync::Arc};

use ripple_core::{SessionGate, profile::{ProfileStore, UploadClient}};

use crate::infra::config::Config;
use crate::infra::persistence::{HttpProfileStore, MemoryProfileStore};
use crate::infra::session::HeaderSessionGate;
use crate::infra::upload::{DisabledUploadClient, HttpUploadClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub uploads: Arc<dyn UploadClient>,
    pub profiles: Arc<dyn ProfileStore>,
    pub sessions: Arc<dyn SessionGate>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire the collaborator ports according to configuration.
    pub fn from_config(config: Config) -> Self {
        let http = reqwest::Client::new();

        let uploads: Arc<dyn UploadClient> = match &config.upload.endpoint {
            Some(endpoint) => Arc::new(HttpUploadClient::new(http.clone(), endpoint.clone())),
            None => Arc::new(DisabledUploadClient),
        };

        let profiles: Arc<dyn ProfileStore> = match &config.persistence.endpoint {
            Some(endpoint) => Arc::new(HttpProfileStore::new(http, endpoint.clone())),
            None => Arc::new(MemoryProfileStore::default()),
        };

        Self {
            config: Arc::new(config),
            uploads,
            profiles,
            sessions: Arc::new(HeaderSessionGate),
        }
    }
}
