//! Persistence-port implementations: the remote profile API and an
//! in-memory store for dev mode and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use ripple_core::{
    CoreError, Result,
    profile::{Profile, ProfileStore, ProfileUpdate},
};

/// Talks to the remote profile API.
///
/// `GET  {endpoint}/profiles/{user_id}` -> profile record or 404
/// `PATCH {endpoint}/profiles/{user_id}` -> apply one update; the callee
/// reads `path` from the payload to revalidate cached views.
#[derive(Debug, Clone)]
pub struct HttpProfileStore {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpProfileStore {
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    fn profile_url(&self, user_id: Uuid) -> Result<Url> {
        self.endpoint
            .join(&format!("profiles/{user_id}"))
            .map_err(|err| CoreError::Internal(err.to_string()))
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let response = self
            .http
            .get(self.profile_url(user_id)?)
            .send()
            .await
            .map_err(|err| CoreError::Persistence(err.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CoreError::Persistence(format!(
                "profile API responded with {}",
                response.status()
            )));
        }

        let profile = response
            .json()
            .await
            .map_err(|err| CoreError::Persistence(err.to_string()))?;
        Ok(Some(profile))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        debug!(user_id = %update.user_id, path = %update.path, "updating profile");

        let response = self
            .http
            .patch(self.profile_url(update.user_id)?)
            .json(update)
            .send()
            .await
            .map_err(|err| CoreError::Persistence(err.to_string()))?;

        if !response.status().is_success() {
            return Err(CoreError::Persistence(format!(
                "profile API responded with {}",
                response.status()
            )));
        }

        Ok(())
    }
}

/// In-memory store for dev mode and tests.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    records: Mutex<HashMap<Uuid, Profile>>,
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        Ok(self.records.lock().await.get(&user_id).cloned())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let mut records = self.records.lock().await;
        let now = Utc::now();

        match records.get_mut(&update.user_id) {
            Some(profile) => {
                profile.name = update.name.clone();
                profile.username = update.username.clone();
                profile.bio = update.bio.clone();
                profile.image = update.image.clone();
                profile.onboarded = true;
                profile.updated_at = now;
            }
            None => {
                records.insert(
                    update.user_id,
                    Profile {
                        user_id: update.user_id,
                        object_id: Uuid::new_v4(),
                        username: update.username.clone(),
                        name: update.name.clone(),
                        bio: update.bio.clone(),
                        image: update.image.clone(),
                        onboarded: true,
                        created_at: now,
                        updated_at: now,
                    },
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_for(user_id: Uuid) -> ProfileUpdate {
        ProfileUpdate {
            user_id,
            name: "Alice".to_string(),
            username: "alice1".to_string(),
            bio: "hello world".to_string(),
            image: "https://img/x.png".to_string(),
            path: "/profile/new".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_then_read_back() {
        let store = MemoryProfileStore::default();
        let user_id = Uuid::new_v4();

        assert!(store.get_profile(user_id).await.unwrap().is_none());

        store.update_profile(&update_for(user_id)).await.unwrap();
        let profile = store.get_profile(user_id).await.unwrap().unwrap();
        assert_eq!(profile.username, "alice1");
        assert!(profile.onboarded);

        let mut second = update_for(user_id);
        second.bio = "updated bio".to_string();
        store.update_profile(&second).await.unwrap();

        let profile = store.get_profile(user_id).await.unwrap().unwrap();
        assert_eq!(profile.bio, "updated bio");
        assert!(profile.updated_at >= profile.created_at);
    }
}
