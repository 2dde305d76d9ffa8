//! Session-gate implementation.

use async_trait::async_trait;
use uuid::Uuid;

use ripple_core::{CurrentUser, Result, SessionGate};

/// Header carrying the visitor's opaque session credential.
pub const SESSION_HEADER: &str = "x-ripple-user";

/// Resolves the session credential by parsing it as a user id.
///
/// This is deliberately the thinnest possible gate: session *management* is
/// out of scope here, but the lookup is injected behind the port so a real
/// deployment swaps in its session service without touching the handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderSessionGate;

#[async_trait]
impl SessionGate for HeaderSessionGate {
    async fn current_user(&self, credential: Option<&str>) -> Result<Option<CurrentUser>> {
        Ok(credential
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .map(|id| CurrentUser { id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_or_malformed_credential_is_unknown() {
        let gate = HeaderSessionGate;
        assert!(gate.current_user(None).await.unwrap().is_none());
        assert!(gate.current_user(Some("nonsense")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn valid_credential_resolves() {
        let gate = HeaderSessionGate;
        let id = Uuid::new_v4();
        let user = gate
            .current_user(Some(&id.to_string()))
            .await
            .unwrap()
            .expect("known user");
        assert_eq!(user.id, id);
    }
}
