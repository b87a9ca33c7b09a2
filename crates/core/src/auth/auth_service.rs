use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use crate::auth::{
    AuthApiTrait, AuthState, Session, SessionStore, TokenPair, TokenStoreTrait,
};
use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};

/// Trait for session/auth operations.
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    fn state(&self) -> AuthState;

    fn session(&self) -> Session;

    /// Exchanges credentials for tokens. Success stores the pair in memory
    /// and in durable storage; failure leaves the current state untouched.
    async fn login(&self, username: &str, password: &str) -> Result<()>;

    /// Clears the session from memory and durable storage.
    fn logout(&self) -> Result<()>;

    /// On-demand token rotation. A failed refresh forces a logout.
    async fn refresh(&self) -> Result<()>;

    /// Gate for protected operations.
    fn require_authenticated(&self) -> Result<()>;
}

/// Drives the two-state auth machine: unauthenticated (no access token) and
/// authenticated. Every transition updates the shared [`SessionStore`] and
/// the durable token store together.
pub struct AuthService {
    session_store: Arc<SessionStore>,
    token_store: Arc<dyn TokenStoreTrait>,
    auth_api: Arc<dyn AuthApiTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl AuthService {
    pub fn new(
        session_store: Arc<SessionStore>,
        token_store: Arc<dyn TokenStoreTrait>,
        auth_api: Arc<dyn AuthApiTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            session_store,
            token_store,
            auth_api,
            event_sink,
        }
    }

    fn store_tokens(&self, tokens: &TokenPair) -> Result<()> {
        self.session_store.set_tokens(tokens);
        self.token_store.set(ACCESS_TOKEN_KEY, &tokens.access)?;
        self.token_store.set(REFRESH_TOKEN_KEY, &tokens.refresh)?;
        Ok(())
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    fn state(&self) -> AuthState {
        self.session_store.state()
    }

    fn session(&self) -> Session {
        self.session_store.session()
    }

    async fn login(&self, username: &str, password: &str) -> Result<()> {
        let tokens = self.auth_api.obtain(username, password).await?;
        self.store_tokens(&tokens)?;
        info!("signed in as {}", username);
        self.event_sink.emit(DomainEvent::session_changed(true));
        Ok(())
    }

    fn logout(&self) -> Result<()> {
        self.session_store.clear();
        self.token_store.remove(ACCESS_TOKEN_KEY)?;
        self.token_store.remove(REFRESH_TOKEN_KEY)?;
        info!("signed out");
        self.event_sink.emit(DomainEvent::session_changed(false));
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        let refresh_token = self
            .session_store
            .session()
            .refresh_token
            .ok_or(Error::Unauthorized)?;

        match self.auth_api.refresh(&refresh_token).await {
            Ok(tokens) => {
                self.store_tokens(&tokens)?;
                info!("session tokens rotated");
                Ok(())
            }
            Err(e) => {
                warn!("token refresh failed, signing out: {}", e);
                self.logout()?;
                Err(e)
            }
        }
    }

    fn require_authenticated(&self) -> Result<()> {
        match self.state() {
            AuthState::Authenticated => Ok(()),
            AuthState::Unauthenticated => Err(Error::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::events::MockDomainEventSink;

    #[derive(Default)]
    struct MemoryTokenStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl TokenStoreTrait for MemoryTokenStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// Scripted auth API: succeeds with fixed tokens or always fails.
    struct ScriptedAuthApi {
        succeed: bool,
    }

    #[async_trait]
    impl AuthApiTrait for ScriptedAuthApi {
        async fn obtain(&self, _username: &str, _password: &str) -> Result<TokenPair> {
            if self.succeed {
                Ok(TokenPair {
                    access: "access-1".to_string(),
                    refresh: "refresh-1".to_string(),
                })
            } else {
                Err(Error::Api("No active account found".to_string()))
            }
        }

        async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
            if self.succeed {
                Ok(TokenPair {
                    access: format!("rotated-{refresh_token}"),
                    refresh: format!("next-{refresh_token}"),
                })
            } else {
                Err(Error::Api("Token is invalid or expired".to_string()))
            }
        }
    }

    struct Fixture {
        service: AuthService,
        token_store: Arc<MemoryTokenStore>,
        sink: Arc<MockDomainEventSink>,
    }

    fn fixture(api_succeeds: bool) -> Fixture {
        let token_store = Arc::new(MemoryTokenStore::default());
        let session_store = Arc::new(SessionStore::restore(token_store.as_ref()).unwrap());
        let sink = Arc::new(MockDomainEventSink::new());
        let service = AuthService::new(
            session_store,
            token_store.clone(),
            Arc::new(ScriptedAuthApi {
                succeed: api_succeeds,
            }),
            sink.clone(),
        );
        Fixture {
            service,
            token_store,
            sink,
        }
    }

    #[tokio::test]
    async fn login_persists_tokens_and_flips_state() {
        let fx = fixture(true);
        assert_eq!(fx.service.state(), AuthState::Unauthenticated);

        fx.service.login("demo", "demo").await.unwrap();

        assert_eq!(fx.service.state(), AuthState::Authenticated);
        assert_eq!(
            fx.token_store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("access-1")
        );
        assert_eq!(
            fx.token_store.get(REFRESH_TOKEN_KEY).unwrap().as_deref(),
            Some("refresh-1")
        );
        assert_eq!(fx.sink.events(), vec![DomainEvent::session_changed(true)]);
    }

    #[tokio::test]
    async fn failed_login_leaves_state_unchanged() {
        let fx = fixture(false);

        let err = fx.service.login("demo", "wrong").await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(fx.service.state(), AuthState::Unauthenticated);
        assert_eq!(fx.token_store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert!(fx.sink.is_empty());
    }

    #[tokio::test]
    async fn logout_clears_memory_and_durable_storage() {
        let fx = fixture(true);
        fx.service.login("demo", "demo").await.unwrap();

        fx.service.logout().unwrap();

        assert_eq!(fx.service.state(), AuthState::Unauthenticated);
        assert_eq!(fx.token_store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(fx.token_store.get(REFRESH_TOKEN_KEY).unwrap(), None);
        assert!(matches!(
            fx.service.require_authenticated(),
            Err(Error::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn refresh_rotates_tokens() {
        let fx = fixture(true);
        fx.service.login("demo", "demo").await.unwrap();

        fx.service.refresh().await.unwrap();

        let session = fx.service.session();
        assert_eq!(session.access_token.as_deref(), Some("rotated-refresh-1"));
        assert_eq!(
            fx.token_store.get(REFRESH_TOKEN_KEY).unwrap().as_deref(),
            Some("next-refresh-1")
        );
        assert_eq!(fx.service.state(), AuthState::Authenticated);
    }

    #[tokio::test]
    async fn failed_refresh_forces_logout() {
        let token_store = Arc::new(MemoryTokenStore::default());
        token_store.set(ACCESS_TOKEN_KEY, "stale-access").unwrap();
        token_store.set(REFRESH_TOKEN_KEY, "stale-refresh").unwrap();

        let session_store = Arc::new(SessionStore::restore(token_store.as_ref()).unwrap());
        let sink = Arc::new(MockDomainEventSink::new());
        let service = AuthService::new(
            session_store,
            token_store.clone(),
            Arc::new(ScriptedAuthApi { succeed: false }),
            sink.clone(),
        );
        // Cold start restored the persisted session.
        assert_eq!(service.state(), AuthState::Authenticated);

        service.refresh().await.unwrap_err();

        assert_eq!(service.state(), AuthState::Unauthenticated);
        assert_eq!(token_store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(sink.events(), vec![DomainEvent::session_changed(false)]);
    }

    #[tokio::test]
    async fn refresh_without_session_is_unauthorized() {
        let fx = fixture(true);
        assert!(matches!(
            fx.service.refresh().await,
            Err(Error::Unauthorized)
        ));
    }
}
