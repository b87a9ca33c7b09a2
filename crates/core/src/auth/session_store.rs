//! In-memory session shared between the auth service and the HTTP layer.

use std::sync::{PoisonError, RwLock};

use crate::auth::{AccessTokenProviderTrait, AuthState, Session, TokenPair, TokenStoreTrait};
use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::errors::Result;

/// Holds the current session behind a lock. Mutations are single assignments,
/// so readers always observe a complete token pair (or none).
#[derive(Debug, Default)]
pub struct SessionStore {
    session: RwLock<Session>,
}

impl SessionStore {
    pub fn new(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }

    /// Restores the session from durable storage (cold start). A present
    /// access-token entry is the sole source of truth for "authenticated".
    pub fn restore(token_store: &dyn TokenStoreTrait) -> Result<Self> {
        Ok(Self::new(Session {
            access_token: token_store.get(ACCESS_TOKEN_KEY)?,
            refresh_token: token_store.get(REFRESH_TOKEN_KEY)?,
        }))
    }

    pub fn session(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> AuthState {
        self.session().state()
    }

    pub fn set_tokens(&self, tokens: &TokenPair) {
        let mut session = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        session.access_token = Some(tokens.access.clone());
        session.refresh_token = Some(tokens.refresh.clone());
    }

    pub fn clear(&self) {
        let mut session = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *session = Session::default();
    }
}

impl AccessTokenProviderTrait for SessionStore {
    fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }
}
