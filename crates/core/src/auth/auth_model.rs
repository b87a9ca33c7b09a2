//! Session domain models.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair as issued by the token endpoints. Both tokens
/// are opaque strings to this client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// The two states the client can be in. There is nothing between: a present
/// access token means authenticated, token validity is the backend's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// The identity context of the current client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Derived solely from access-token presence.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}
