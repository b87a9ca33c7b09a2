//! Token endpoints of the campaign backend.

use async_trait::async_trait;

use adboard_core::auth::{AuthApiTrait, TokenPair};
use adboard_core::errors::Result;

use crate::client::ApiClient;

/// `POST /api/token/` and `POST /api/token/refresh/`. Neither endpoint needs
/// a bearer header; the shared client only attaches one when a session
/// exists, which the backend ignores here.
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApiTrait for AuthApi {
    async fn obtain(&self, username: &str, password: &str) -> Result<TokenPair> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        self.client.post("/api/token/", &body).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        let body = serde_json::json!({ "refresh": refresh_token });
        self.client.post("/api/token/refresh/", &body).await
    }
}
