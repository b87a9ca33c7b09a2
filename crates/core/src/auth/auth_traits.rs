use async_trait::async_trait;

use crate::auth::TokenPair;
use crate::errors::Result;

/// Durable storage for the session: two string entries under fixed keys
/// (`constants::ACCESS_TOKEN_KEY` / `constants::REFRESH_TOKEN_KEY`). Writes
/// are best-effort; there is no transactional guarantee across the pair.
pub trait TokenStoreTrait: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Trait for the token-issuing endpoints of the backend.
#[async_trait]
pub trait AuthApiTrait: Send + Sync {
    /// Exchange credentials for a token pair.
    async fn obtain(&self, username: &str, password: &str) -> Result<TokenPair>;

    /// Exchange a refresh token for a rotated pair.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair>;
}

/// Source of the current access token for authenticated requests. The HTTP
/// layer reads this per request so rotated tokens take effect immediately.
pub trait AccessTokenProviderTrait: Send + Sync {
    fn access_token(&self) -> Option<String>;
}
