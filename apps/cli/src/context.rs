//! Service wiring for the CLI process.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use adboard_connect::{ApiClient, AuthApi, CampaignRepository};
use adboard_core::auth::{AuthService, AuthServiceTrait, SessionStore, TokenStoreTrait};
use adboard_core::campaigns::{CampaignService, CampaignServiceTrait};
use adboard_core::errors::Result;
use adboard_core::events::{DomainEvent, DomainEventSink};

use crate::token_store::FileTokenStore;

/// Sink that records domain events in the log. The CLI re-reads through the
/// repository anyway, so no further reaction is needed.
struct LogDomainEventSink;

impl DomainEventSink for LogDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        debug!("domain event: {:?}", event);
    }
}

/// Holds the services commands run against. Lives for the whole process.
pub struct ServiceContext {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub campaign_service: Arc<dyn CampaignServiceTrait>,
}

/// Builds the context: token store, restored session, HTTP client, cached
/// repository, and the services on top.
pub fn initialize_context(base_url: &str, config_dir: Option<PathBuf>) -> Result<ServiceContext> {
    let token_store: Arc<dyn TokenStoreTrait> = Arc::new(FileTokenStore::new(config_dir)?);
    let session_store = Arc::new(SessionStore::restore(token_store.as_ref())?);
    let event_sink: Arc<dyn DomainEventSink> = Arc::new(LogDomainEventSink);

    let api_client = ApiClient::new(base_url, session_store.clone())?;
    let auth_api = Arc::new(AuthApi::new(api_client.clone()));

    let auth_service = Arc::new(AuthService::new(
        session_store,
        token_store,
        auth_api,
        event_sink.clone(),
    ));

    let campaign_repository = Arc::new(CampaignRepository::new(Arc::new(api_client)));
    let campaign_service = Arc::new(CampaignService::new(campaign_repository, event_sink));

    Ok(ServiceContext {
        auth_service,
        campaign_service,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use adboard_core::auth::AuthState;
    use adboard_core::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

    #[test]
    fn cold_start_without_tokens_is_unauthenticated() {
        let tmp = tempdir().unwrap();
        let context =
            initialize_context("http://localhost:8000", Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(context.auth_service.state(), AuthState::Unauthenticated);
        assert!(context.auth_service.require_authenticated().is_err());
    }

    #[test]
    fn cold_start_restores_a_persisted_session() {
        let tmp = tempdir().unwrap();
        let store = FileTokenStore::new(Some(tmp.path().to_path_buf())).unwrap();
        store.set(ACCESS_TOKEN_KEY, "persisted-access").unwrap();
        store.set(REFRESH_TOKEN_KEY, "persisted-refresh").unwrap();

        let context =
            initialize_context("http://localhost:8000", Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(context.auth_service.state(), AuthState::Authenticated);
        assert_eq!(
            context.auth_service.session().access_token.as_deref(),
            Some("persisted-access")
        );
    }
}
