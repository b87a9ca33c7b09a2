//! Cached campaign repository over the backend's CRUD endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use adboard_core::campaigns::{Campaign, CampaignRepositoryTrait, NewCampaign};
use adboard_core::errors::Result;

use crate::client::ApiClient;
use crate::wire::{ApiCampaign, ApiCampaignPayload};

/// Trait for the raw campaign endpoints, the seam between the repository's
/// caching logic and actual HTTP.
#[async_trait]
pub trait CampaignApiTrait: Send + Sync {
    async fn fetch_campaigns(&self) -> Result<Vec<ApiCampaign>>;
    async fn create_campaign(&self, payload: &ApiCampaignPayload) -> Result<ApiCampaign>;
    async fn update_campaign(&self, id: &str, payload: &ApiCampaignPayload) -> Result<ApiCampaign>;
    async fn delete_campaign(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl CampaignApiTrait for ApiClient {
    async fn fetch_campaigns(&self) -> Result<Vec<ApiCampaign>> {
        self.get("/api/campaigns/").await
    }

    async fn create_campaign(&self, payload: &ApiCampaignPayload) -> Result<ApiCampaign> {
        self.post("/api/campaigns/", payload).await
    }

    async fn update_campaign(&self, id: &str, payload: &ApiCampaignPayload) -> Result<ApiCampaign> {
        self.put(&format!("/api/campaigns/{}/", id), payload).await
    }

    async fn delete_campaign(&self, id: &str) -> Result<()> {
        self.delete(&format!("/api/campaigns/{}/", id)).await
    }
}

/// Read-through cache over the campaign list.
///
/// Reads serve the cached list when warm. Every mutation runs to completion
/// against the backend and only then drops the cache, so a list read issued
/// after a mutation returns re-fetches and reflects it. Nothing guards
/// against concurrent edits from other clients; the backend is
/// last-writer-wins.
pub struct CampaignRepository {
    api: Arc<dyn CampaignApiTrait>,
    cache: RwLock<Option<Vec<Campaign>>>,
}

impl CampaignRepository {
    pub fn new(api: Arc<dyn CampaignApiTrait>) -> Self {
        Self {
            api,
            cache: RwLock::new(None),
        }
    }

    async fn invalidate(&self) {
        *self.cache.write().await = None;
        debug!("campaign cache invalidated");
    }
}

#[async_trait]
impl CampaignRepositoryTrait for CampaignRepository {
    async fn list(&self) -> Result<Vec<Campaign>> {
        {
            let cache = self.cache.read().await;
            if let Some(campaigns) = cache.as_ref() {
                return Ok(campaigns.clone());
            }
        }

        let mut cache = self.cache.write().await;
        // Another task may have filled the cache while we waited.
        if let Some(campaigns) = cache.as_ref() {
            return Ok(campaigns.clone());
        }

        let campaigns = self
            .api
            .fetch_campaigns()
            .await?
            .into_iter()
            .map(ApiCampaign::into_domain)
            .collect::<Result<Vec<_>>>()?;
        debug!("fetched {} campaigns", campaigns.len());
        *cache = Some(campaigns.clone());
        Ok(campaigns)
    }

    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign> {
        let payload = ApiCampaignPayload::from(&new_campaign);
        let created = self.api.create_campaign(&payload).await?.into_domain()?;
        self.invalidate().await;
        Ok(created)
    }

    async fn update(&self, campaign: Campaign) -> Result<Campaign> {
        let payload = ApiCampaignPayload::from(&campaign);
        let updated = self
            .api
            .update_campaign(&campaign.id, &payload)
            .await?
            .into_domain()?;
        self.invalidate().await;
        Ok(updated)
    }

    async fn delete(&self, campaign_id: &str) -> Result<()> {
        self.api.delete_campaign(campaign_id).await?;
        self.invalidate().await;
        Ok(())
    }
}
