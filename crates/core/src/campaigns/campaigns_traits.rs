use async_trait::async_trait;

use crate::campaigns::{Campaign, NewCampaign};
use crate::errors::Result;
use crate::filters::{FilterCriteria, SortOrder};
use crate::forms::CampaignForm;

/// Trait for campaign repository operations (remote data access).
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    /// Fetch the campaign list, served from cache when warm.
    async fn list(&self) -> Result<Vec<Campaign>>;

    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign>;

    /// Full replacement of the campaign with the same identifier.
    async fn update(&self, campaign: Campaign) -> Result<Campaign>;

    async fn delete(&self, campaign_id: &str) -> Result<()>;
}

/// Trait for campaign service operations.
#[async_trait]
pub trait CampaignServiceTrait: Send + Sync {
    /// The raw fetched list, in backend order.
    async fn get_campaigns(&self) -> Result<Vec<Campaign>>;

    /// The list as rendered: filtered by the given criteria, sorted by
    /// planned budget. Re-derived on every call.
    async fn get_campaigns_view(
        &self,
        criteria: &FilterCriteria,
        sort: SortOrder,
    ) -> Result<Vec<Campaign>>;

    /// Validates the form and creates a campaign. On validation failure no
    /// request is sent.
    async fn create_campaign(&self, form: CampaignForm) -> Result<Campaign>;

    /// Validates the form (which must carry the target identifier) and
    /// replaces the campaign.
    async fn update_campaign(&self, form: CampaignForm) -> Result<Campaign>;

    async fn delete_campaign(&self, campaign_id: &str) -> Result<()>;
}
