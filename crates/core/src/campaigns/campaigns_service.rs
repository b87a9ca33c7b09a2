use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::campaigns::{Campaign, CampaignRepositoryTrait, CampaignServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::filters::{self, FilterCriteria, SortOrder};
use crate::forms::CampaignForm;

/// Service composing the campaign repository with the filtering and sorting
/// engine. Emits a `CampaignsChanged` event after every successful mutation.
pub struct CampaignService {
    repository: Arc<dyn CampaignRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl CampaignService {
    pub fn new(
        repository: Arc<dyn CampaignRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait]
impl CampaignServiceTrait for CampaignService {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        self.repository.list().await
    }

    async fn get_campaigns_view(
        &self,
        criteria: &FilterCriteria,
        sort: SortOrder,
    ) -> Result<Vec<Campaign>> {
        let campaigns = self.repository.list().await?;
        let narrowed = filters::apply(&campaigns, criteria);
        debug!(
            "campaign view: {} of {} after filters",
            narrowed.len(),
            campaigns.len()
        );
        Ok(filters::sort_by_planned_budget(narrowed, sort))
    }

    async fn create_campaign(&self, form: CampaignForm) -> Result<Campaign> {
        let new_campaign = form.validate_new()?;
        let created = self.repository.create(new_campaign).await?;
        self.event_sink
            .emit(DomainEvent::campaigns_changed(vec![created.id.clone()]));
        Ok(created)
    }

    async fn update_campaign(&self, form: CampaignForm) -> Result<Campaign> {
        let campaign = form.validate_update()?;
        let updated = self.repository.update(campaign).await?;
        self.event_sink
            .emit(DomainEvent::campaigns_changed(vec![updated.id.clone()]));
        Ok(updated)
    }

    async fn delete_campaign(&self, campaign_id: &str) -> Result<()> {
        self.repository.delete(campaign_id).await?;
        self.event_sink
            .emit(DomainEvent::campaigns_changed(vec![campaign_id.to_string()]));
        Ok(())
    }
}
