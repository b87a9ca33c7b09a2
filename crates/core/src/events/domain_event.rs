//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about data changes. Runtime adapters
/// translate them into platform-specific actions (list refresh, logging,
/// UI notifications).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Campaigns were created, updated, or deleted. The next list read goes
    /// back to the backend.
    CampaignsChanged { campaign_ids: Vec<String> },

    /// The session moved between authenticated and unauthenticated.
    SessionChanged { authenticated: bool },
}

impl DomainEvent {
    /// Creates a CampaignsChanged event.
    pub fn campaigns_changed(campaign_ids: Vec<String>) -> Self {
        Self::CampaignsChanged { campaign_ids }
    }

    /// Creates a SessionChanged event.
    pub fn session_changed(authenticated: bool) -> Self {
        Self::SessionChanged { authenticated }
    }
}
