//! Form models.

use serde::{Deserialize, Serialize};

/// Raw user input for the campaign form.
///
/// One form serves both create and edit; a present `id` marks edit mode and
/// names the campaign being replaced. Fields stay strings until the rule set
/// in this module's sibling has run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignForm {
    pub id: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub total_budget: String,
    pub spent_budget: String,
    pub channels: Vec<String>,
}

impl CampaignForm {
    /// Whether the form is editing an existing campaign.
    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }
}
