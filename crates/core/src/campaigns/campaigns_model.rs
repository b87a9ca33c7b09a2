//! Campaign domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model representing a marketing campaign.
///
/// Budgets are plain `f64`: the backend sends them as numeric strings and a
/// malformed string normalizes to `NaN` rather than failing the whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    /// Channel names. Duplicates carry no meaning; membership is what counts.
    pub channels: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub planned_budget: f64,
    pub spent_budget: f64,
}

impl Campaign {
    /// Whether the campaign runs on the given channel.
    pub fn has_channel(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c == channel)
    }
}

/// Input model for creating a new campaign. The identifier is issued by the
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    pub channels: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub planned_budget: f64,
    pub spent_budget: f64,
}
