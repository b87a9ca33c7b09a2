//! Wire shapes of the campaign backend and their mapping to domain models.
//!
//! The backend speaks snake_case, sends budgets as numeric strings, and
//! wraps channels in `{id, name}` objects. Normalization drops the channel
//! ids and turns budget strings into `f64`, with malformed numbers parsing
//! to `NaN` rather than failing the fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use adboard_core::campaigns::{Campaign, NewCampaign};
use adboard_core::constants::DATE_FORMAT;
use adboard_core::errors::{Error, Result};

/// Identifiers arrive as numbers from some deployments and as strings from
/// others; the domain treats them as opaque strings either way.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

/// A channel as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiChannel {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// A campaign as returned by `GET /api/campaigns/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCampaign {
    pub id: WireId,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub total_budget: String,
    pub spent_budget: String,
    #[serde(default)]
    pub channels: Vec<ApiChannel>,
}

impl ApiCampaign {
    /// Maps the wire shape into the domain model.
    pub fn into_domain(self) -> Result<Campaign> {
        Ok(Campaign {
            id: self.id.into_string(),
            name: self.name,
            channels: self.channels.into_iter().map(|c| c.name).collect(),
            start_date: parse_wire_date("start_date", &self.start_date)?,
            end_date: parse_wire_date("end_date", &self.end_date)?,
            planned_budget: parse_wire_budget(&self.total_budget),
            spent_budget: parse_wire_budget(&self.spent_budget),
        })
    }
}

/// Malformed budget strings become NaN silently; the list still renders.
fn parse_wire_budget(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

fn parse_wire_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| Error::Api(format!("invalid {} in response: {}", field, e)))
}

/// A channel reference in outbound payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ApiChannelRef {
    pub name: String,
}

/// Outbound body for `POST`/`PUT /api/campaigns/`, mirroring the wire shape:
/// budgets go back out as strings, channels as name objects.
#[derive(Debug, Clone, Serialize)]
pub struct ApiCampaignPayload {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub total_budget: String,
    pub spent_budget: String,
    pub channels: Vec<ApiChannelRef>,
}

impl ApiCampaignPayload {
    fn build(
        name: &str,
        channels: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
        planned_budget: f64,
        spent_budget: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            start_date: start_date.format(DATE_FORMAT).to_string(),
            end_date: end_date.format(DATE_FORMAT).to_string(),
            total_budget: planned_budget.to_string(),
            spent_budget: spent_budget.to_string(),
            channels: channels
                .iter()
                .map(|name| ApiChannelRef { name: name.clone() })
                .collect(),
        }
    }
}

impl From<&NewCampaign> for ApiCampaignPayload {
    fn from(new_campaign: &NewCampaign) -> Self {
        Self::build(
            &new_campaign.name,
            &new_campaign.channels,
            new_campaign.start_date,
            new_campaign.end_date,
            new_campaign.planned_budget,
            new_campaign.spent_budget,
        )
    }
}

impl From<&Campaign> for ApiCampaignPayload {
    fn from(campaign: &Campaign) -> Self {
        Self::build(
            &campaign.name,
            &campaign.channels,
            campaign.start_date,
            campaign.end_date,
            campaign.planned_budget,
            campaign.spent_budget,
        )
    }
}
