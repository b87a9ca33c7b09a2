//! Output formatting for campaign lists.

use clap::ValueEnum;
use tabled::{Table, Tabled};

use adboard_core::campaigns::Campaign;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct CampaignRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Start")]
    start_date: String,
    #[tabled(rename = "End")]
    end_date: String,
    #[tabled(rename = "Planned")]
    planned_budget: f64,
    #[tabled(rename = "Spent")]
    spent_budget: f64,
    #[tabled(rename = "Channels")]
    channels: String,
}

impl From<&Campaign> for CampaignRow {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id.clone(),
            name: campaign.name.clone(),
            start_date: campaign.start_date.to_string(),
            end_date: campaign.end_date.to_string(),
            planned_budget: campaign.planned_budget,
            spent_budget: campaign.spent_budget,
            channels: campaign.channels.join(", "),
        }
    }
}

impl OutputFormat {
    pub fn print_campaigns(&self, campaigns: &[Campaign]) {
        match self {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(campaigns).unwrap_or_default()
                );
            }
            OutputFormat::Table => {
                if campaigns.is_empty() {
                    println!("No campaigns available");
                    return;
                }
                let rows: Vec<CampaignRow> = campaigns.iter().map(CampaignRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
    }
}
