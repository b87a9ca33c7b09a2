//! Campaign commands.

use anyhow::{bail, Context as _};
use chrono::NaiveDate;

use adboard_core::campaigns::Campaign;
use adboard_core::constants::DATE_FORMAT;
use adboard_core::errors::Error;
use adboard_core::filters::FilterCriteria;
use adboard_core::forms::CampaignForm;

use super::require_signin;
use crate::context::ServiceContext;
use crate::output::OutputFormat;
use crate::CampaignCommands;

fn parse_filter_date(flag: &str, raw: Option<String>) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|s| {
        NaiveDate::parse_from_str(&s, DATE_FORMAT)
            .with_context(|| format!("invalid --{flag}: expected YYYY-MM-DD, got {s:?}"))
    })
    .transpose()
}

/// Prints field errors the way a form shows them inline, then fails the
/// command without having sent anything.
fn report_field_errors(result: Result<Campaign, Error>) -> anyhow::Result<Campaign> {
    match result {
        Ok(campaign) => Ok(campaign),
        Err(Error::Validation(errors)) => {
            for e in &errors.errors {
                eprintln!("  {}: {}", e.field, e.message);
            }
            bail!("validation failed; nothing was sent");
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn handle(
    action: CampaignCommands,
    context: &ServiceContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        CampaignCommands::List {
            channels,
            min_budget,
            max_budget,
            start_date,
            end_date,
            sort,
        } => {
            // Listing is attempted regardless of session state; a backend
            // that requires auth answers 401 and that message is shown.
            let criteria = FilterCriteria {
                channels,
                budget_min: min_budget,
                budget_max: max_budget,
                start_date: parse_filter_date("start-date", start_date)?,
                end_date: parse_filter_date("end-date", end_date)?,
            };
            let campaigns = context
                .campaign_service
                .get_campaigns_view(&criteria, sort.into())
                .await?;
            format.print_campaigns(&campaigns);
        }
        CampaignCommands::Create {
            name,
            start_date,
            end_date,
            total_budget,
            spent_budget,
            channels,
        } => {
            require_signin(context)?;
            let form = CampaignForm {
                id: None,
                name,
                start_date,
                end_date,
                total_budget,
                spent_budget,
                channels,
            };
            let created =
                report_field_errors(context.campaign_service.create_campaign(form).await)?;
            println!("Created campaign {}", created.id);
        }
        CampaignCommands::Update {
            id,
            name,
            start_date,
            end_date,
            total_budget,
            spent_budget,
            channels,
        } => {
            require_signin(context)?;
            let form = CampaignForm {
                id: Some(id),
                name,
                start_date,
                end_date,
                total_budget,
                spent_budget,
                channels,
            };
            let updated =
                report_field_errors(context.campaign_service.update_campaign(form).await)?;
            println!("Updated campaign {}", updated.id);
        }
        CampaignCommands::Delete { id } => {
            require_signin(context)?;
            context.campaign_service.delete_campaign(&id).await?;
            println!("Deleted campaign {}", id);
        }
    }
    Ok(())
}
