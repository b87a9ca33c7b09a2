//! The explicit validation rule set run before any campaign is submitted.
//!
//! Rules cover presence and shape only: required name, parseable dates,
//! numeric budgets, at least one channel. Cross-field checks (start before
//! end, non-negative budgets) are deliberately absent; the backend accepts
//! whatever passes here.

use chrono::NaiveDate;

use crate::campaigns::{Campaign, NewCampaign};
use crate::constants::DATE_FORMAT;
use crate::errors::{FieldError, Result, ValidationErrors};
use crate::forms::CampaignForm;

struct ValidatedFields {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    planned_budget: f64,
    spent_budget: f64,
    channels: Vec<String>,
}

fn date_field(field: &str, raw: &str, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::required(field));
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "enter a date as YYYY-MM-DD"));
            None
        }
    }
}

fn budget_field(field: &str, raw: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::required(field));
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldError::new(field, "enter a number"));
            None
        }
    }
}

impl CampaignForm {
    fn validate_fields(&self) -> std::result::Result<ValidatedFields, ValidationErrors> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::required("name"));
        }

        let start_date = date_field("startDate", &self.start_date, &mut errors);
        let end_date = date_field("endDate", &self.end_date, &mut errors);
        let planned_budget = budget_field("totalBudget", &self.total_budget, &mut errors);
        let spent_budget = budget_field("spentBudget", &self.spent_budget, &mut errors);

        if self.channels.is_empty() {
            errors.push(FieldError::new("channels", "select at least one channel"));
        }

        match (start_date, end_date, planned_budget, spent_budget) {
            (Some(start_date), Some(end_date), Some(planned_budget), Some(spent_budget))
                if errors.is_empty() =>
            {
                Ok(ValidatedFields {
                    name: name.to_string(),
                    start_date,
                    end_date,
                    planned_budget,
                    spent_budget,
                    channels: self.channels.clone(),
                })
            }
            _ => Err(ValidationErrors { errors }),
        }
    }

    /// Runs the rule set and builds the create input. Fails with per-field
    /// errors and sends nothing otherwise.
    pub fn validate_new(&self) -> Result<NewCampaign> {
        let fields = self.validate_fields()?;
        Ok(NewCampaign {
            name: fields.name,
            channels: fields.channels,
            start_date: fields.start_date,
            end_date: fields.end_date,
            planned_budget: fields.planned_budget,
            spent_budget: fields.spent_budget,
        })
    }

    /// Runs the rule set and builds the full replacement for an edit. The
    /// form must carry the target identifier.
    pub fn validate_update(&self) -> Result<Campaign> {
        let mut errors = Vec::new();
        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => {
                errors.push(FieldError::required("id"));
                None
            }
        };

        let fields = match self.validate_fields() {
            Ok(fields) => Some(fields),
            Err(mut field_errors) => {
                errors.append(&mut field_errors.errors);
                None
            }
        };

        match (id, fields) {
            (Some(id), Some(fields)) => Ok(Campaign {
                id,
                name: fields.name,
                channels: fields.channels,
                start_date: fields.start_date,
                end_date: fields.end_date,
                planned_budget: fields.planned_budget,
                spent_budget: fields.spent_budget,
            }),
            _ => Err(ValidationErrors { errors }.into()),
        }
    }
}
