//! Campaign form input and its validation rule set.

mod forms_model;
mod forms_rules;

pub use forms_model::CampaignForm;
